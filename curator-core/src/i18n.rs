//! Message catalog with ICU-style argument and plural formatting.
//!
//! Only the subset the editor needs is understood: `{name}` substitution and
//! `{name, plural, =N {...} one {...} other {...}}` where `#` inside a branch
//! stands for the number. Anything else is emitted verbatim.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::services::Translator;

const ENGLISH: &str = include_str!("../locales/en.json");

/// Flat map of dotted message ids to templates.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Built-in English catalog.
    pub fn english() -> Self {
        match Self::from_json(ENGLISH) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("Built-in message catalog is invalid: {}", err);
                Self::default()
            }
        }
    }

    /// Parses a catalog; nested objects become dotted ids.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let mut messages = HashMap::new();
        flatten(None, &value, &mut messages);
        Ok(Self { messages })
    }

    /// Overrides or adds one template.
    pub fn insert(&mut self, id: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(id.into(), template.into());
    }

    pub fn template(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for MessageCatalog {
    fn message(&self, id: &str, args: &[(&str, &str)]) -> String {
        match self.template(id) {
            Some(template) => format_message(template, args),
            None => {
                debug!("Missing message id {}", id);
                id.to_string()
            }
        }
    }
}

fn flatten(
    prefix: Option<&str>,
    value: &Value,
    out: &mut HashMap<String, String>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let id = match prefix {
                    Some(prefix) => format!("{prefix}.{key}"),
                    None => key.clone(),
                };
                flatten(Some(&id), child, out);
            }
        }
        Value::String(template) => {
            if let Some(id) = prefix {
                out.insert(id.to_string(), template.clone());
            }
        }
        other => {
            if let Some(id) = prefix {
                out.insert(id.to_string(), other.to_string());
            }
        }
    }
}

/// Formats `template` with named `args`.
pub fn format_message(template: &str, args: &[(&str, &str)]) -> String {
    format_inner(template, args, None)
}

fn lookup<'a>(args: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    args.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

fn format_inner(
    template: &str,
    args: &[(&str, &str)],
    plural_value: Option<&str>,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(['{', '#']) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if tail.starts_with('#') {
            match plural_value {
                Some(value) => out.push_str(value),
                None => out.push('#'),
            }
            rest = &tail[1..];
            continue;
        }

        let Some(end) = matching_brace(tail) else {
            out.push_str(tail);
            return out;
        };
        let body = &tail[1..end];
        out.push_str(&format_placeholder(body, args));
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Index of the `}` closing the `{` at position 0.
fn matching_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn format_placeholder(body: &str, args: &[(&str, &str)]) -> String {
    let mut parts = body.splitn(3, ',');
    let name = parts.next().unwrap_or_default().trim();

    match (parts.next().map(str::trim), parts.next()) {
        (None, _) => match lookup(args, name) {
            Some(value) => value.to_string(),
            None => format!("{{{name}}}"),
        },
        (Some("plural"), Some(branches)) => {
            let raw = lookup(args, name).unwrap_or("0");
            let count = raw.trim().parse::<i64>().unwrap_or(0);
            match select_plural_branch(branches, count) {
                Some(branch) => format_inner(branch, args, Some(raw)),
                None => String::new(),
            }
        }
        _ => format!("{{{body}}}"),
    }
}

fn select_plural_branch(branches: &str, count: i64) -> Option<&str> {
    let mut rest = branches.trim_start();
    let mut other = None;
    let mut one = None;

    while !rest.is_empty() {
        let open = rest.find('{')?;
        let selector = rest[..open].trim();
        let end = matching_brace(&rest[open..])? + open;
        let branch = &rest[open + 1..end];

        if let Some(exact) = selector.strip_prefix('=') {
            if exact.trim().parse::<i64>().ok() == Some(count) {
                return Some(branch);
            }
        } else if selector == "one" {
            one = Some(branch);
        } else if selector == "other" {
            other = Some(branch);
        }

        rest = rest[end + 1..].trim_start();
    }

    if count == 1 { one.or(other) } else { other }
}
