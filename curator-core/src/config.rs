//! Catalog client configuration.

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::error::CuratorError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9999";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Source that produced the client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Where the catalog's GraphQL API lives and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the catalog server; `/graphql` is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Sent as the `ApiKey` header when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Whole-request timeout for mutations.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Load client configuration from the process environment.
    /// Evaluation order:
    /// 1) `$CURATOR_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$CURATOR_CONFIG_JSON` (inline JSON),
    /// 3) the first default file that exists,
    /// 4) defaults.
    ///
    /// `$CURATOR_ENDPOINT` and `$CURATOR_API_KEY` override whatever was
    /// loaded.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Self::load_from_env`] with an explicit variable lookup.
    pub fn load_with(
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let (mut config, source) =
            if let Some(path_str) = non_blank("CURATOR_CONFIG_PATH") {
                let path = PathBuf::from(path_str);
                let config = Self::load_from_file(&path)?;
                (config, ConfigSource::EnvPath(path))
            } else if let Some(raw) = non_blank("CURATOR_CONFIG_JSON") {
                let parsed = Self::parse(&raw, ConfigFormat::Json)
                    .context("failed to parse CURATOR_CONFIG_JSON")?;
                (parsed, ConfigSource::EnvInline)
            } else if let Some(path) = Self::find_default_file() {
                let config = Self::load_from_file(&path)?;
                (config, ConfigSource::File(path))
            } else {
                (Self::default(), ConfigSource::Default)
            };

        if let Some(endpoint) = non_blank("CURATOR_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(api_key) = non_blank("CURATOR_API_KEY") {
            config.api_key = Some(api_key);
        }

        config.graphql_url().map_err(|err| anyhow!("{err}"))?;
        Ok((config, source))
    }

    /// Reads a config file, picking the format from its extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("cannot read catalog config {}", path.display())
        })?;
        Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("in catalog config {}", path.display()))
    }

    /// Parses `contents` in the given format. [`ConfigFormat::Detect`]
    /// reads a leading `{` as JSON and anything else as TOML.
    pub fn parse(contents: &str, format: ConfigFormat) -> anyhow::Result<Self> {
        let format = match format {
            ConfigFormat::Detect if contents.trim_start().starts_with('{') => {
                ConfigFormat::Json
            }
            ConfigFormat::Detect => ConfigFormat::Toml,
            known => known,
        };
        match format {
            ConfigFormat::Json => serde_json::from_str(contents)
                .map_err(|err| anyhow!("catalog config is not valid JSON: {err}")),
            _ => toml::from_str(contents)
                .map_err(|err| anyhow!("catalog config is not valid TOML: {err}")),
        }
    }

    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> Result<Url, CuratorError> {
        let mut base = Url::parse(self.endpoint.trim()).map_err(|err| {
            CuratorError::Config(format!(
                "invalid endpoint {:?}: {err}",
                self.endpoint
            ))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("graphql").map_err(|err| {
            CuratorError::Config(format!("invalid endpoint path: {err}"))
        })
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(Path::new)
            .find(|path| path.is_file())
            .map(Path::to_path_buf)
    }
}

/// Looked up relative to the working directory, first match wins.
const DEFAULT_FILES: &[&str] = &[
    "curator.toml",
    "curator.json",
    "config/curator.toml",
    "config/curator.json",
];

/// Syntax of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    /// Decided from the first non-blank character.
    Detect,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml" | "tml") => Self::Toml,
            _ => Self::Detect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_url_appends_path() {
        let mut config = ClientConfig::default();
        assert_eq!(
            config.graphql_url().unwrap().as_str(),
            "http://localhost:9999/graphql"
        );
        config.endpoint = "https://catalog.example/stash/".into();
        assert_eq!(
            config.graphql_url().unwrap().as_str(),
            "https://catalog.example/stash/graphql"
        );
    }

    #[test]
    fn invalid_endpoint_is_a_config_error() {
        let config = ClientConfig {
            endpoint: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(config.graphql_url(), Err(CuratorError::Config(_))));
    }

    #[test]
    fn detected_format_accepts_toml_and_json() {
        let toml = ClientConfig::parse(
            "endpoint = \"http://nas:9999\"\napi_key = \"k\"\n",
            ConfigFormat::Detect,
        )
        .unwrap();
        assert_eq!(toml.endpoint, "http://nas:9999");
        assert_eq!(toml.api_key.as_deref(), Some("k"));
        assert_eq!(toml.timeout_secs, 30);

        let json =
            ClientConfig::parse("  {\"timeout_secs\": 5}", ConfigFormat::Detect)
                .unwrap();
        assert_eq!(json.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(json.timeout_secs, 5);
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/curator.json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("curator.tml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("curator.conf")),
            ConfigFormat::Detect
        );
    }

    #[test]
    fn parse_errors_name_the_expected_syntax() {
        let err = ClientConfig::parse("endpoint = ", ConfigFormat::Detect)
            .unwrap_err();
        assert!(err.to_string().contains("not valid TOML"));

        let err =
            ClientConfig::parse("{\"timeout_secs\": \"x\"}", ConfigFormat::Json)
                .unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
