use crate::error::{ModelError, Result};

/// Declares an opaque, string-backed catalog identifier.
///
/// Catalog ids travel as GraphQL `ID` scalars, so they are kept as strings and
/// ordered lexicographically. Aggregation relies on that ordering when it
/// sorts association lists.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw id, rejecting empty strings.
            pub fn new(raw: impl Into<String>) -> Result<Self> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(ModelError::EmptyId($kind));
                }
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(raw: String) -> Result<Self> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a gallery record.
    GalleryID,
    "gallery"
);
string_id!(
    /// Identifier of a performer.
    PerformerID,
    "performer"
);
string_id!(
    /// Identifier of a tag.
    TagID,
    "tag"
);
string_id!(
    /// Identifier of a studio.
    StudioID,
    "studio"
);
