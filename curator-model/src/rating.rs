use crate::error::{ModelError, Result};

/// Star rating attached to a gallery.
///
/// The catalog stores ratings as plain integers; the editor renders them on a
/// five-star scale but no range is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rating(i32);

impl Rating {
    /// Highest value the star widget offers.
    pub const MAX_STARS: i32 = 5;

    pub fn new(value: i32) -> Self {
        Rating(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Coerces free-form input into a rating. Blank input means "no rating".
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<i32>()
            .map(|value| Some(Rating(value)))
            .map_err(|_| ModelError::InvalidRating(trimmed.to_string()))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Rating {
    fn from(value: i32) -> Self {
        Rating(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coerces_integers_and_blank() {
        assert_eq!(Rating::parse(" 4 "), Ok(Some(Rating::new(4))));
        assert_eq!(Rating::parse(""), Ok(None));
        assert!(matches!(
            Rating::parse("four"),
            Err(ModelError::InvalidRating(raw)) if raw == "four"
        ));
    }
}
