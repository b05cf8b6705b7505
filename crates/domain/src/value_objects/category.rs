//! Spend category value object
//!
//! The top-level classification a player picks when spending experience.
//! The wire tags are fixed by the server's form contract, including the
//! literal `-----` placeholder row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Top-level spend classification selected on the experience form.
///
/// Closed enumeration: the category selector is rendered from this same set,
/// so an unknown tag at a boundary is a programming error, not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpendCategory {
    /// The `-----` placeholder row
    Placeholder,
    Image,
    Attribute,
    Ability,
    Background,
    Willpower,
    MeritFlaw,
    Humanity,
    PathRating,
}

impl SpendCategory {
    /// The wire tag used in the category selector and the query endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "-----",
            Self::Image => "Image",
            Self::Attribute => "Attribute",
            Self::Ability => "Ability",
            Self::Background => "Background",
            Self::Willpower => "Willpower",
            Self::MeritFlaw => "MeritFlaw",
            Self::Humanity => "Humanity",
            Self::PathRating => "Path Rating",
        }
    }

    /// Categories with no dependent example field.
    ///
    /// For these no example query is issued and every dependent field group
    /// stays hidden, regardless of what the default visibility branch would
    /// otherwise show.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Placeholder | Self::Willpower | Self::Humanity | Self::PathRating
        )
    }
}

impl fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpendCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-----" => Ok(Self::Placeholder),
            "Image" => Ok(Self::Image),
            "Attribute" => Ok(Self::Attribute),
            "Ability" => Ok(Self::Ability),
            "Background" => Ok(Self::Background),
            "Willpower" => Ok(Self::Willpower),
            "MeritFlaw" => Ok(Self::MeritFlaw),
            "Humanity" => Ok(Self::Humanity),
            "Path Rating" => Ok(Self::PathRating),
            _ => Err(DomainError::parse(format!("Unknown spend category: {}", s))),
        }
    }
}

impl TryFrom<String> for SpendCategory {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpendCategory> for String {
    fn from(value: SpendCategory) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_tag() {
        let all = [
            SpendCategory::Placeholder,
            SpendCategory::Image,
            SpendCategory::Attribute,
            SpendCategory::Ability,
            SpendCategory::Background,
            SpendCategory::Willpower,
            SpendCategory::MeritFlaw,
            SpendCategory::Humanity,
            SpendCategory::PathRating,
        ];
        for category in all {
            assert_eq!(category.as_str().parse::<SpendCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_tag_is_parse_error() {
        let err = "Quintessence".parse::<SpendCategory>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_terminal_set() {
        assert!(SpendCategory::Placeholder.is_terminal());
        assert!(SpendCategory::Willpower.is_terminal());
        assert!(SpendCategory::Humanity.is_terminal());
        assert!(SpendCategory::PathRating.is_terminal());
        assert!(!SpendCategory::Background.is_terminal());
        assert!(!SpendCategory::MeritFlaw.is_terminal());
        assert!(!SpendCategory::Attribute.is_terminal());
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&SpendCategory::PathRating).unwrap();
        assert_eq!(json, "\"Path Rating\"");
        let parsed: SpendCategory = serde_json::from_str("\"-----\"").unwrap();
        assert_eq!(parsed, SpendCategory::Placeholder);
    }
}
