//! Identifier newtypes for the form domain
//!
//! Identifiers here are opaque server-issued strings (e.g. `bg_12`, `br_7`),
//! never parsed or synthesized on the client side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to the character or object a form pertains to.
///
/// Passed verbatim to the query endpoints; the client attaches no meaning
/// to its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SubjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
