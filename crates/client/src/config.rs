//! Form configuration
//!
//! The page template carries the wiring for one form instance as data
//! attributes on the root form element. They are read exactly once, at
//! initialization; nothing re-reads the document afterwards.

use thiserror::Error;

use sheetwright_domain::SubjectId;

/// Attribute naming the load-examples endpoint URL
pub const EXAMPLES_URL_ATTR: &str = "data-examples-url";
/// Attribute naming the load-values endpoint URL
pub const VALUES_URL_ATTR: &str = "data-values-url";
/// Attribute carrying the subject identifier
pub const SUBJECT_ATTR: &str = "data-subject";
/// Attribute carrying the group-membership flag
pub const GROUP_MEMBER_ATTR: &str = "data-group-member";

/// Errors reading the root form element's attributes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing form attribute: {0}")]
    MissingAttribute(&'static str),
}

/// Read-once configuration for one form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub examples_url: String,
    pub values_url: String,
    pub subject: SubjectId,
    /// Whether the character belongs to a group; gates the pooled field
    pub is_group_member: bool,
}

impl FormConfig {
    /// Build from the root element's attribute list.
    ///
    /// Endpoint URLs and the subject are required. The group-member flag
    /// defaults to false and accepts `true` case-insensitively, matching
    /// the poolable flag convention.
    pub fn from_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut examples_url = None;
        let mut values_url = None;
        let mut subject = None;
        let mut is_group_member = false;

        for (name, value) in attributes {
            match name {
                EXAMPLES_URL_ATTR => examples_url = Some(value.to_string()),
                VALUES_URL_ATTR => values_url = Some(value.to_string()),
                SUBJECT_ATTR => subject = Some(SubjectId::from(value)),
                GROUP_MEMBER_ATTR => is_group_member = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        Ok(Self {
            examples_url: examples_url
                .ok_or(ConfigError::MissingAttribute(EXAMPLES_URL_ATTR))?,
            values_url: values_url.ok_or(ConfigError::MissingAttribute(VALUES_URL_ATTR))?,
            subject: subject.ok_or(ConfigError::MissingAttribute(SUBJECT_ATTR))?,
            is_group_member,
        })
    }
}
