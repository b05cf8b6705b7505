//! Field-group visibility rules for the experience spend form
//!
//! The original form patched visibility in sequence: a default branch ran
//! for every non-terminal category, then MeritFlaw and Background applied
//! further overrides. The table below is the flattened result of that
//! ordering; keep it exhaustive so a new category forces a decision here.

use serde::{Deserialize, Serialize};

use super::category::SpendCategory;

/// The dependent field groups driven by the category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    Example,
    Value,
    Note,
    Pooled,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Example,
        FieldGroup::Value,
        FieldGroup::Note,
        FieldGroup::Pooled,
    ];
}

/// Visibility of the four dependent field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVisibility {
    pub example: bool,
    pub value: bool,
    pub note: bool,
    pub pooled: bool,
}

impl FieldVisibility {
    /// Everything hidden: the terminal-category row of the table.
    pub fn hidden_all() -> Self {
        Self {
            example: false,
            value: false,
            note: false,
            pooled: false,
        }
    }

    /// Resolve the visibility table for a category.
    ///
    /// `is_group_member` gates the pooled group on Background spends; pooling
    /// only applies to characters that belong to a group.
    pub fn for_category(category: SpendCategory, is_group_member: bool) -> Self {
        match category {
            SpendCategory::Placeholder
            | SpendCategory::Willpower
            | SpendCategory::Humanity
            | SpendCategory::PathRating => Self::hidden_all(),
            SpendCategory::Image | SpendCategory::Attribute | SpendCategory::Ability => Self {
                example: true,
                value: false,
                note: false,
                pooled: false,
            },
            SpendCategory::MeritFlaw => Self {
                example: true,
                value: true,
                note: false,
                pooled: false,
            },
            SpendCategory::Background => Self {
                example: true,
                value: false,
                note: true,
                pooled: is_group_member,
            },
        }
    }

    pub fn visible(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::Example => self.example,
            FieldGroup::Value => self.value,
            FieldGroup::Note => self.note,
            FieldGroup::Pooled => self.pooled,
        }
    }
}
