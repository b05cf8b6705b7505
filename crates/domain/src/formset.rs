//! Dynamic formset state machine
//!
//! An ordered run of structurally identical sub-forms sharing a prefix and a
//! hidden total-count field. The server-side form processing contract
//! requires the count field to equal the number of fragments present; here
//! the two cannot diverge because the count is derived from the row list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated formset prefix (non-empty, no whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormsetPrefix(String);

impl FormsetPrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, DomainError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(DomainError::constraint("Formset prefix cannot be empty"));
        }
        if prefix.chars().any(char::is_whitespace) {
            return Err(DomainError::constraint(format!(
                "Formset prefix cannot contain whitespace: {:?}",
                prefix
            )));
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier of the fragment at `index`, e.g. `effects-3`.
    pub fn row_id(&self, index: u32) -> RowId {
        RowId {
            prefix: self.clone(),
            index,
        }
    }
}

impl fmt::Display for FormsetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed fragment identifier: the structured replacement for substituting a
/// placeholder token into a cloned template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    prefix: FormsetPrefix,
    index: u32,
}

impl RowId {
    pub fn prefix(&self) -> &FormsetPrefix {
        &self.prefix
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.index)
    }
}

/// Which half of a sub-form is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowMode {
    /// Select-existing row shown, create-new group hidden
    SelectExisting,
    /// Create-new group shown, select-existing row hidden
    CreateNew,
}

/// One fragment of a formset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubForm {
    index: u32,
    create_new: bool,
}

impl SubForm {
    fn fresh(index: u32) -> Self {
        Self {
            index,
            create_new: false,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn create_new(&self) -> bool {
        self.create_new
    }

    /// Field-toggle rule: the checkbox picks which half of the row shows.
    pub fn row_mode(&self) -> RowMode {
        if self.create_new {
            RowMode::CreateNew
        } else {
            RowMode::SelectExisting
        }
    }
}

/// Ordered sequence of sub-forms with a derived total count.
///
/// States: *empty* (before any fragment exists) and *populated(n)* for
/// n >= 1. `add` moves empty -> populated(1) or populated(n) ->
/// populated(n+1); `reset` collapses any state to populated(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formset {
    prefix: FormsetPrefix,
    rows: Vec<SubForm>,
}

impl Formset {
    /// Empty formset; the page template contributed no fragments.
    pub fn new(prefix: FormsetPrefix) -> Self {
        Self {
            prefix,
            rows: Vec::new(),
        }
    }

    /// Formset seeded with `count` pre-existing fragments (initial page
    /// load), indices 0..count, toggles unchecked.
    pub fn with_rows(prefix: FormsetPrefix, count: u32) -> Self {
        Self {
            rows: (0..count).map(SubForm::fresh).collect(),
            prefix,
        }
    }

    pub fn prefix(&self) -> &FormsetPrefix {
        &self.prefix
    }

    pub fn rows(&self) -> &[SubForm] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the hidden total-count field. Always equals the number of
    /// fragments present.
    pub fn total_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Append a fresh fragment at the next index and return it.
    pub fn add(&mut self) -> SubForm {
        let sub_form = SubForm::fresh(self.total_count());
        self.rows.push(sub_form);
        sub_form
    }

    /// Collapse to exactly one fresh fragment at index 0, whatever the
    /// prior count.
    pub fn reset(&mut self) -> SubForm {
        self.rows.clear();
        self.add()
    }

    /// Apply the sub-form toggle at `index`.
    pub fn set_create_new(&mut self, index: u32, checked: bool) -> Result<SubForm, DomainError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.index == index)
            .ok_or_else(|| DomainError::not_found("SubForm", index.to_string()))?;
        row.create_new = checked;
        Ok(*row)
    }

    /// Identifier of the fragment at `index`.
    pub fn row_id(&self, index: u32) -> RowId {
        self.prefix.row_id(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> FormsetPrefix {
        FormsetPrefix::new("effects").unwrap()
    }

    #[test]
    fn test_prefix_rejects_empty_and_whitespace() {
        assert!(FormsetPrefix::new("").is_err());
        assert!(FormsetPrefix::new("two words").is_err());
        assert!(FormsetPrefix::new("effects").is_ok());
    }

    #[test]
    fn test_row_id_renders_prefix_dash_index() {
        assert_eq!(effects().row_id(3).to_string(), "effects-3");
    }

    #[test]
    fn test_add_from_empty_assigns_sequential_indices() {
        let mut formset = Formset::new(effects());
        assert!(formset.is_empty());
        for expected in 0..5 {
            let row = formset.add();
            assert_eq!(row.index(), expected);
        }
        assert_eq!(formset.total_count(), 5);
        let indices: Vec<u32> = formset.rows().iter().map(SubForm::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_count_tracks_rows() {
        let mut formset = Formset::with_rows(effects(), 2);
        assert_eq!(formset.total_count(), 2);
        formset.add();
        assert_eq!(formset.total_count(), 3);
        assert_eq!(formset.total_count() as usize, formset.rows().len());
    }

    #[test]
    fn test_reset_always_lands_on_one_fresh_row() {
        for initial in [0, 1, 4, 9] {
            let mut formset = Formset::with_rows(effects(), initial);
            formset.rows.iter_mut().for_each(|row| row.create_new = true);
            let row = formset.reset();
            assert_eq!(row.index(), 0);
            assert!(!row.create_new());
            assert_eq!(formset.total_count(), 1);
        }
    }

    #[test]
    fn test_toggles_are_independent_per_row() {
        let mut formset = Formset::with_rows(effects(), 3);
        formset.set_create_new(1, true).unwrap();
        assert_eq!(formset.rows()[0].row_mode(), RowMode::SelectExisting);
        assert_eq!(formset.rows()[1].row_mode(), RowMode::CreateNew);
        assert_eq!(formset.rows()[2].row_mode(), RowMode::SelectExisting);
    }

    #[test]
    fn test_toggle_unknown_index_is_not_found() {
        let mut formset = Formset::with_rows(effects(), 1);
        let err = formset.set_create_new(7, true).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
