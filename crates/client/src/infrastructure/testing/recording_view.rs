//! Recording view handles
//!
//! Plain structs implementing the view ports, recording everything the
//! controllers apply so tests can assert on widget state without a document
//! tree. Also used by the demo binary to print form state.

use crate::ports::outbound::{FieldWrap, FormsetView, SelectControl, SpendFormView};
use sheetwright_domain::{FieldGroup, OptionEntry, RowId, RowMode};

/// A selection widget as a plain option list.
///
/// Mirrors native selector behavior: replacing the options selects the
/// first one until something is picked explicitly.
#[derive(Debug, Default, Clone)]
pub struct RecordingSelect {
    pub options: Vec<OptionEntry>,
    pub selected_index: Option<usize>,
}

impl RecordingSelect {
    /// Pick the option with the given value. Returns false when absent.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected_index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.label.as_str()).collect()
    }
}

impl SelectControl for RecordingSelect {
    fn set_options(&mut self, options: Vec<OptionEntry>) {
        self.options = options;
        self.selected_index = None;
    }

    fn selected(&self) -> Option<OptionEntry> {
        match self.selected_index {
            Some(index) => self.options.get(index).cloned(),
            None => self.options.first().cloned(),
        }
    }
}

/// A field container reduced to its visibility bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibleFlag(pub bool);

impl FieldWrap for VisibleFlag {
    fn set_visible(&mut self, visible: bool) {
        self.0 = visible;
    }
}

/// Recording implementation of the spend-form view.
#[derive(Debug, Default)]
pub struct RecordingSpendFormView {
    pub example_select: RecordingSelect,
    pub value_select: RecordingSelect,
    pub example_wrap: VisibleFlag,
    pub value_wrap: VisibleFlag,
    pub note_wrap: VisibleFlag,
    pub pooled_wrap: VisibleFlag,
    /// Simulate a page missing the value selector
    pub value_select_missing: bool,
}

impl RecordingSpendFormView {
    pub fn wrap(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::Example => self.example_wrap.0,
            FieldGroup::Value => self.value_wrap.0,
            FieldGroup::Note => self.note_wrap.0,
            FieldGroup::Pooled => self.pooled_wrap.0,
        }
    }
}

impl SpendFormView for RecordingSpendFormView {
    fn example_select(&mut self) -> Option<&mut dyn SelectControl> {
        Some(&mut self.example_select)
    }

    fn value_select(&mut self) -> Option<&mut dyn SelectControl> {
        if self.value_select_missing {
            None
        } else {
            Some(&mut self.value_select)
        }
    }

    fn field_wrap(&mut self, group: FieldGroup) -> Option<&mut dyn FieldWrap> {
        match group {
            FieldGroup::Example => Some(&mut self.example_wrap),
            FieldGroup::Value => Some(&mut self.value_wrap),
            FieldGroup::Note => Some(&mut self.note_wrap),
            FieldGroup::Pooled => Some(&mut self.pooled_wrap),
        }
    }
}

/// Recording implementation of the formset view.
#[derive(Debug)]
pub struct RecordingFormsetView {
    /// Fragment ids currently in the container, in append order
    pub rows: Vec<String>,
    /// Hidden total-count field
    pub total_count: u32,
    /// Log of every applied row mode
    pub row_modes: Vec<(String, RowMode)>,
    pub add_visible: bool,
    /// Number of clear_rows calls seen
    pub clears: u32,
}

impl Default for RecordingFormsetView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            row_modes: Vec::new(),
            add_visible: true,
            clears: 0,
        }
    }
}

impl RecordingFormsetView {
    /// The last mode applied to the given fragment, if any.
    pub fn latest_mode(&self, row_id: &str) -> Option<RowMode> {
        self.row_modes
            .iter()
            .rev()
            .find(|(id, _)| id == row_id)
            .map(|(_, mode)| *mode)
    }
}

impl FormsetView for RecordingFormsetView {
    fn append_row(&mut self, row: RowId) {
        self.rows.push(row.to_string());
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
        self.clears += 1;
    }

    fn set_total_count(&mut self, count: u32) {
        self.total_count = count;
    }

    fn set_row_mode(&mut self, row: RowId, mode: RowMode) {
        self.row_modes.push((row.to_string(), mode));
    }

    fn set_add_visible(&mut self, visible: bool) {
        self.add_visible = visible;
    }
}
