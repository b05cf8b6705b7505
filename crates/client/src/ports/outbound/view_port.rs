//! View ports - Injected handles onto the rendering layer
//!
//! The original page code located widgets by fixed document identifiers at
//! every call site. Here the rendering layer hands the controllers explicit
//! handles instead; a handle the view cannot resolve surfaces as `None`, and
//! the operation on it becomes a logged no-op.
//!
//! All traits are object-safe so a view can hand out `&mut dyn` borrows of
//! whatever widget wrappers it keeps.

use sheetwright_domain::{FieldGroup, OptionEntry, RowId, RowMode};

/// Handle onto one selection widget.
pub trait SelectControl {
    /// Replace the full option list, preserving the given order.
    fn set_options(&mut self, options: Vec<OptionEntry>);

    /// The first selected option, if any, including its metadata.
    fn selected(&self) -> Option<OptionEntry>;
}

/// Handle onto one collapsible field container.
pub trait FieldWrap {
    fn set_visible(&mut self, visible: bool);
}

/// The widgets of the experience-spend form.
///
/// Resolvers return `None` when the underlying widget is missing from the
/// document; callers log and skip the operation rather than failing.
pub trait SpendFormView {
    /// The example selector, repopulated on every category change.
    fn example_select(&mut self) -> Option<&mut dyn SelectControl>;

    /// The value selector, repopulated for MeritFlaw spends.
    fn value_select(&mut self) -> Option<&mut dyn SelectControl>;

    /// The container of a dependent field group.
    fn field_wrap(&mut self, group: FieldGroup) -> Option<&mut dyn FieldWrap>;
}

/// The widgets of a dynamic formset.
pub trait FormsetView {
    /// Instantiate the fragment template for `row` and append it to the
    /// formset container.
    fn append_row(&mut self, row: RowId);

    /// Remove every fragment from the container.
    fn clear_rows(&mut self);

    /// Write the hidden total-count field.
    fn set_total_count(&mut self, count: u32);

    /// Show one half of a sub-form and hide the other.
    fn set_row_mode(&mut self, row: RowId, mode: RowMode);

    /// Show or hide the formset's add control.
    fn set_add_visible(&mut self, visible: bool);
}
