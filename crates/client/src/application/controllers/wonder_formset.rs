//! Wonder sub-effect formset controller
//!
//! Manages the dynamic run of effect sub-forms on the wonder form: adding
//! fragments, the per-row select-or-create toggle, and the reset that fires
//! when the governing wonder type forbids sub-effects.

use std::collections::BTreeSet;

use crate::ports::outbound::FormsetView;
use sheetwright_domain::Formset;

/// Controller for one dynamic formset
pub struct WonderFormController<V: FormsetView> {
    formset: Formset,
    view: V,
    /// Governing-type tags whose wonders carry no sub-effects
    restricted_types: BTreeSet<String>,
}

impl<V: FormsetView> WonderFormController<V> {
    pub fn new(
        formset: Formset,
        view: V,
        restricted_types: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            formset,
            view,
            restricted_types: restricted_types.into_iter().collect(),
        }
    }

    pub fn formset(&self) -> &Formset {
        &self.formset
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial wiring for a freshly rendered page: push the current count
    /// and re-apply the toggle rule of every pre-existing sub-form.
    pub fn attach(&mut self) {
        self.view.set_total_count(self.formset.total_count());
        for row in self.formset.rows() {
            self.view
                .set_row_mode(self.formset.prefix().row_id(row.index()), row.row_mode());
        }
    }

    /// The add control was clicked: instantiate the next fragment.
    pub fn add_row(&mut self) {
        let row = self.formset.add();
        let row_id = self.formset.row_id(row.index());
        self.view.append_row(row_id.clone());
        self.view.set_total_count(self.formset.total_count());
        self.view.set_row_mode(row_id, row.row_mode());
    }

    /// A sub-form's select-or-create checkbox changed.
    pub fn row_toggled(&mut self, index: u32, checked: bool) {
        match self.formset.set_create_new(index, checked) {
            Ok(row) => {
                self.view
                    .set_row_mode(self.formset.row_id(index), row.row_mode());
            }
            Err(error) => {
                tracing::warn!(index, %error, "toggle for unknown sub-form ignored");
            }
        }
    }

    /// Collapse the formset back to a single fresh fragment at index 0.
    pub fn reset(&mut self) {
        self.view.clear_rows();
        let row = self.formset.reset();
        let row_id = self.formset.row_id(row.index());
        self.view.append_row(row_id.clone());
        self.view.set_total_count(self.formset.total_count());
        self.view.set_row_mode(row_id, row.row_mode());
    }

    /// The governing type selector changed.
    ///
    /// Types in the restricted set hide the add control, and hiding it
    /// immediately collapses the formset via `reset`.
    pub fn type_changed(&mut self, type_tag: &str) {
        if self.restricted_types.contains(type_tag) {
            self.view.set_add_visible(false);
            self.reset();
        } else {
            self.view.set_add_visible(true);
        }
    }
}
