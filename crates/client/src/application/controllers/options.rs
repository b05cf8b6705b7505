//! Option populator
//!
//! Replaces a selection widget's options with a placeholder row followed by
//! the given entries, preserving input order. A target the view cannot
//! resolve makes the operation a logged no-op; nothing is raised and nothing
//! is retried.

use crate::ports::outbound::SelectControl;
use sheetwright_domain::{OptionEntry, PLACEHOLDER_LABEL};

/// Replace `target`'s options with a placeholder plus `entries`.
///
/// `placeholder` falls back to the standard `---------` label. Given N
/// entries the widget ends up with exactly N+1 options.
pub fn populate(
    target: Option<&mut dyn SelectControl>,
    placeholder: Option<&str>,
    entries: Vec<OptionEntry>,
) {
    let Some(target) = target else {
        tracing::warn!("select target missing; options not applied");
        return;
    };

    let mut options = Vec::with_capacity(entries.len() + 1);
    options.push(OptionEntry::placeholder(
        placeholder.unwrap_or(PLACEHOLDER_LABEL),
    ));
    options.extend(entries);
    target.set_options(options);
}

/// Collapse `target` to just the placeholder row.
pub fn clear(target: Option<&mut dyn SelectControl>, placeholder: Option<&str>) {
    populate(target, placeholder, Vec::new());
}
