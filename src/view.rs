//! Derived display projection: flatten state into ordered option rows.
//!
//! Pure and recomputed on every call; rows are built fresh from state,
//! so editing and header flags can never drift from the stored marker.

use serde::Serialize;

use crate::types::{ConfigOption, ConfigState};

/// A single display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub section_name: String,
    pub option_name: String,
    pub value: String,
    pub editing: bool,
    pub header: bool,
}

/// Flatten state into display order.
///
/// Sections keep state order; options sort by name within each section.
/// The first row of the whole list carries the header marker used to
/// render the section divider (one per list, not one per section).
pub fn options(state: &ConfigState) -> Vec<OptionView> {
    let mut views = Vec::new();

    for section in &state.sections {
        let mut sorted: Vec<&ConfigOption> = section.options.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        for option in sorted {
            views.push(OptionView {
                section_name: section.name.clone(),
                option_name: option.name.clone(),
                value: option.value.clone(),
                editing: state.is_editing(&section.name, &option.name),
                header: false,
            });
        }
    }

    if let Some(first) = views.first_mut() {
        first.header = true;
    }

    views
}

// ============================================================================
// TESTS
// ============================================================================
