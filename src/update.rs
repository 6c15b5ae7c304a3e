//! Pure state transitions: (ConfigState, Action) → ConfigState.
//!
//! The reducer core of the panel. Fully testable with no host attached.
//! Every transition consumes the previous state and returns the next
//! one; nothing a caller still holds is ever mutated. Actions whose
//! target no longer exists are no-ops: a stale dispatch never fails,
//! it only fails to change state.

use serde_json::Value;

use crate::action::{Action, SectionMap};
use crate::types::{coerce_value, ConfigOption, ConfigSection, ConfigState, EditTarget};

/// Pure state transition function.
///
/// `None` stands for the initial, empty state.
pub fn reduce(state: Option<ConfigState>, action: &Action) -> ConfigState {
    let state = state.unwrap_or_default();

    match action {
        Action::LoadConfig { sections } => load_config(sections),
        Action::EditOption {
            section_name,
            option_name,
        } => edit_option(state, section_name, option_name),
        Action::CancelEdit => cancel_edit(state),
        Action::OptionSaveSuccess {
            section_name,
            option_name,
            value,
        } => save_option(state, section_name, option_name, value),
        Action::OptionAddSuccess {
            section_name,
            option_name,
            value,
        } => add_option(state, section_name, option_name, value),
        Action::OptionDeleteSuccess {
            section_name,
            option_name,
        } => delete_option(state, section_name, option_name),
    }
}

// ============================================================================
// PER-ACTION HANDLERS
// ============================================================================

/// LOAD_CONFIG replaces state wholesale; any edit in progress is gone.
/// Sections that arrive empty are dropped up front.
fn load_config(sections: &SectionMap) -> ConfigState {
    ConfigState {
        sections: sections
            .0
            .iter()
            .filter(|s| !s.options.is_empty())
            .cloned()
            .collect(),
        editing: None,
    }
}

/// EDIT_OPTION: only an option that actually exists can be marked.
fn edit_option(state: ConfigState, section_name: &str, option_name: &str) -> ConfigState {
    if state.option(section_name, option_name).is_none() {
        return state;
    }

    ConfigState {
        editing: Some(EditTarget {
            section_name: section_name.to_string(),
            option_name: option_name.to_string(),
        }),
        ..state
    }
}

fn cancel_edit(state: ConfigState) -> ConfigState {
    ConfigState {
        editing: None,
        ..state
    }
}

/// OPTION_SAVE_SUCCESS: store the coerced value. Saving ends the edit
/// when the marker points at the saved option.
fn save_option(
    mut state: ConfigState,
    section_name: &str,
    option_name: &str,
    value: &Value,
) -> ConfigState {
    match state
        .section_mut(section_name)
        .and_then(|s| s.option_mut(option_name))
    {
        Some(option) => option.value = coerce_value(value),
        None => return state,
    }

    if state.is_editing(section_name, option_name) {
        state.editing = None;
    }
    state
}

/// OPTION_ADD_SUCCESS: append to the section, creating it on first use.
/// Re-adding an existing option overwrites its value.
fn add_option(
    mut state: ConfigState,
    section_name: &str,
    option_name: &str,
    value: &Value,
) -> ConfigState {
    let value = coerce_value(value);

    match state.section_mut(section_name) {
        Some(section) => match section.option_mut(option_name) {
            Some(option) => option.value = value,
            None => section.options.push(ConfigOption {
                name: option_name.to_string(),
                value,
            }),
        },
        None => state.sections.push(ConfigSection {
            name: section_name.to_string(),
            options: vec![ConfigOption {
                name: option_name.to_string(),
                value,
            }],
        }),
    }
    state
}

/// OPTION_DELETE_SUCCESS: drop the option, then the section once empty.
fn delete_option(mut state: ConfigState, section_name: &str, option_name: &str) -> ConfigState {
    let removed = match state.section_mut(section_name) {
        Some(section) => {
            let before = section.options.len();
            section.options.retain(|o| o.name != option_name);
            section.options.len() != before
        }
        None => false,
    };
    if !removed {
        return state;
    }

    if state.is_editing(section_name, option_name) {
        state.editing = None;
    }
    state.sections.retain(|s| !s.options.is_empty());
    state
}

// ============================================================================
// TESTS
// ============================================================================
