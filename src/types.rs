//! Domain types for confedit.
//!
//! The nested section/option shape is the stored source of truth.
//! Display concerns (sort order, header and editing flags) are derived
//! in the view layer, never stored here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// OPTIONS AND SECTIONS
// ============================================================================

/// A single named configuration value.
///
/// Values are always stored as strings; scalars arriving from the wire
/// are coerced on entry (see [`coerce_value`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    pub name: String,
    pub value: String,
}

/// A named group of configuration options.
///
/// Options keep their ingestion order. The view layer sorts by name at
/// projection time, so stored order never leaks into display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSection {
    pub name: String,
    pub options: Vec<ConfigOption>,
}

impl ConfigSection {
    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|o| o.name == name)
    }

    pub(crate) fn option_mut(&mut self, name: &str) -> Option<&mut ConfigOption> {
        self.options.iter_mut().find(|o| o.name == name)
    }
}

// ============================================================================
// EDIT MARKER
// ============================================================================

/// The option currently marked for editing.
///
/// At most one option is edited at a time, so the marker lives on the
/// state rather than as a flag on every option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTarget {
    pub section_name: String,
    pub option_name: String,
}

// ============================================================================
// STATE
// ============================================================================

/// Full panel state: sections plus the edit marker.
///
/// Invariants maintained by the reducer:
/// - no empty sections persist
/// - the marker, when present, names an option that exists
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    pub sections: Vec<ConfigSection>,
    pub editing: Option<EditTarget>,
}

impl ConfigState {
    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&ConfigSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut ConfigSection> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Look up an option by section and name.
    pub fn option(&self, section_name: &str, option_name: &str) -> Option<&ConfigOption> {
        self.section(section_name).and_then(|s| s.option(option_name))
    }

    /// Whether the edit marker names the given option.
    pub fn is_editing(&self, section_name: &str, option_name: &str) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|t| t.section_name == section_name && t.option_name == option_name)
    }
}

// ============================================================================
// VALUE COERCION
// ============================================================================

/// Render a JSON scalar the way the panel stores values.
///
/// Strings pass through unquoted, null becomes the empty string, and
/// everything else (numbers, booleans, the odd compound value) uses its
/// JSON rendering.
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_state() -> ConfigState {
        ConfigState {
            sections: vec![ConfigSection {
                name: "httpd".to_string(),
                options: vec![ConfigOption {
                    name: "port".to_string(),
                    value: "5984".to_string(),
                }],
            }],
            editing: None,
        }
    }

    #[test]
    fn coerce_passes_strings_through() {
        assert_eq!(coerce_value(&json!("new_value")), "new_value");
    }

    #[test]
    fn coerce_renders_numbers_and_booleans() {
        assert_eq!(coerce_value(&json!(1)), "1");
        assert_eq!(coerce_value(&json!(2.5)), "2.5");
        assert_eq!(coerce_value(&json!(true)), "true");
    }

    #[test]
    fn coerce_maps_null_to_empty() {
        assert_eq!(coerce_value(&json!(null)), "");
    }

    #[test]
    fn option_lookup_by_section_and_name() {
        let state = sample_state();
        assert_eq!(state.option("httpd", "port").map(|o| o.value.as_str()), Some("5984"));
        assert!(state.option("httpd", "missing").is_none());
        assert!(state.option("missing", "port").is_none());
    }

    #[test]
    fn is_editing_matches_marker_exactly() {
        let mut state = sample_state();
        assert!(!state.is_editing("httpd", "port"));

        state.editing = Some(EditTarget {
            section_name: "httpd".to_string(),
            option_name: "port".to_string(),
        });
        assert!(state.is_editing("httpd", "port"));
        assert!(!state.is_editing("httpd", "bind_address"));
        assert!(!state.is_editing("log", "port"));
    }
}
