//! Dispatched actions and their wire format.
//!
//! Hosts dispatch actions as `{"type": ..., "options": ...}` JSON
//! objects: SCREAMING_SNAKE kind tags with camelCase payload fields.
//! The serde representation below reproduces that shape exactly, so a
//! dispatcher can hand wire objects straight to [`Action::from_json`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::{coerce_value, ConfigOption, ConfigSection};

// ============================================================================
// ACTIONS
// ============================================================================

/// Everything the reducer can receive from a dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "options",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Replace the whole state with freshly loaded sections.
    LoadConfig { sections: SectionMap },
    /// Mark one option as being edited.
    EditOption {
        section_name: String,
        option_name: String,
    },
    /// Stop editing without saving.
    CancelEdit,
    /// A save round-trip finished; store the new value.
    OptionSaveSuccess {
        section_name: String,
        option_name: String,
        value: Value,
    },
    /// An add round-trip finished; insert the new option.
    OptionAddSuccess {
        section_name: String,
        option_name: String,
        value: Value,
    },
    /// A delete round-trip finished; drop the option.
    OptionDeleteSuccess {
        section_name: String,
        option_name: String,
    },
}

impl Action {
    /// Decode a dispatched wire action.
    ///
    /// Unrecognized kinds and malformed payloads yield `None`; a
    /// dispatcher skips those, which leaves state untouched.
    pub fn from_json(value: Value) -> Option<Action> {
        serde_json::from_value(value).ok()
    }
}

// ============================================================================
// SECTION PAYLOAD
// ============================================================================

/// The `sections` payload of a LOAD_CONFIG action: a JSON object
/// mapping section names to `{option: value}` objects.
///
/// Document order is the panel's section order, so deserialization
/// walks map entries as they come instead of collecting into a sorted
/// map first. Scalar values are coerced to strings on entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionMap(pub Vec<ConfigSection>);

impl Serialize for SectionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in &self.0 {
            map.serialize_entry(&section.name, &OptionMapRef(&section.options))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionMapVisitor;

        impl<'de> Visitor<'de> for SectionMapVisitor {
            type Value = SectionMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section names to option maps")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Vec::new();
                while let Some((name, options)) = access.next_entry::<String, OptionMap>()? {
                    sections.push(ConfigSection {
                        name,
                        options: options.0,
                    });
                }
                Ok(SectionMap(sections))
            }
        }

        deserializer.deserialize_map(SectionMapVisitor)
    }
}

/// One section's options as a JSON object, entry order preserved.
struct OptionMap(Vec<ConfigOption>);

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionMapVisitor;

        impl<'de> Visitor<'de> for OptionMapVisitor {
            type Value = OptionMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of option names to scalar values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut options = Vec::new();
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    options.push(ConfigOption {
                        name,
                        value: coerce_value(&value),
                    });
                }
                Ok(OptionMap(options))
            }
        }

        deserializer.deserialize_map(OptionMapVisitor)
    }
}

struct OptionMapRef<'a>(&'a [ConfigOption]);

impl Serialize for OptionMapRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for option in self.0 {
            map.serialize_entry(&option.name, &option.value)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_load_config_in_document_order() {
        let action = Action::from_json(json!({
            "type": "LOAD_CONFIG",
            "options": { "sections": { "zz": { "m": 1 }, "aa": { "b": 2 } } }
        }))
        .expect("valid action");

        let sections = match action {
            Action::LoadConfig { sections } => sections,
            other => panic!("expected LoadConfig, got {:?}", other),
        };
        let names: Vec<_> = sections.0.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zz", "aa"]);
    }

    #[test]
    fn decodes_load_config_from_raw_text() {
        // Streaming path: order comes straight from the document.
        let action: Action = serde_json::from_str(
            r#"{"type": "LOAD_CONFIG",
                "options": {"sections": {"test": {"b": 1, "c": 2, "a": 3}}}}"#,
        )
        .expect("valid action");

        let sections = match action {
            Action::LoadConfig { sections } => sections,
            other => panic!("expected LoadConfig, got {:?}", other),
        };
        let options: Vec<_> = sections.0[0]
            .options
            .iter()
            .map(|o| (o.name.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(options, vec![("b", "1"), ("c", "2"), ("a", "3")]);
    }

    #[test]
    fn load_config_coerces_mixed_scalars() {
        let action = Action::from_json(json!({
            "type": "LOAD_CONFIG",
            "options": { "sections": { "log": {
                "level": "info",
                "include_sasl": true,
                "max_files": 10,
                "file": null
            } } }
        }))
        .expect("valid action");

        let sections = match action {
            Action::LoadConfig { sections } => sections,
            other => panic!("expected LoadConfig, got {:?}", other),
        };
        let section = &sections.0[0];
        assert_eq!(section.option("level").unwrap().value, "info");
        assert_eq!(section.option("include_sasl").unwrap().value, "true");
        assert_eq!(section.option("max_files").unwrap().value, "10");
        assert_eq!(section.option("file").unwrap().value, "");
    }

    #[test]
    fn decodes_edit_option_payload() {
        let action = Action::from_json(json!({
            "type": "EDIT_OPTION",
            "options": { "sectionName": "test", "optionName": "b" }
        }))
        .expect("valid action");

        assert_eq!(
            action,
            Action::EditOption {
                section_name: "test".to_string(),
                option_name: "b".to_string(),
            }
        );
    }

    #[test]
    fn decodes_cancel_edit_without_payload() {
        let action = Action::from_json(json!({ "type": "CANCEL_EDIT" })).expect("valid action");
        assert_eq!(action, Action::CancelEdit);
    }

    #[test]
    fn unknown_kind_decodes_to_none() {
        let wire = json!({
            "type": "SHOW_DELETE_MODAL",
            "options": { "sectionName": "test", "optionName": "c" }
        });
        assert_eq!(Action::from_json(wire), None);
    }

    #[test]
    fn malformed_payload_decodes_to_none() {
        // EDIT_OPTION without its option name
        let wire = json!({ "type": "EDIT_OPTION", "options": { "sectionName": "test" } });
        assert_eq!(Action::from_json(wire), None);
    }

    #[test]
    fn serializes_in_wire_shape() {
        let action = Action::OptionSaveSuccess {
            section_name: "test".to_string(),
            option_name: "b".to_string(),
            value: json!("new_value"),
        };

        let wire = serde_json::to_value(&action).expect("serializes");
        assert_eq!(
            wire,
            json!({
                "type": "OPTION_SAVE_SUCCESS",
                "options": {
                    "sectionName": "test",
                    "optionName": "b",
                    "value": "new_value"
                }
            })
        );
    }
}
