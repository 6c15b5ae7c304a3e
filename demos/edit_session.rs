//! Scripted editing session - run with: cargo run --example edit_session

use confedit::action::Action;
use confedit::types::ConfigState;
use confedit::update::reduce;
use confedit::view::options;
use serde_json::json;

fn main() {
    let load = Action::from_json(json!({
        "type": "LOAD_CONFIG",
        "options": {
            "sections": {
                "httpd": { "port": 5984, "bind_address": "127.0.0.1" },
                "log": { "level": "info" }
            }
        }
    }))
    .expect("valid action");

    let mut state = reduce(None, &load);
    print_panel("after load", &state);

    let edit = Action::EditOption {
        section_name: "httpd".to_string(),
        option_name: "port".to_string(),
    };
    state = reduce(Some(state), &edit);
    print_panel("editing httpd/port", &state);

    let save = Action::OptionSaveSuccess {
        section_name: "httpd".to_string(),
        option_name: "port".to_string(),
        value: json!(5985),
    };
    state = reduce(Some(state), &save);
    print_panel("after save", &state);

    let delete = Action::OptionDeleteSuccess {
        section_name: "log".to_string(),
        option_name: "level".to_string(),
    };
    state = reduce(Some(state), &delete);
    print_panel("after deleting log/level", &state);
}

fn print_panel(label: &str, state: &ConfigState) {
    println!("=== {} ===", label);
    for row in options(state) {
        let header = if row.header { "#" } else { " " };
        let editing = if row.editing { "  (editing)" } else { "" };
        println!(
            "{} {}/{} = {}{}",
            header, row.section_name, row.option_name, row.value, editing
        );
    }
    println!();
}
