//! Replay dispatched wire actions - run with: cargo run --example wire_actions

use confedit::action::Action;
use confedit::update::reduce;
use confedit::view::options;
use serde_json::json;

fn main() {
    let dispatched = json!([
        { "type": "LOAD_CONFIG",
          "options": { "sections": { "test": { "b": 1, "c": 2, "a": 3 } } } },
        { "type": "EDIT_OPTION",
          "options": { "sectionName": "test", "optionName": "b" } },
        { "type": "OPTION_SAVE_SUCCESS",
          "options": { "sectionName": "test", "optionName": "b", "value": "new_value" } },
        { "type": "SHOW_DELETE_MODAL",
          "options": { "sectionName": "test", "optionName": "c" } },
        { "type": "OPTION_DELETE_SUCCESS",
          "options": { "sectionName": "test", "optionName": "c" } }
    ]);

    let mut state = None;
    for wire in dispatched.as_array().expect("array of actions") {
        match Action::from_json(wire.clone()) {
            Some(action) => state = Some(reduce(state, &action)),
            None => println!("skipped unknown action: {}", wire["type"]),
        }
    }

    let state = state.unwrap_or_default();

    println!();
    println!("=== Final panel ===");
    for row in options(&state) {
        println!("{}/{} = {}", row.section_name, row.option_name, row.value);
    }

    println!();
    println!(
        "state: {}",
        serde_json::to_string_pretty(&state).expect("state serializes")
    );
}
