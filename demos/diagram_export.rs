//! Diagram Export
//!
//! Renders a transition table as a Mermaid flowchart and as JSON. Paste the
//! Mermaid output into any Mermaid renderer to get the state diagram.
//!
//! Run with: cargo run --example diagram_export

use transit::{diagram, event_ids, state_ids, transition_table};

state_ids! { MENU_INIT, MENU_MAIN, MENU_BRIGHTNESS, MENU_CONTRAST }
event_ids! { EV_NEXT, EV_BACK; count: EV_COUNT }

fn main() {
    let table = transition_table! {
        events: EV_COUNT;
        (MENU_INIT, EV_NEXT) => MENU_MAIN,
        (MENU_MAIN, EV_NEXT) => MENU_BRIGHTNESS,
        (MENU_BRIGHTNESS, EV_BACK) => MENU_MAIN,
        (MENU_BRIGHTNESS, EV_NEXT) => MENU_CONTRAST,
        (MENU_CONTRAST, EV_BACK) => MENU_MAIN,
        (MENU_CONTRAST, EV_NEXT) => MENU_BRIGHTNESS,
    }
    .expect("menu table is well-formed");

    let states = ["menu_init", "menu_main", "menu_brightness", "menu_contrast"];
    let events = ["EV_NEXT", "EV_BACK"];

    println!("--- Mermaid ---");
    print!("{}", diagram::mermaid(&table, &states, &events));

    println!("\n--- JSON ---");
    println!("{}", diagram::to_json(&table).expect("table serializes"));
}
