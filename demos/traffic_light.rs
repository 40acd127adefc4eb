//! Traffic Light State Machine
//!
//! A cyclic three-state machine driven by a single tick event. Each handler
//! "displays" its light and asks for the next phase; the table decides where
//! the tick leads.
//!
//! Run with: cargo run --example traffic_light

use transit::{event_ids, state_ids, transition_table, Event, Machine, State};

state_ids! { RED, GREEN, YELLOW }
event_ids! { EV_TICK; count: EV_COUNT }

struct Light {
    name: &'static str,
    message: &'static str,
}

impl State<()> for Light {
    fn name(&self) -> &str {
        self.name
    }

    fn step(&mut self, _ctx: &mut ()) -> Option<Event> {
        println!("  [{}] {}", self.name, self.message);
        Some(EV_TICK)
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let table = transition_table! {
        events: EV_COUNT;
        (RED, EV_TICK) => GREEN,
        (GREEN, EV_TICK) => YELLOW,
        (YELLOW, EV_TICK) => RED,
    }
    .expect("traffic light table is well-formed");

    let handlers: Vec<Box<dyn State<()>>> = vec![
        Box::new(Light { name: "red", message: "Stop" }),
        Box::new(Light { name: "green", message: "Go!" }),
        Box::new(Light { name: "yellow", message: "Caution" }),
    ];

    let mut machine =
        Machine::new("TrafficLight", &table, handlers, RED).expect("machine creation");

    println!("Initial state: {}\n", machine.current_name());

    println!("Running 7 engine ticks:");
    for _ in 0..7 {
        machine.step(&mut ()).expect("every tick has a transition");
    }

    println!("\nTraversal: {:?}", machine.journal().path());
    println!("Transitions applied: {}", machine.journal().len());
    println!("\nThe cycle repeats indefinitely: red -> green -> yellow -> red -> ...");

    machine.destroy();
    println!("\n=== Example Complete ===");
}
