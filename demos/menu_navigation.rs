//! Menu Navigation State Machine
//!
//! A configuration menu modeled after a small front-panel UI: an init
//! screen, a main screen, and two parameter screens (brightness, contrast).
//! Button presses arrive through the application context; here a scripted
//! queue stands in for the board's buttons.
//!
//! Also demonstrates recovering from an unhandled event: pressing "back" on
//! the main screen has no table entry, the engine reports it, and stepping
//! simply continues.
//!
//! Run with: cargo run --example menu_navigation

use std::collections::VecDeque;

use transit::{event_ids, state_ids, transition_table, Event, Machine, State, StepError};

state_ids! { MENU_INIT, MENU_MAIN, MENU_BRIGHTNESS, MENU_CONTRAST }
event_ids! { EV_NEXT, EV_BACK; count: EV_COUNT }

#[derive(Clone, Copy, Debug)]
enum Button {
    Next,
    Back,
}

struct MenuContext {
    buttons: VecDeque<Button>,
    brightness: u8,
    contrast: u8,
}

impl MenuContext {
    fn poll_button(&mut self) -> Option<Event> {
        match self.buttons.pop_front()? {
            Button::Next => Some(EV_NEXT),
            Button::Back => Some(EV_BACK),
        }
    }
}

struct InitScreen;

impl State<MenuContext> for InitScreen {
    fn name(&self) -> &str {
        "menu_init"
    }

    fn step(&mut self, _ctx: &mut MenuContext) -> Option<Event> {
        println!("  [init] loading defaults");
        Some(EV_NEXT)
    }
}

struct MainScreen;

impl State<MenuContext> for MainScreen {
    fn name(&self) -> &str {
        "menu_main"
    }

    fn step(&mut self, ctx: &mut MenuContext) -> Option<Event> {
        println!("  [main] brightness={} contrast={}", ctx.brightness, ctx.contrast);
        ctx.poll_button()
    }
}

struct BrightnessScreen;

impl State<MenuContext> for BrightnessScreen {
    fn name(&self) -> &str {
        "menu_brightness"
    }

    fn step(&mut self, ctx: &mut MenuContext) -> Option<Event> {
        ctx.brightness = ctx.brightness.saturating_add(10);
        println!("  [brightness] adjusted to {}", ctx.brightness);
        ctx.poll_button()
    }
}

struct ContrastScreen;

impl State<MenuContext> for ContrastScreen {
    fn name(&self) -> &str {
        "menu_contrast"
    }

    fn step(&mut self, ctx: &mut MenuContext) -> Option<Event> {
        ctx.contrast = ctx.contrast.saturating_add(5);
        println!("  [contrast] adjusted to {}", ctx.contrast);
        ctx.poll_button()
    }
}

fn main() {
    println!("=== Menu Navigation State Machine ===\n");

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

    let handlers: Vec<Box<dyn State<MenuContext>>> = vec![
        Box::new(InitScreen),
        Box::new(MainScreen),
        Box::new(BrightnessScreen),
        Box::new(ContrastScreen),
    ];

    let mut machine =
        Machine::new("Menu", &table, handlers, MENU_INIT).expect("machine creation");

    // Scripted user session; the first Back lands on the main screen,
    // which has no entry for it.
    let mut ctx = MenuContext {
        buttons: VecDeque::from([
            Button::Back,
            Button::Next,
            Button::Next,
            Button::Back,
            Button::Next,
        ]),
        brightness: 50,
        contrast: 50,
    };

    for tick in 1..=9 {
        println!("tick {tick}:");
        match machine.step(&mut ctx) {
            Ok(_) => {}
            Err(StepError::UnhandledEvent { state, event }) => {
                println!("  (no transition from {state} on {event}, ignored)");
            }
            Err(err) => {
                eprintln!("engine fault: {err}");
                break;
            }
        }
    }

    println!("\nFinal screen: {}", machine.current_name());
    println!("Settings: brightness={} contrast={}", ctx.brightness, ctx.contrast);
    println!("Traversal: {:?}", machine.journal().path());

    machine.destroy();
    println!("\n=== Example Complete ===");
}
