//! Key Input Debug Example - feed key descriptors to the accumulator
//!
//! Usage: cargo run --example debug_key_input
//! Type one descriptor per line (`a`, `Shift+A`, `Ctrl+c`, `Backspace`, `Space`).
//! Backspace deletes the last character, Escape clears the line, Enter submits it
//! and Tab inserts four spaces.
//! An empty line or EOF exits.

use keyinput_core::{KeyEvent, KeyInputAccumulator, KeyInputOptions, SpecialKeyAction};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

fn main() -> io::Result<()> {
    println!("Key Input Debug");
    println!("===============");
    println!("Enter key descriptors, one per line. Empty line to exit.");
    println!();

    // The accumulator reports one key at a time; composing the line is up to the sink.
    let line = Rc::new(RefCell::new(String::new()));
    let composed = Rc::clone(&line);

    let options = KeyInputOptions::new(move |buffer: &str| {
        composed.borrow_mut().push_str(buffer);
    })
    .special_key("Backspace", {
        let line = Rc::clone(&line);
        move |_: &str, _: &KeyEvent| {
            line.borrow_mut().pop();
            String::new()
        }
    })
    .special_key("Escape", {
        let line = Rc::clone(&line);
        move |_: &str, _: &KeyEvent| {
            line.borrow_mut().clear();
            String::new()
        }
    })
    .special_key("Enter", {
        let line = Rc::clone(&line);
        move |_: &str, _: &KeyEvent| {
            println!("submit: {:?}", line.borrow_mut().split_off(0));
            String::new()
        }
    })
    .special_key_action("Tab", SpecialKeyAction::Replace("    ".to_string()))
    .on_key_event(|event: &KeyEvent| {
        print!(
            "KeyDown(key={:<12} ctrl={} alt={} meta={} shift={}) ",
            format!("{:?}", event.key),
            event.ctrl_key,
            event.alt_key,
            event.meta_key,
            event.shift_key
        );
    });

    let mut input = KeyInputAccumulator::new(options);
    let stdin = io::stdin();
    let mut out = io::stdout();

    for descriptor in stdin.lock().lines() {
        let descriptor = descriptor?;
        if descriptor.is_empty() {
            break;
        }

        let mut event = match KeyEvent::parse(&descriptor) {
            Ok(event) => event,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let outcome = input.handle_key_down(&mut event);
        writeln!(
            out,
            "-> {:?} buffer={:?} prevented={} line={:?}",
            outcome,
            input.buffer(),
            event.default_prevented(),
            line.borrow()
        )?;
        out.flush()?;
    }

    Ok(())
}
