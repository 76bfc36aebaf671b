//! Presentation shell: the text menu around the calculator engine.
//!
//! Everything here is I/O glue. The menu loop reads a choice and the
//! operands, calls into [`advcalc::engine`], records successful
//! calculations in the [`advcalc::session::Session`], and displays the
//! result or the error message. All behavioral rules live in the library.

use std::io::{self, Write};

use lazy_static::lazy_static;
use log::{debug, warn};

use advcalc::engine::{self, compute, Operation, CONSTANTS, OPERATIONS};
use advcalc::session::{HistoryEntry, Session};
use advcalc::value::Value;

enum MenuAction {
    Calculate(Operation),
    StoreToMemory,
    RecallMemory,
    ClearMemory,
    ViewHistory,
    ClearHistory,
    ViewConstants,
    ClearScreen,
    Exit,
}

lazy_static! {
    // menu choice -> action, in display order
    static ref MENU: Vec<(&'static str, MenuAction, &'static str)> = {
        let mut menu: Vec<(&'static str, MenuAction, &'static str)> = Vec::new();
        let numbers = [
            "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
        ];
        for (num, op) in numbers.iter().zip(OPERATIONS.iter()) {
            menu.push((*num, MenuAction::Calculate(*op), op.title()));
        }
        menu.push(("13", MenuAction::StoreToMemory, "Store to Memory (M+)"));
        menu.push(("14", MenuAction::RecallMemory, "Recall Memory (MR)"));
        menu.push(("15", MenuAction::ClearMemory, "Clear Memory (MC)"));
        menu.push(("16", MenuAction::ViewHistory, "View History"));
        menu.push(("17", MenuAction::ClearHistory, "Clear History"));
        menu.push(("18", MenuAction::ViewConstants, "View Constants"));
        menu.push(("19", MenuAction::ClearScreen, "Clear Screen"));
        menu.push(("20", MenuAction::Exit, "Exit"));
        menu
    };
}

fn display_menu() {
    println!();
    println!("=== Advanced Calculator ===");
    for (num, _, title) in MENU.iter() {
        println!("{:>3}. {}", num, title);
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(..) => Some(line.trim().to_string()),
        Err(..) => None,
    }
}

// re-prompts until the input parses as a float
fn read_operand(prompt: &str) -> Option<f64> {
    loop {
        let line = read_line(prompt)?;
        match Value::from_str_float(&line) {
            Ok(f) => return Some(f),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn read_operands(op: Operation) -> Option<Vec<f64>> {
    let mut args = Vec::with_capacity(op.arity());
    if op.takes_degrees() {
        args.push(read_operand("Enter angle in degrees: ")?);
    } else if op.arity() == 1 {
        args.push(read_operand("Enter number: ")?);
    } else {
        args.push(read_operand("Enter first number: ")?);
        args.push(read_operand("Enter second number: ")?);
    }
    Some(args)
}

fn calculate(session: &mut Session, op: Operation) -> Option<()> {
    let args = read_operands(op)?;
    match compute(op, &args) {
        Ok(result) => {
            debug!("{}({:?}) = {}", op, args, result);
            println!("\nResult: {}", result);
            session.record(HistoryEntry::new(op, &args, result));
        }
        Err(e) => {
            warn!("{}({:?}) failed: {}", op, args, e);
            println!("\nError: {}", e);
        }
    }
    Some(())
}

fn show_history(session: &Session) {
    if session.history().is_empty() {
        println!("\nNo calculations in history.");
        return;
    }
    println!("\n=== Calculation History ===");
    for entry in session.history() {
        println!("{}", entry);
    }
}

fn show_constants() {
    println!();
    for name in CONSTANTS.iter() {
        // the table only lists known names, so the lookup cannot miss
        if let Some(v) = engine::constant(name) {
            println!("{:>4} = {}", name, v);
        }
    }
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

fn main() {
    pretty_env_logger::init();

    let mut session = Session::new();
    debug!("session started");

    loop {
        display_menu();
        if let Some(last) = session.last_result() {
            println!("\nLast result: {}", last);
        }

        let choice = match read_line("\nEnter your choice (1-20): ") {
            Some(c) => c,
            None => break,
        };
        let action = MENU.iter().find(|(num, _, _)| *num == choice);
        let action = match action {
            Some((_, action, _)) => action,
            None => {
                println!("Invalid choice: '{}'", choice);
                continue;
            }
        };

        match action {
            MenuAction::Calculate(op) => {
                if calculate(&mut session, *op).is_none() {
                    break;
                }
            }
            MenuAction::StoreToMemory => match session.last_result() {
                Some(last) => {
                    let value = last.clone();
                    println!("\nStored {} to memory", value);
                    session.store_to_memory(value);
                }
                None => println!("\nNo result to store yet"),
            },
            MenuAction::RecallMemory => match session.recall_memory() {
                Ok(v) => println!("\nMemory value: {}", v),
                Err(e) => println!("\nError: {}", e),
            },
            MenuAction::ClearMemory => {
                session.clear_memory();
                println!("\nMemory cleared");
            }
            MenuAction::ViewHistory => show_history(&session),
            MenuAction::ClearHistory => {
                session.clear_history();
                println!("\nHistory cleared");
            }
            MenuAction::ViewConstants => show_constants(),
            MenuAction::ClearScreen => clear_screen(),
            MenuAction::Exit => break,
        }
    }

    println!("\nGoodbye!");
}
