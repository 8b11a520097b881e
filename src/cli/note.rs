use std::io::{self, Read};

use serde_json::json;

use crate::cli::commands::NoteCommands;
use crate::cli::report_error;
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::output;

pub fn run(cmd: NoteCommands, json_output: bool) -> i32 {
    let result = match cmd {
        NoteCommands::Show => run_show(json_output),
        NoteCommands::Edit => run_edit(json_output),
        NoteCommands::Append { text } => run_append(&text, json_output),
        NoteCommands::Clear => run_clear(json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

fn run_show(json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let notes = state_repo::load_notes(&conn)?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({ "notes": notes })))
                .unwrap()
        );
    } else if notes.is_empty() {
        println!("(scratchpad is empty)");
    } else {
        println!("{notes}");
    }
    Ok(0)
}

fn run_edit(json_output: bool) -> Result<i32, FlowdeckError> {
    let mut notes = String::new();
    io::stdin()
        .read_to_string(&mut notes)
        .map_err(|e| FlowdeckError::validation(format!("could not read stdin: {e}")))?;

    let conn = connection::open_store()?;
    // Load-before-write: the scratchpad key is replaced wholesale, but we
    // still finish the startup load first like every other command.
    let _previous = state_repo::load_notes(&conn)?;
    state_repo::save_notes(&conn, &notes)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "bytes": notes.len()
            })))
            .unwrap()
        );
    } else {
        println!("Scratchpad replaced ({} bytes)", notes.len());
    }
    Ok(0)
}

fn run_append(text: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let mut notes = state_repo::load_notes(&conn)?;
    if !notes.is_empty() && !notes.ends_with('\n') {
        notes.push('\n');
    }
    notes.push_str(text);
    notes.push('\n');
    state_repo::save_notes(&conn, &notes)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "bytes": notes.len()
            })))
            .unwrap()
        );
    } else {
        println!("Appended to scratchpad");
    }
    Ok(0)
}

fn run_clear(json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let _previous = state_repo::load_notes(&conn)?;
    state_repo::save_notes(&conn, "")?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({ "bytes": 0 }))).unwrap()
        );
    } else {
        println!("Scratchpad cleared");
    }
    Ok(0)
}
