use std::io::Write;
use std::thread;
use std::time::Duration;

use serde_json::json;

use crate::cli::commands::TimerCommands;
use crate::cli::{now_ms, print_no_match, report_error, resolve_ref};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::models::TaskStatus;
use crate::output;
use crate::store::TaskBoard;
use crate::timer;

pub fn run(cmd: TimerCommands, json_output: bool) -> i32 {
    let result = match cmd {
        TimerCommands::Toggle { id } => run_toggle(&id, json_output),
        TimerCommands::Reset { id } => run_reset(&id, json_output),
        TimerCommands::Watch { id, seconds } => run_watch(&id, seconds, json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

fn load(conn: &rusqlite::Connection) -> Result<TaskBoard, FlowdeckError> {
    Ok(TaskBoard::new(state_repo::load_tasks(conn)?))
}

fn task_refs(board: &TaskBoard) -> Vec<(String, String)> {
    board
        .tasks()
        .iter()
        .map(|t| (t.id.clone(), t.text.clone()))
        .collect()
}

fn run_toggle(reference: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let mut board = load(&conn)?;
    let Some(id) = resolve_ref(reference, &task_refs(&board))? else {
        print_no_match("task", reference, json_output);
        return Ok(0);
    };

    let now = now_ms();
    let running = board
        .toggle_timer(&id, now)
        .expect("resolved id is present");
    state_repo::save_tasks(&conn, board.tasks())?;

    let task = board.find(&id).expect("resolved id is present");
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task, now)
            })))
            .unwrap()
        );
    } else {
        let total = timer::format_hms(timer::projected_total_ms(task, now));
        if running {
            println!("Timer started for {} ({total})", task.text);
            if task.status != TaskStatus::InProgress {
                println!("  (task is not in Work in Progress)");
            }
        } else {
            println!("Timer paused for {} ({total})", task.text);
        }
    }
    Ok(0)
}

fn run_reset(reference: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let mut board = load(&conn)?;
    let Some(id) = resolve_ref(reference, &task_refs(&board))? else {
        print_no_match("task", reference, json_output);
        return Ok(0);
    };

    board.reset_timer(&id);
    state_repo::save_tasks(&conn, board.tasks())?;

    let task = board.find(&id).expect("resolved id is present");
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task, now_ms())
            })))
            .unwrap()
        );
    } else {
        println!("Timer reset for {} (00:00:00)", task.text);
    }
    Ok(0)
}

/// Presentation-only polling: recompute the projection each second and
/// redraw. Stored state is never touched here.
fn run_watch(
    reference: &str,
    seconds: Option<u64>,
    json_output: bool,
) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let board = load(&conn)?;
    let Some(id) = resolve_ref(reference, &task_refs(&board))? else {
        print_no_match("task", reference, json_output);
        return Ok(0);
    };
    let task = board.find(&id).expect("resolved id is present");

    if json_output {
        // A JSON consumer polls on its own cadence; emit one snapshot.
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task, now_ms())
            })))
            .unwrap()
        );
        return Ok(0);
    }

    println!(
        "Watching {} — {}",
        task.text,
        if task.is_timer_running {
            "timer running"
        } else {
            "timer stopped"
        }
    );
    let mut ticks = 0u64;
    loop {
        let line = timer::format_hms(timer::projected_total_ms(task, now_ms()));
        print!("\r{line}");
        let _ = std::io::stdout().flush();
        ticks += 1;
        if let Some(limit) = seconds {
            if ticks >= limit {
                break;
            }
        }
        thread::sleep(Duration::from_secs(1));
    }
    println!();
    Ok(0)
}
