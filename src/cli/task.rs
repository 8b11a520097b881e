use serde_json::json;

use crate::cli::commands::TaskCommands;
use crate::cli::{new_id, now_ms, print_no_match, report_error, resolve_ref};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::models::TaskStatus;
use crate::output;
use crate::store::TaskBoard;

pub fn run(cmd: TaskCommands, json_output: bool) -> i32 {
    let result = match cmd {
        TaskCommands::Add { text } => run_add(&text, json_output),
        TaskCommands::List { status } => run_list(status.as_deref(), json_output),
        TaskCommands::Show { id } => run_show(&id, json_output),
        TaskCommands::Edit { id, text } => run_edit(&id, &text, json_output),
        TaskCommands::Rm { id } => run_rm(&id, json_output),
        TaskCommands::Start { id } => run_move(&id, TaskStatus::InProgress, json_output),
        TaskCommands::Done { id } => run_move(&id, TaskStatus::Done, json_output),
        TaskCommands::Todo { id } => run_move(&id, TaskStatus::Todo, json_output),
    };
    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

/// Load the board, run `mutate` against it, and persist the collection
/// only when the closure reports a change. The load always completes
/// before any write.
fn with_board<F>(mutate: F) -> Result<(), FlowdeckError>
where
    F: FnOnce(&mut TaskBoard) -> Result<bool, FlowdeckError>,
{
    let conn = connection::open_store()?;
    let mut board = TaskBoard::new(state_repo::load_tasks(&conn)?);
    if mutate(&mut board)? {
        state_repo::save_tasks(&conn, board.tasks())?;
    }
    Ok(())
}

fn load_board() -> Result<TaskBoard, FlowdeckError> {
    let conn = connection::open_store()?;
    Ok(TaskBoard::new(state_repo::load_tasks(&conn)?))
}

fn task_refs(board: &TaskBoard) -> Vec<(String, String)> {
    board
        .tasks()
        .iter()
        .map(|t| (t.id.clone(), t.text.clone()))
        .collect()
}

fn run_add(text: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    if text.trim().is_empty() {
        return Err(FlowdeckError::validation("task text cannot be empty"));
    }
    let now = now_ms();
    let id = new_id();
    let mut added = None;
    with_board(|board| {
        added = board.create(id.clone(), text, now).cloned();
        Ok(added.is_some())
    })?;

    // create() only refuses blank text, which was rejected above
    let task = added.ok_or_else(|| FlowdeckError::validation("task text cannot be empty"))?;
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(&task, now)
            })))
            .unwrap()
        );
    } else {
        println!("Added task: {} ({})", task.text, task.id);
    }
    Ok(0)
}

fn run_list(status: Option<&str>, json_output: bool) -> Result<i32, FlowdeckError> {
    let board = load_board()?;
    let now = now_ms();

    if let Some(raw) = status {
        let status = TaskStatus::from_str(raw).ok_or_else(|| {
            FlowdeckError::validation(format!(
                "unknown status '{raw}'; expected todo|in_progress|done"
            ))
        })?;
        let view = match status {
            TaskStatus::Todo => board.todo_view(),
            TaskStatus::InProgress => board.in_progress_view(),
            TaskStatus::Done => board.done_view(),
        };
        if json_output {
            let tasks: Vec<_> = view
                .iter()
                .map(|t| output::json::task_json(t, now))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&output::json::success(json!({ "tasks": tasks })))
                    .unwrap()
            );
        } else {
            println!("{} ({})", status.column_title(), view.len());
            if view.is_empty() {
                println!("  (empty)");
            }
            for t in &view {
                output::text::print_task_line(t, now);
            }
        }
        return Ok(0);
    }

    if json_output {
        let col = |view: Vec<&crate::models::Task>| -> Vec<serde_json::Value> {
            view.iter()
                .map(|t| output::json::task_json(t, now))
                .collect()
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "todo": col(board.todo_view()),
                "in_progress": col(board.in_progress_view()),
                "done": col(board.done_view())
            })))
            .unwrap()
        );
    } else {
        output::text::print_board(&board, now);
    }
    Ok(0)
}

fn run_show(reference: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let board = load_board()?;
    let Some(id) = resolve_ref(reference, &task_refs(&board))? else {
        print_no_match("task", reference, json_output);
        return Ok(0);
    };
    let task = board.find(&id).expect("resolved id is present");
    let now = now_ms();
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "task": output::json::task_json(task, now)
            })))
            .unwrap()
        );
    } else {
        output::text::print_task(task, now);
    }
    Ok(0)
}

fn run_edit(reference: &str, text: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    if text.trim().is_empty() {
        return Err(FlowdeckError::validation("task text cannot be empty"));
    }
    let mut renamed = None;
    with_board(|board| {
        let Some(id) = resolve_ref(reference, &task_refs(board))? else {
            return Ok(false);
        };
        board.rename(&id, text);
        renamed = board.find(&id).cloned();
        Ok(true)
    })?;

    match renamed {
        Some(task) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "task": output::json::task_json(&task, now_ms())
                    })))
                    .unwrap()
                );
            } else {
                println!("Updated task: {} ({})", task.text, task.id);
            }
        }
        None => print_no_match("task", reference, json_output),
    }
    Ok(0)
}

fn run_rm(reference: &str, json_output: bool) -> Result<i32, FlowdeckError> {
    let mut removed_id = None;
    with_board(|board| {
        let Some(id) = resolve_ref(reference, &task_refs(board))? else {
            return Ok(false);
        };
        board.remove(&id);
        removed_id = Some(id);
        Ok(true)
    })?;

    match removed_id {
        Some(id) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "removed": id
                    })))
                    .unwrap()
                );
            } else {
                println!("Removed task {id}");
            }
        }
        None => print_no_match("task", reference, json_output),
    }
    Ok(0)
}

fn run_move(
    reference: &str,
    new_status: TaskStatus,
    json_output: bool,
) -> Result<i32, FlowdeckError> {
    let now = now_ms();
    let mut moved = None;
    with_board(|board| {
        let Some(id) = resolve_ref(reference, &task_refs(board))? else {
            return Ok(false);
        };
        let outcome = board.transition(&id, new_status, now);
        moved = outcome.map(|o| (board.find(&id).cloned().expect("task present"), o));
        Ok(moved.is_some())
    })?;

    match moved {
        Some((task, outcome)) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "task": output::json::task_json(&task, now),
                        "previous": outcome.previous.as_str(),
                        "celebrated": outcome.celebrate
                    })))
                    .unwrap()
                );
            } else {
                println!("Task {} → {}", task.id, task.status.as_str());
                if outcome.celebrate {
                    output::text::celebrate();
                }
            }
        }
        None => print_no_match("task", reference, json_output),
    }
    Ok(0)
}
