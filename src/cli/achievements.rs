use serde_json::json;

use crate::achievements;
use crate::cli::{now_ms, report_error};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::output;
use crate::store::TaskBoard;

pub fn run(json_output: bool) -> i32 {
    match run_inner(json_output) {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

fn run_inner(json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let board = TaskBoard::new(state_repo::load_tasks(&conn)?);
    let summary = achievements::classify(board.tasks());
    let done = board.done_view();

    if json_output {
        let now = now_ms();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "achievements": output::json::achievements_json(&summary),
                "done": done
                    .iter()
                    .map(|t| output::json::task_json(t, now))
                    .collect::<Vec<_>>()
            })))
            .unwrap()
        );
    } else {
        output::text::print_achievements(&summary);
        if done.is_empty() {
            println!("\nComplete tasks to build your wall of fame.");
        } else {
            println!("\nWall of fame:");
            let now = now_ms();
            for task in &done {
                output::text::print_task_line(task, now);
            }
        }
    }
    Ok(0)
}
