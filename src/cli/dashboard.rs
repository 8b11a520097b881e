use chrono::{Local, Timelike};
use serde_json::json;

use crate::cli::{now_ms, report_error, today};
use crate::db::{connection, state_repo};
use crate::error::FlowdeckError;
use crate::output;
use crate::store::{EventStore, TaskBoard};
use crate::timer;

pub fn run(json_output: bool) -> i32 {
    match run_inner(json_output) {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

fn run_inner(json_output: bool) -> Result<i32, FlowdeckError> {
    let conn = connection::open_store()?;
    let board = TaskBoard::new(state_repo::load_tasks(&conn)?);
    let events = EventStore::new(state_repo::load_events(&conn)?);

    let now = now_ms();
    let today = today();
    let pending = board.todo_count();
    let highlight = events.upcoming_highlight(today);
    let focus = board.in_progress_view();
    let focus = &focus[..focus.len().min(2)];
    let upcoming = &events.events()[..events.events().len().min(3)];

    if json_output {
        let highlight_json = highlight.map(|e| {
            json!({
                "event": output::json::event_json(e),
                "when": if e.date == today { "today" } else { "tomorrow" }
            })
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "pending": pending,
                "highlight": highlight_json,
                "quick_focus": focus
                    .iter()
                    .map(|t| output::json::task_json(t, now))
                    .collect::<Vec<_>>(),
                "upcoming": upcoming
                    .iter()
                    .map(|e| output::json::event_json(e))
                    .collect::<Vec<_>>()
            })))
            .unwrap()
        );
        return Ok(0);
    }

    println!("{}, Chief.", greeting(Local::now().hour()));
    println!("Here is your daily briefing.\n");
    println!("Tasks pending: {pending}");

    if let Some(event) = highlight {
        let label = if event.date == today {
            "Happening Today"
        } else {
            "Reminder for Tomorrow"
        };
        let urgency = if event.is_urgent { " [urgent]" } else { "" };
        println!("{label}: {}{urgency}", event.title);
    }

    println!("\nQuick focus:");
    if focus.is_empty() {
        println!("  No active tasks. Check your todo list.");
    }
    for task in focus {
        println!(
            "  {} - {}{}",
            task.text,
            timer::format_hms(timer::projected_total_ms(task, now)),
            if task.is_timer_running { " *" } else { "" }
        );
    }

    println!("\nUpcoming events:");
    if upcoming.is_empty() {
        println!("  No upcoming events.");
    }
    for event in upcoming {
        output::text::print_event(event);
    }
    Ok(0)
}
