use chrono::{Datelike, NaiveDate};

use crate::achievements::AchievementSummary;
use crate::models::{CalendarEvent, Task, TaskStatus};
use crate::store::{EventStore, TaskBoard};
use crate::timer;

fn short_id(id: &str) -> &str {
    &id[..std::cmp::min(8, id.len())]
}

pub fn print_task(t: &Task, now_ms: i64) {
    println!("Task: {} ({})", t.text, t.id);
    println!("  Status: {}", t.status.as_str());
    if let Some(started) = t.started_at {
        println!("  Started: {}", format_ts(started));
    }
    if let Some(completed) = t.completed_at {
        println!("  Completed: {}", format_ts(completed));
    }
    println!(
        "  Focus time: {}{}",
        timer::format_hms(timer::projected_total_ms(t, now_ms)),
        if t.is_timer_running { " (running)" } else { "" }
    );
}

pub fn print_task_line(t: &Task, now_ms: i64) {
    let total = timer::projected_total_ms(t, now_ms);
    let timer_col = if total > 0 || t.is_timer_running {
        format!(
            "  {}{}",
            timer::format_hms(total),
            if t.is_timer_running { " *" } else { "" }
        )
    } else {
        String::new()
    };
    println!("  {} ({}){}", t.text, short_id(&t.id), timer_col);
}

/// The three board columns in the original screen order.
pub fn print_board(board: &TaskBoard, now_ms: i64) {
    let columns = [
        (TaskStatus::Todo, board.todo_view()),
        (TaskStatus::InProgress, board.in_progress_view()),
        (TaskStatus::Done, board.done_view()),
    ];
    for (status, tasks) in columns {
        println!("{} ({})", status.column_title(), tasks.len());
        if tasks.is_empty() {
            println!("  (empty)");
        }
        for t in &tasks {
            print_task_line(t, now_ms);
        }
        println!();
    }
}

pub fn print_event(e: &CalendarEvent) {
    println!(
        "  {} {} ({}){}",
        e.date,
        e.title,
        short_id(&e.id),
        if e.is_urgent { "  [urgent]" } else { "" }
    );
}

pub fn print_event_list(events: &[&CalendarEvent]) {
    if events.is_empty() {
        println!("No events scheduled.");
        return;
    }
    for e in events {
        print_event(e);
    }
}

pub fn print_achievements(summary: &AchievementSummary) {
    println!("Total focus: {:.1} hrs", summary.total_hours);
    println!("Completed: {}", summary.done_count);
    println!("Badge: {}", summary.tier.as_str());
}

/// One-shot completion flourish. Visual only, nothing depends on it.
pub fn celebrate() {
    println!("*** Task complete! Nice work. ***");
}

/// Render a month grid. Markers: `!` urgent event, `.` scheduled event;
/// today is bracketed. Days outside the month are blank.
pub fn print_calendar(
    year: i32,
    month: u32,
    grid: &[NaiveDate],
    events: &EventStore,
    today: NaiveDate,
) {
    println!("{year}-{month:02}");
    println!("  Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid.chunks(7) {
        let mut row = String::new();
        for day in week {
            if day.month() != month {
                row.push_str("     ");
                continue;
            }
            let day_events = events.events_on(*day);
            let marker = if day_events.iter().any(|e| e.is_urgent) {
                '!'
            } else if !day_events.is_empty() {
                '.'
            } else {
                ' '
            };
            if *day == today {
                row.push_str(&format!("[{:>2}{}]", day.day(), marker));
            } else {
                row.push_str(&format!(" {:>2}{} ", day.day(), marker));
            }
        }
        println!("{}", row.trim_end());
    }
}

pub fn format_ts(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}
