use serde_json::{json, Value};

use crate::achievements::AchievementSummary;
use crate::error::FlowdeckError;
use crate::models::{CalendarEvent, Task};
use crate::timer;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &FlowdeckError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// One task with its timer projected at `now_ms`.
pub fn task_json(t: &Task, now_ms: i64) -> Value {
    let total = timer::projected_total_ms(t, now_ms);
    json!({
        "id": t.id,
        "text": t.text,
        "status": t.status.as_str(),
        "created_at": t.created_at,
        "started_at": t.started_at,
        "completed_at": t.completed_at,
        "elapsed_ms": t.elapsed_ms,
        "is_timer_running": t.is_timer_running,
        "total_ms": total,
        "total_hms": timer::format_hms(total)
    })
}

pub fn event_json(e: &CalendarEvent) -> Value {
    json!({
        "id": e.id,
        "title": e.title,
        "date": e.date.to_string(),
        "is_urgent": e.is_urgent
    })
}

pub fn achievements_json(summary: &AchievementSummary) -> Value {
    json!({
        "done_count": summary.done_count,
        "total_hours": (summary.total_hours * 10.0).round() / 10.0,
        "tier": summary.tier.as_str()
    })
}
