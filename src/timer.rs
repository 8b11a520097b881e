//! Read-time projection of focus-timer totals.
//!
//! Stored state only changes on explicit start/stop/reset/transition; the
//! display layer calls [`projected_total_ms`] on its own cadence and never
//! writes anything back.

use crate::models::Task;

/// Total focus time at `now_ms`: closed segments plus the open one.
pub fn projected_total_ms(task: &Task, now_ms: i64) -> i64 {
    let mut total = task.elapsed_ms;
    if task.is_timer_running {
        if let Some(started) = task.last_timer_start {
            total += (now_ms - started).max(0);
        }
    }
    total
}

/// `HH:MM:SS` with non-wrapping hours.
pub fn format_hms(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let minutes = ms / 60_000 % 60;
    let seconds = ms / 1_000 % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task::new("t".into(), "focus".into(), 1_000)
    }

    #[test]
    fn projection_is_elapsed_when_stopped() {
        let mut t = task();
        t.elapsed_ms = 4_200;
        assert_eq!(projected_total_ms(&t, 99_999), 4_200);
    }

    #[test]
    fn projection_adds_open_segment() {
        let mut t = task();
        t.elapsed_ms = 1_000;
        t.is_timer_running = true;
        t.last_timer_start = Some(5_000);
        assert_eq!(projected_total_ms(&t, 8_500), 4_500);
    }

    #[test]
    fn projection_clamps_backwards_clock() {
        let mut t = task();
        t.elapsed_ms = 1_000;
        t.is_timer_running = true;
        t.last_timer_start = Some(5_000);
        assert_eq!(projected_total_ms(&t, 4_000), 1_000);
    }

    #[test]
    fn format_pads_and_wraps() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(5_000), "00:00:05");
        assert_eq!(format_hms(61_000), "00:01:01");
        assert_eq!(format_hms(3_600_000), "01:00:00");
        assert_eq!(format_hms(3_661_000), "01:01:01");
    }

    #[test]
    fn format_hours_do_not_wrap() {
        assert_eq!(format_hms(100 * 3_600_000), "100:00:00");
    }
}
