//! Month-grid math for the calendar screen.

use chrono::{Datelike, Days, NaiveDate};

/// All dates shown for a month view: whole weeks from the Sunday at or
/// before the 1st through the Saturday at or after the last day. Length
/// is always a multiple of 7.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_day_of_month(year, month)?;

    let lead = first.weekday().num_days_from_sunday() as u64;
    let trail = 6 - last.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(lead))?;
    let end = last.checked_add_days(Days::new(trail))?;

    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        day = day.checked_add_days(Days::new(1))?;
    }
    Some(days)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    next_month_first.checked_sub_days(Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn grid_spans_whole_weeks() {
        let days = month_grid(2026, 8).unwrap();
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days.first().unwrap().weekday(), Weekday::Sun);
        assert_eq!(days.last().unwrap().weekday(), Weekday::Sat);
    }

    #[test]
    fn grid_contains_every_day_of_the_month() {
        let days = month_grid(2026, 2).unwrap();
        for d in 1..=28 {
            assert!(days.contains(&NaiveDate::from_ymd_opt(2026, 2, d).unwrap()));
        }
    }

    #[test]
    fn grid_handles_december() {
        let days = month_grid(2025, 12).unwrap();
        assert!(days.contains(&NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }

    #[test]
    fn invalid_month_is_none() {
        assert!(month_grid(2026, 13).is_none());
    }
}
