use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::models::{DayOfWeek, ScheduleDay};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Day shown when today has no timetable entry or no classes.
pub const DEFAULT_DAY: DayOfWeek = DayOfWeek::Monday;

pub fn weekday_of<D: Datelike>(date: &D) -> DayOfWeek {
    date.weekday().into()
}

/// Weekday of the local wall-clock date.
pub fn current_weekday() -> DayOfWeek {
    weekday_of(&Local::now())
}

/// Index into a quote list that stays fixed for a whole UTC day.
///
/// Returns `None` for an empty list.
pub fn daily_quote_index(epoch_millis: i64, quote_count: usize) -> Option<usize> {
    if quote_count == 0 {
        return None;
    }
    let day = epoch_millis.div_euclid(MILLIS_PER_DAY);
    Some(day.rem_euclid(quote_count as i64) as usize)
}

pub fn daily_quote<'a, Tz: TimeZone>(quotes: &[&'a str], now: &DateTime<Tz>) -> Option<&'a str> {
    daily_quote_index(now.timestamp_millis(), quotes.len()).map(|i| quotes[i])
}

/// Pick the day to show first: today if it has classes, otherwise the default.
pub fn initial_day(schedule: &[ScheduleDay], today: DayOfWeek) -> DayOfWeek {
    match schedule.iter().find(|d| d.day == today) {
        Some(day) if !day.sessions.is_empty() => today,
        _ => DEFAULT_DAY,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::schedule::weekly_schedule;

    #[test]
    fn weekday_follows_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(weekday_of(&date), DayOfWeek::Sunday);
        let date = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        assert_eq!(weekday_of(&date), DayOfWeek::Wednesday);
    }

    #[test]
    fn quote_index_is_stable_within_a_utc_day() {
        let midnight = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap().timestamp_millis();
        let late = midnight + MILLIS_PER_DAY - 1;
        assert_eq!(daily_quote_index(midnight, 14), daily_quote_index(late, 14));
    }

    #[test]
    fn quote_index_changes_day_to_day() {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 13, 30, 0).unwrap().timestamp_millis();
        for count in 2..20 {
            assert_ne!(
                daily_quote_index(t, count),
                daily_quote_index(t + MILLIS_PER_DAY, count),
                "count {}",
                count
            );
        }
    }

    #[test]
    fn quote_index_matches_epoch_day() {
        assert_eq!(daily_quote_index(0, 14), Some(0));
        assert_eq!(daily_quote_index(MILLIS_PER_DAY * 15, 14), Some(1));
        assert_eq!(daily_quote_index(-1, 14), Some(13));
        assert_eq!(daily_quote_index(12345, 0), None);
    }

    #[test]
    fn daily_quote_picks_from_list() {
        let quotes = ["a", "b", "c"];
        let now = Utc.timestamp_millis_opt(MILLIS_PER_DAY * 4 + 10).unwrap();
        assert_eq!(daily_quote(&quotes, &now), Some("b"));
        assert_eq!(daily_quote(&[], &now), None);
    }

    #[test]
    fn initial_day_falls_back_on_free_days() {
        let schedule = weekly_schedule();
        assert_eq!(initial_day(&schedule, DayOfWeek::Wednesday), DayOfWeek::Wednesday);
        assert_eq!(initial_day(&schedule, DayOfWeek::Saturday), DEFAULT_DAY);
        assert_eq!(initial_day(&schedule, DayOfWeek::Sunday), DEFAULT_DAY);
        assert_eq!(initial_day(&[], DayOfWeek::Friday), DEFAULT_DAY);
    }
}
