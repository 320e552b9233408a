use crate::models::SessionKind::{Lab, Lecture};
use crate::models::{ClassSession, DayOfWeek, ScheduleDay, SessionKind};

pub const TIMER_URL: &str = "https://vclock.com/timer/";

pub const QUOTE_SOURCE: &str = "Mahabharata";

pub const DAILY_QUOTES: &[&str] = &[
    "You have the right to perform your prescribed duties, but you are not entitled to the fruits of your actions.",
    "Perform your obligatory duty, because action is indeed better than inaction.",
    "Set thy heart upon thy work, but never on its reward.",
    "A gift is pure when it is given from the heart to the right person at the right time and at the right place, and when we expect nothing in return.",
    "Change is the law of the universe. You can be a millionaire, or a pauper in an instant.",
    "The mind is restless and difficult to restrain, but it is subdued by practice.",
    "There is neither this world, nor the world beyond, nor happiness for the one who doubts.",
    "One who sees inaction in action, and action in inaction, is intelligent among men.",
    "Man is made by his belief. As he believes, so he is.",
    "Delusion arises from anger. The mind is bewildered by delusion.",
    "Reshape yourself through the power of your will; never let yourself be degraded by self-will.",
    "Happiness is a state of mind, that has nothing to do with the external world.",
    "The only way you can conquer me is through love and there I am gladly conquered.",
    "Calmness, gentleness, silence, self-restraint, and purity: these are the disciplines of the mind.",
];

type Row = (&'static str, &'static str, &'static str, &'static str, SessionKind);

const MONDAY: &[Row] = &[
    ("mon-1", "Electronics System", "08:00", "08:50", Lecture),
    ("mon-2", "Technical English", "09:50", "10:40", Lecture),
    ("mon-3", "Manuf Process", "10:45", "11:35", Lecture),
];

const TUESDAY: &[Row] = &[
    ("tue-1", "Manuf Process", "08:00", "08:50", Lecture),
    ("tue-2", "Physics", "09:50", "10:40", Lecture),
    ("tue-3", "Maths", "10:45", "11:35", Lecture),
    ("tue-4", "Electronics System Lab", "11:40", "13:20", Lab),
    ("tue-5", "Phy Lab", "14:00", "15:40", Lab),
];

const WEDNESDAY: &[Row] = &[
    ("wed-1", "Maths", "08:00", "08:50", Lecture),
    ("wed-2", "Electronics System", "08:55", "09:45", Lecture),
    ("wed-3", "Technical English", "10:45", "11:35", Lecture),
    ("wed-4", "Manuf Process", "15:50", "17:30", Lecture),
];

const THURSDAY: &[Row] = &[
    ("thu-1", "Technical English", "08:00", "08:50", Lecture),
    ("thu-2", "Manuf Process", "08:55", "09:45", Lecture),
    ("thu-3", "Physics", "10:45", "11:35", Lecture),
    ("thu-4", "Maths", "11:40", "12:30", Lecture),
    ("thu-5", "Technical English Lab", "14:00", "15:40", Lab),
    ("thu-6", "Java", "15:50", "17:30", Lecture),
];

const FRIDAY: &[Row] = &[
    ("fri-1", "Physics", "08:00", "08:50", Lecture),
    ("fri-2", "Maths", "08:55", "09:45", Lecture),
    ("fri-3", "Electronics System", "09:50", "10:40", Lecture),
    ("fri-4", "Java", "11:40", "13:20", Lecture),
];

fn rows_for(day: DayOfWeek) -> &'static [Row] {
    match day {
        DayOfWeek::Monday => MONDAY,
        DayOfWeek::Tuesday => TUESDAY,
        DayOfWeek::Wednesday => WEDNESDAY,
        DayOfWeek::Thursday => THURSDAY,
        DayOfWeek::Friday => FRIDAY,
        DayOfWeek::Saturday | DayOfWeek::Sunday => &[],
    }
}

/// The weekly timetable, one entry per weekday starting on Monday.
pub fn weekly_schedule() -> Vec<ScheduleDay> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| ScheduleDay {
            day,
            sessions: rows_for(day)
                .iter()
                .map(|(id, subject, start, end, kind)| ClassSession::new(id, subject, start, end, *kind))
                .collect(),
        })
        .collect()
}

pub fn find_day(schedule: &[ScheduleDay], day: DayOfWeek) -> Option<&ScheduleDay> {
    schedule.iter().find(|d| d.day == day)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_weekday_appears_once() {
        let schedule = weekly_schedule();
        assert_eq!(schedule.len(), 7);
        let days: HashSet<_> = schedule.iter().map(|d| d.day).collect();
        assert_eq!(days.len(), 7);
    }

    #[test]
    fn sessions_are_well_formed() {
        for day in weekly_schedule() {
            let mut ids = HashSet::new();
            for session in &day.sessions {
                assert!(ids.insert(session.id.clone()), "duplicate id {}", session.id);
                let start = session.start_minutes().unwrap();
                let end = session.end_minutes().unwrap();
                assert!(start < end, "{} ends before it starts", session.id);
            }
        }
    }

    #[test]
    fn weekend_is_free() {
        let schedule = weekly_schedule();
        assert!(find_day(&schedule, DayOfWeek::Saturday).unwrap().sessions.is_empty());
        assert!(find_day(&schedule, DayOfWeek::Sunday).unwrap().sessions.is_empty());
        assert_eq!(find_day(&schedule, DayOfWeek::Thursday).unwrap().sessions.len(), 6);
    }
}
