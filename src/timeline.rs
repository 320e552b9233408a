//! Ordering of a day's sessions with inferred breaks between them.
//!
//! Gaps of five minutes or less are transit time between rooms and are not
//! reported as breaks.

use serde::{Deserialize, Serialize};

use crate::models::ClassSession;
use crate::time::{TimeError, duration_string};

/// Gaps must be strictly longer than this to count as a break.
pub const BREAK_THRESHOLD_MINUTES: i64 = 5;

/// Idle interval between two consecutive sessions of the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEntry {
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
}

impl BreakEntry {
    pub fn duration_label(&self) -> String {
        duration_string(self.duration_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineItem {
    Session(ClassSession),
    Break(BreakEntry),
}

/// Build the time-ordered timeline for one day.
///
/// Sessions are sorted by start time; sessions sharing a start time keep their
/// input order. Overlapping sessions are passed through as-is.
pub fn build_timeline(sessions: &[ClassSession]) -> Result<Vec<TimelineItem>, TimeError> {
    let mut sorted = Vec::with_capacity(sessions.len());
    for session in sessions {
        sorted.push((session.start_minutes()?, session.end_minutes()?, session));
    }
    sorted.sort_by_key(|(start, _, _)| *start);

    let mut items = Vec::with_capacity(sorted.len() * 2);
    for (i, (_, end, session)) in sorted.iter().enumerate() {
        items.push(TimelineItem::Session((*session).clone()));

        if let Some((next_start, _, next)) = sorted.get(i + 1) {
            let gap = i64::from(*next_start) - i64::from(*end);
            if gap > BREAK_THRESHOLD_MINUTES {
                items.push(TimelineItem::Break(BreakEntry {
                    start_time: session.end_time.clone(),
                    end_time: next.start_time.clone(),
                    duration_minutes: gap as u32,
                }));
            }
        }
    }

    Ok(items)
}

/// Total break time in a timeline.
pub fn free_minutes(items: &[TimelineItem]) -> u32 {
    items
        .iter()
        .filter_map(|item| match item {
            TimelineItem::Break(b) => Some(b.duration_minutes),
            TimelineItem::Session(_) => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionKind;

    fn session(id: &str, start: &str, end: &str) -> ClassSession {
        ClassSession::new(id, id, start, end, SessionKind::Lecture)
    }

    fn ids(items: &[TimelineItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                TimelineItem::Session(s) => s.id.clone(),
                TimelineItem::Break(b) => format!("break:{}", b.duration_minutes),
            })
            .collect()
    }

    #[test]
    fn empty_day_has_empty_timeline() {
        assert!(build_timeline(&[]).unwrap().is_empty());
    }

    #[test]
    fn five_minute_gap_is_not_a_break() {
        let items = build_timeline(&[session("a", "09:50", "10:40"), session("b", "10:45", "11:35")]).unwrap();
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn six_minute_gap_is_a_break() {
        let items = build_timeline(&[session("a", "09:50", "10:40"), session("b", "10:46", "11:35")]).unwrap();
        assert_eq!(ids(&items), vec!["a", "break:6", "b"]);
    }

    #[test]
    fn hour_gap_produces_one_break_between_sessions() {
        let items = build_timeline(&[session("a", "08:00", "08:50"), session("b", "09:50", "10:40")]).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[1],
            TimelineItem::Break(BreakEntry {
                start_time: "08:50".to_string(),
                end_time: "09:50".to_string(),
                duration_minutes: 60,
            })
        );
        if let TimelineItem::Break(b) = &items[1] {
            assert_eq!(b.duration_label(), "1h");
        }
    }

    #[test]
    fn sorts_unordered_input_and_is_repeatable() {
        let sessions = vec![
            session("c", "14:00", "15:40"),
            session("a", "08:00", "08:50"),
            session("b", "08:55", "09:45"),
        ];
        let first = build_timeline(&sessions).unwrap();
        let second = build_timeline(&sessions).unwrap();

        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["a", "b", "break:255", "c"]);
    }

    #[test]
    fn length_is_sessions_plus_long_gaps() {
        let sessions = vec![
            session("a", "08:00", "08:50"),
            session("b", "09:50", "10:40"),
            session("c", "10:45", "11:35"),
            session("d", "11:40", "13:20"),
            session("e", "14:00", "15:40"),
        ];
        let items = build_timeline(&sessions).unwrap();
        let breaks = items.iter().filter(|i| matches!(i, TimelineItem::Break(_))).count();

        assert_eq!(breaks, 2);
        assert_eq!(items.len(), sessions.len() + breaks);
        assert_eq!(free_minutes(&items), 60 + 40);
    }

    #[test]
    fn equal_start_times_keep_input_order() {
        let items = build_timeline(&[session("x", "10:00", "10:50"), session("y", "10:00", "11:00")]).unwrap();
        assert_eq!(ids(&items), vec!["x", "y"]);
    }

    #[test]
    fn overlapping_sessions_pass_through_without_break() {
        let items = build_timeline(&[session("a", "08:00", "10:00"), session("b", "09:00", "09:30")]).unwrap();
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn malformed_time_is_reported() {
        let err = build_timeline(&[session("a", "8am", "09:00")]).unwrap_err();
        assert_eq!(err, TimeError::Format("8am".to_string()));
    }
}
