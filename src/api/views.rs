use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::error::AppError;
use crate::models::{ClassSession, DayOfWeek, ScheduleDay, TodoItem};
use crate::services::SyncStatus;
use crate::sheets::SyncOutcome;
use crate::time::{duration_string, minutes_to_time};
use crate::timeline::{BreakEntry, TimelineItem, build_timeline, free_minutes};

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntryView {
    Session {
        #[serde(flatten)]
        session: ClassSession,
        time_label: String,
    },
    Break {
        #[serde(flatten)]
        entry: BreakEntry,
        label: String,
    },
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: DayOfWeek,
    pub class_count: usize,
    pub free_minutes: u32,
    pub free_time: Option<String>,
    pub timeline: Vec<TimelineEntryView>,
}

impl DayView {
    pub fn build(schedule: &ScheduleDay) -> Result<Self, AppError> {
        let items = build_timeline(&schedule.sessions)?;
        let free = free_minutes(&items);

        let mut timeline = Vec::with_capacity(items.len());
        for item in items {
            timeline.push(match item {
                TimelineItem::Session(session) => {
                    let time_label = format!(
                        "{} - {}",
                        minutes_to_time(session.start_minutes()?),
                        minutes_to_time(session.end_minutes()?)
                    );
                    TimelineEntryView::Session { session, time_label }
                }
                TimelineItem::Break(entry) => {
                    let label = format!("{} Free Time", entry.duration_label());
                    TimelineEntryView::Break { entry, label }
                }
            });
        }

        Ok(Self {
            day: schedule.day,
            class_count: schedule.sessions.len(),
            free_minutes: free,
            free_time: (free > 0).then(|| duration_string(free)),
            timeline,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub day: DayOfWeek,
    pub class_count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuoteView {
    pub quote: String,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub today: DayOfWeek,
    pub selected: DayView,
    pub quote: Option<QuoteView>,
    pub timer_url: &'static str,
    pub todos: Vec<TodoItem>,
    pub sync: SyncStatusView,
}

#[derive(Debug, Serialize)]
pub struct SyncStatusView {
    pub enabled: bool,
    pub status: SyncStatus,
    pub pending: bool,
}

#[derive(Debug, Deserialize)]
pub struct SyncSettingsRequest {
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncSettingsView {
    pub endpoint_url: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SyncOutcome>,
}

impl SyncSettingsView {
    pub fn new(config: &SyncConfig, outcome: Option<SyncOutcome>) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            enabled: config.is_enabled(),
            outcome,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SyncResultView {
    pub outcome: SyncOutcome,
    pub status: SyncStatus,
}
