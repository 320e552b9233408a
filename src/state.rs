use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::models::ScheduleDay;
use crate::services::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub schedule: Arc<Vec<ScheduleDay>>,
    pub store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(db: SqlitePool, schedule: Vec<ScheduleDay>, store: TodoStore) -> Self {
        Self {
            db,
            schedule: Arc::new(schedule),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
