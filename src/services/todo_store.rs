use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::config::{SyncConfig, SyncSettings, normalize_url};
use crate::db::repository;
use crate::error::AppError;
use crate::models::{TodoItem, TodoList};
use crate::services::debounce::{SyncDebouncer, SyncIndicator, SyncJob, SyncStatus};
use crate::sheets::{SheetsClient, SyncOutcome};

/// Owns the to-do list and mirrors every change to local storage and,
/// when an endpoint is configured, to the spreadsheet.
pub struct TodoStore {
    db: SqlitePool,
    todos: TodoList,
    sync: SyncConfig,
    client: Arc<dyn SheetsClient>,
    indicator: SyncIndicator,
    debouncer: SyncDebouncer,
}

impl TodoStore {
    /// Restore the last saved list and endpoint.
    ///
    /// Missing or unreadable state starts the store empty.
    pub async fn load(db: SqlitePool, client: Arc<dyn SheetsClient>, settings: &SyncSettings) -> Self {
        let todos = match repository::load_todos(&db).await {
            Ok(Some(todos)) => todos,
            Ok(None) => TodoList::new(),
            Err(e) => {
                warn!("Could not restore saved todos, starting empty: {}", e);
                TodoList::new()
            }
        };

        let saved_url = match repository::load_sync_url(&db).await {
            Ok(url) => url,
            Err(e) => {
                warn!("Could not read sync endpoint: {}", e);
                None
            }
        };
        let sync = SyncConfig::new(saved_url.or_else(|| settings.default_endpoint.clone()));

        info!(
            "Loaded {} todos (sync {})",
            todos.len(),
            if sync.is_enabled() { "enabled" } else { "local only" }
        );

        Self {
            db,
            todos,
            sync,
            client,
            indicator: SyncIndicator::new(settings.status_clear_after),
            debouncer: SyncDebouncer::new(settings.debounce),
        }
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn sync_config(&self) -> &SyncConfig {
        &self.sync
    }

    pub fn status(&self) -> SyncStatus {
        self.indicator.status()
    }

    pub fn sync_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Returns the new item, or `None` when the text was blank.
    pub async fn add(&mut self, text: &str) -> Result<Option<TodoItem>, AppError> {
        let Some(item) = self.todos.add(text).cloned() else {
            debug!("Ignoring blank todo");
            return Ok(None);
        };
        self.commit().await?;
        Ok(Some(item))
    }

    pub async fn toggle(&mut self, id: &str) -> Result<bool, AppError> {
        if !self.todos.toggle(id) {
            return Ok(false);
        }
        self.commit().await?;
        Ok(true)
    }

    pub async fn delete(&mut self, id: &str) -> Result<bool, AppError> {
        if !self.todos.delete(id) {
            return Ok(false);
        }
        self.commit().await?;
        Ok(true)
    }

    /// Save the endpoint URL. A blank URL turns sync off.
    ///
    /// Any pending push was built for the previous endpoint and is dropped.
    pub async fn set_endpoint(&mut self, url: Option<String>) -> Result<(), AppError> {
        let url = normalize_url(url);
        repository::save_sync_url(&self.db, url.as_deref()).await?;
        self.debouncer.cancel();
        self.sync = SyncConfig::new(url);
        info!(
            "Sync endpoint {}",
            if self.sync.is_enabled() { "saved" } else { "cleared" }
        );
        Ok(())
    }

    /// A push of the current list, if an endpoint is configured.
    pub fn sync_job(&self) -> Option<SyncJob> {
        let endpoint = self.sync.endpoint_url.clone()?;
        Some(SyncJob::new(
            self.client.clone(),
            self.indicator.clone(),
            endpoint,
            self.todos.items().to_vec(),
        ))
    }

    /// Push immediately; `None` when sync is off.
    pub async fn sync_now(&self) -> Option<SyncOutcome> {
        match self.sync_job() {
            Some(job) => Some(job.run().await),
            None => None,
        }
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        if let Some(job) = self.sync_job() {
            self.debouncer.schedule(job);
        }
        repository::save_todos(&self.db, &self.todos).await
    }
}
