pub mod views;

use axum::Json;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Utc;
use tracing::debug;

use crate::calendar::{current_weekday, daily_quote, initial_day};
use crate::error::AppError;
use crate::models::{DayOfWeek, NewTodoRequest, TodoItem};
use crate::schedule::{DAILY_QUOTES, QUOTE_SOURCE, TIMER_URL, find_day};
use crate::state::AppState;

use views::*;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(dashboard))
        .route("/schedule", get(list_days))
        .route("/schedule/{day}", get(get_day))
        .route("/quote", get(get_quote))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .route("/todos/{id}/toggle", patch(toggle_todo))
        .route("/settings/sync", get(get_sync_settings).put(put_sync_settings))
        .route("/sync", post(sync_now))
        .route("/sync/status", get(sync_status))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

fn todays_quote() -> Option<QuoteView> {
    daily_quote(DAILY_QUOTES, &Utc::now()).map(|quote| QuoteView {
        quote: quote.to_string(),
        source: QUOTE_SOURCE,
    })
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    let today = current_weekday();
    let day = initial_day(&state.schedule, today);
    let schedule = find_day(&state.schedule, day).ok_or(AppError::NotFound)?;
    let selected = DayView::build(schedule)?;

    let store = state.store.lock().await;
    Ok(Json(DashboardView {
        today,
        selected,
        quote: todays_quote(),
        timer_url: TIMER_URL,
        todos: store.todos().items().to_vec(),
        sync: SyncStatusView {
            enabled: store.sync_config().is_enabled(),
            status: store.status(),
            pending: store.sync_pending(),
        },
    }))
}

async fn list_days(State(state): State<AppState>) -> Json<Vec<DaySummary>> {
    Json(
        state
            .schedule
            .iter()
            .map(|d| DaySummary {
                day: d.day,
                class_count: d.sessions.len(),
            })
            .collect(),
    )
}

async fn get_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<DayView>, AppError> {
    let day: DayOfWeek = day.parse().map_err(AppError::BadRequest)?;
    let schedule = find_day(&state.schedule, day).ok_or(AppError::NotFound)?;
    Ok(Json(DayView::build(schedule)?))
}

async fn get_quote() -> Result<Json<QuoteView>, AppError> {
    todays_quote().map(Json).ok_or(AppError::NotFound)
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    let store = state.store.lock().await;
    Json(store.todos().items().to_vec())
}

async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<NewTodoRequest>,
) -> Result<Response, AppError> {
    let mut store = state.store.lock().await;
    match store.add(&req.text).await? {
        Some(todo) => {
            debug!("Added todo {}", todo.id);
            Ok((StatusCode::CREATED, Json(todo)).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let mut store = state.store.lock().await;
    if !store.toggle(&id).await? {
        debug!("Toggle ignored for unknown todo {}", id);
    }
    Ok(Json(store.todos().items().to_vec()))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.delete(&id).await? {
        debug!("Delete ignored for unknown todo {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn get_sync_settings(State(state): State<AppState>) -> Json<SyncSettingsView> {
    let store = state.store.lock().await;
    Json(SyncSettingsView::new(store.sync_config(), None))
}

/// Save the endpoint and push the current list right away.
async fn put_sync_settings(
    State(state): State<AppState>,
    Json(req): Json<SyncSettingsRequest>,
) -> Result<Json<SyncSettingsView>, AppError> {
    let (config, job) = {
        let mut store = state.store.lock().await;
        store.set_endpoint(req.endpoint_url).await?;
        (store.sync_config().clone(), store.sync_job())
    };

    let outcome = match job {
        Some(job) => Some(job.run().await),
        None => None,
    };
    Ok(Json(SyncSettingsView::new(&config, outcome)))
}

async fn sync_now(State(state): State<AppState>) -> Result<Json<SyncResultView>, AppError> {
    let job = state.store.lock().await.sync_job();
    let job = job.ok_or_else(|| AppError::BadRequest("Sync endpoint is not configured".to_string()))?;
    let outcome = job.run().await;

    let status = state.store.lock().await.status();
    Ok(Json(SyncResultView { outcome, status }))
}

async fn sync_status(State(state): State<AppState>) -> Json<SyncStatusView> {
    let store = state.store.lock().await;
    Json(SyncStatusView {
        enabled: store.sync_config().is_enabled(),
        status: store.status(),
        pending: store.sync_pending(),
    })
}
