use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::TodoList;

pub const TODOS_KEY: &str = "chronoTodos";
pub const SYNC_URL_KEY: &str = "chronoSheetUrl";

pub async fn get_value(db: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(db)
        .await
}

pub async fn set_value(db: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn load_todos(db: &SqlitePool) -> Result<Option<TodoList>, AppError> {
    match get_value(db, TODOS_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn save_todos(db: &SqlitePool, todos: &TodoList) -> Result<(), AppError> {
    let raw = serde_json::to_string(todos)?;
    set_value(db, TODOS_KEY, &raw).await?;
    Ok(())
}

/// Stored endpoint URL; an empty string counts as unset.
pub async fn load_sync_url(db: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    Ok(get_value(db, SYNC_URL_KEY)
        .await?
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty()))
}

pub async fn save_sync_url(db: &SqlitePool, url: Option<&str>) -> Result<(), sqlx::Error> {
    set_value(db, SYNC_URL_KEY, url.unwrap_or_default()).await
}
