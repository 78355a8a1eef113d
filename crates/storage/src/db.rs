use gastos_core::RecordStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use thiserror::Error;

pub type DbPool = Pool<Sqlite>;

/// Key the record list lives under unless the caller picks another.
pub const DEFAULT_RECORDS_KEY: &str = "gastosPessoais";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("could not encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

pub async fn create_db(path: &Path) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Private in-memory database, mostly for tests and dry runs.
pub async fn create_memory_db() -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_value(pool: &DbPool, key: &str) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query_as::<_, (String,)>("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.0))
}

pub async fn set_value(pool: &DbPool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO kv_store (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_value(pool: &DbPool, key: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM kv_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Loads the record list stored under `key`. A missing or unreadable payload
/// becomes an empty store; only database failures are errors.
pub async fn load_records(pool: &DbPool, key: &str) -> Result<RecordStore, StorageError> {
    let store = match get_value(pool, key).await? {
        Some(payload) => RecordStore::decode(&payload),
        None => RecordStore::new(),
    };
    tracing::debug!(key, records = store.len(), "loaded records");
    Ok(store)
}

pub async fn save_records(
    pool: &DbPool,
    key: &str,
    store: &RecordStore,
) -> Result<(), StorageError> {
    let payload = store.encode()?;
    set_value(pool, key, &payload).await?;
    tracing::debug!(key, records = store.len(), "saved records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gastos_core::{TransactionRecord, TransactionType};
    use rust_decimal::Decimal;

    fn rec(desc: &str, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            "05/01/2024",
            desc,
            "Outros Gastos",
            TransactionType::Expense,
            Decimal::new(cents, 2),
        )
    }

    #[tokio::test]
    async fn missing_key_loads_empty() {
        let pool = create_memory_db().await.unwrap();
        let store = load_records(&pool, DEFAULT_RECORDS_KEY).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let pool = create_memory_db().await.unwrap();
        let store = RecordStore::from_records(vec![rec("Padaria", 1250), rec("Uber", 2500)]);
        save_records(&pool, DEFAULT_RECORDS_KEY, &store).await.unwrap();

        let loaded = load_records(&pool, DEFAULT_RECORDS_KEY).await.unwrap();
        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn save_overwrites_previous_payload() {
        let pool = create_memory_db().await.unwrap();
        save_records(&pool, "k", &RecordStore::from_records(vec![rec("a", 100)]))
            .await
            .unwrap();
        save_records(&pool, "k", &RecordStore::new()).await.unwrap();
        assert!(load_records(&pool, "k").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_payload_loads_empty() {
        let pool = create_memory_db().await.unwrap();
        set_value(&pool, "k", "{definitely not a list").await.unwrap();
        assert!(load_records(&pool, "k").await.unwrap().is_empty());

        set_value(&pool, "k", r#"{"date":"05/01/2024"}"#).await.unwrap();
        assert!(load_records(&pool, "k").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn legacy_payload_is_migrated_on_load() {
        let pool = create_memory_db().await.unwrap();
        set_value(
            &pool,
            "k",
            r#"[{"date":"05/01/2024","description":"Holerite","category":"Salário","value":-3000}]"#,
        )
        .await
        .unwrap();
        let store = load_records(&pool, "k").await.unwrap();
        assert_eq!(store.records()[0].kind, TransactionType::Income);
        assert_eq!(store.records()[0].value, Decimal::new(3000, 0));
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let pool = create_memory_db().await.unwrap();
        set_value(&pool, "a", "1").await.unwrap();
        set_value(&pool, "b", "2").await.unwrap();
        assert_eq!(get_value(&pool, "a").await.unwrap().as_deref(), Some("1"));
        assert!(delete_value(&pool, "a").await.unwrap());
        assert!(!delete_value(&pool, "a").await.unwrap());
        assert_eq!(get_value(&pool, "a").await.unwrap(), None);
        assert_eq!(get_value(&pool, "b").await.unwrap().as_deref(), Some("2"));
    }
}
