use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Single-table schema, applied idempotently at startup.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT,
    first_name    TEXT,
    last_name     TEXT
)
"#;

/// Gateway owning the SQLite pool. All reads and writes go through it.
#[derive(Clone)]
pub struct UserStore {
    pub(crate) db: SqlitePool,
}

impl UserStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse database url")?
            .create_if_missing(true);

        let db = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .context("connect to database")?;

        sqlx::query(SCHEMA)
            .execute(&db)
            .await
            .context("create users table")?;

        tracing::debug!(url = %config.database_url, "user store ready");
        Ok(Self { db })
    }

    pub async fn init_from_env() -> anyhow::Result<Self> {
        Self::init(&AppConfig::from_env()?).await
    }
}
