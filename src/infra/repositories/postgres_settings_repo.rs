use crate::domain::ports::SettingsRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use std::collections::HashMap;

pub struct PostgresSettingsRepo {
    pool: PgPool,
}

impl PostgresSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepo {
    async fn get_category(&self, category: &str) -> Result<HashMap<String, Value>, AppError> {
        let rows = sqlx::query("SELECT key, value FROM platform_settings WHERE category = $1")
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let mut values = HashMap::new();
        for row in rows {
            let key: String = row.get("key");
            let raw: String = row.get("value");
            let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            values.insert(key, value);
        }
        Ok(values)
    }

    async fn set_many(&self, category: &str, pairs: &[(String, Value)]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for (key, value) in pairs {
            sqlx::query(
                "INSERT INTO platform_settings (category, key, value) VALUES ($1, $2, $3)
                 ON CONFLICT(category, key) DO UPDATE SET value = excluded.value",
            )
            .bind(category)
            .bind(key)
            .bind(value.to_string())
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }
        tx.commit().await.map_err(AppError::Database)
    }
}
