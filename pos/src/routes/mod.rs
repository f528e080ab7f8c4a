use serde::Deserialize;

use crate::error::AppError;

pub mod inventory;
pub mod meals;
pub mod menu;
pub mod transactions;

#[derive(Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Ids come in as query text, anything non-numeric is rejected before the
/// data layer sees it.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

pub fn require_id(params: IdQuery) -> Result<i64, AppError> {
    match params.id {
        Some(raw) => parse_id(&raw),
        None => Err(AppError::MissingField("id")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sqlx::sqlite::SqlitePoolOptions;

    use super::{IdQuery, parse_id, require_id};
    use crate::{config::Config, error::AppError, state::AppState};

    /// Handler-level state on a single-connection in-memory database.
    pub(crate) async fn test_state() -> Arc<AppState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        store::db::init_schema(&pool)
            .await
            .expect("Failed to create schema");

        Arc::new(AppState {
            config: Config {
                port: 0,
                database_url: String::new(),
                cors_origin: String::new(),
            },
            pool,
        })
    }

    #[test]
    fn test_parse_id_accepts_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        assert!(matches!(parse_id("abc"), Err(AppError::InvalidId(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_require_id_rejects_missing() {
        assert!(matches!(
            require_id(IdQuery { id: None }),
            Err(AppError::MissingField("id"))
        ));
    }
}
