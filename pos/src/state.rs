use std::sync::Arc;

use sqlx::SqlitePool;
use store::db::{connect, init_schema};

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = connect(&config.database_url)
            .await
            .expect("Database misconfigured!");
        init_schema(&pool).await.expect("Schema misconfigured!");

        Arc::new(Self { config, pool })
    }
}
