use sqlx::postgres::{PgPool, PgPoolOptions};

use std::time::Duration;

use crate::common::GeneralError;

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

/// ORDER BY clause for an admin list. `sort` must already be resolved
/// against the entity's column whitelist; it is never raw client input.
pub(crate) fn order_by_clause(sort: Option<(&str, bool)>, fallback: &str) -> String {
    match sort {
        Some((column, ascending)) => {
            format!("{} {}", column, if ascending { "ASC" } else { "DESC" })
        }
        None => fallback.to_string(),
    }
}
