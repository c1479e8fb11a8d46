//! PostgreSQL survey store backend.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::debug;

use raa_core::{Error, Result};

use crate::survey::{Aggregation, AnalyticsRow, SurveyStore};

/// A [`SurveyStore`] backed by the `finance` schema in PostgreSQL.
///
/// Expects `finance.survey_metrics` (per-response rows with an
/// `item_label` answer) joined to `finance.survey_items` (the survey
/// questions). Schema provisioning is owned by the data-loading
/// environment.
pub struct PgSurveyStore {
    pool: PgPool,
}

impl PgSurveyStore {
    /// Connect to the given database URL with a small pool.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_err(e: sqlx::Error) -> Error {
        Error::storage("survey-db", e.to_string())
    }
}

#[async_trait]
impl SurveyStore for PgSurveyStore {
    async fn run_aggregation(&self, aggregation: Aggregation) -> Result<Vec<AnalyticsRow>> {
        let topic_pattern = format!("%{}%", aggregation.topic());

        let rows = sqlx::query(
            "SELECT sm.item_label AS answer, COUNT(*) AS responses \
             FROM finance.survey_metrics sm \
             JOIN finance.survey_items si ON sm.item_id = si.item_id \
             WHERE si.item_label ILIKE $1 \
             GROUP BY sm.item_label \
             ORDER BY responses DESC",
        )
        .bind(&topic_pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::map_err)?;

        let result: Vec<AnalyticsRow> = rows
            .iter()
            .map(|row| AnalyticsRow {
                label: row.get("answer"),
                responses: row.get("responses"),
            })
            .collect();

        debug!(aggregation = ?aggregation, rows = result.len(), "ran survey aggregation");
        Ok(result)
    }
}
