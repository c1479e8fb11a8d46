//! Analytics handler with per-branch failure absorption.

use std::sync::Arc;

use tracing::{info, warn};

use crate::survey::{Aggregation, AnalyticsRow, SurveyStore};

/// Routes a query to a survey aggregation and shields callers from
/// storage failures.
///
/// Analytics is never the only useful content in a response — a hybrid
/// answer can still return document-grounded material — so any store
/// failure here is logged and converted into an empty result rather
/// than propagated.
pub struct AnalyticsHandler {
    store: Arc<dyn SurveyStore>,
}

impl AnalyticsHandler {
    /// Create a handler over the given survey store.
    pub fn new(store: Arc<dyn SurveyStore>) -> Self {
        Self { store }
    }

    /// Pick the aggregation matching the query topic, if any.
    ///
    /// Case-insensitive substring match, mirroring how the aggregations
    /// themselves filter survey items.
    pub fn route(query: &str) -> Option<Aggregation> {
        let q = query.to_lowercase();
        [Aggregation::ProfitabilityExpectations]
            .into_iter()
            .find(|aggregation| q.contains(aggregation.topic()))
    }

    /// Run the aggregation matched by `query` and return its rows.
    ///
    /// Returns an empty vec when no aggregation matches the query, when
    /// the aggregation matches zero survey rows, or when the store fails —
    /// the failure is recorded as a diagnostic, never surfaced.
    pub async fn rows_for(&self, query: &str) -> Vec<AnalyticsRow> {
        let Some(aggregation) = Self::route(query) else {
            info!("no analytics aggregation matches query");
            return Vec::new();
        };

        match self.store.run_aggregation(aggregation).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, aggregation = ?aggregation, "survey aggregation failed");
                Vec::new()
            }
        }
    }
}
