//! Survey store trait and aggregations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use raa_core::Result;

/// One aggregated survey answer category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    /// The answer label as recorded in the survey.
    pub label: String,
    /// How many responses fell into this category. Never negative.
    pub responses: i64,
}

/// The fixed aggregations the assistant can run.
///
/// v1 ships exactly one; the enum exists so new aggregations extend the
/// match instead of growing stringly-typed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Survey responses on bank profitability expectations, grouped by
    /// answer label.
    ProfitabilityExpectations,
}

impl Aggregation {
    /// The survey topic this aggregation filters on, matched
    /// case-insensitively as a substring of the item label.
    pub fn topic(&self) -> &'static str {
        match self {
            Aggregation::ProfitabilityExpectations => "profitability",
        }
    }
}

/// Read access to aggregated survey response data.
///
/// The structured store is read-only from the answer path; writes happen
/// upstream when survey data is loaded.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Run the given aggregation, returning rows sorted by response count
    /// descending. Zero matching rows is a valid empty result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`](raa_core::Error) if the
    /// structured store cannot be reached.
    async fn run_aggregation(&self, aggregation: Aggregation) -> Result<Vec<AnalyticsRow>>;
}
