//! Structured survey analytics for the Regulatory Analytics Assistant.
//!
//! Aggregations over survey-response data: the [`SurveyStore`] seam with
//! its [`PgSurveyStore`] backend, and the [`AnalyticsHandler`] that routes
//! queries to aggregations while absorbing storage failures into empty
//! results.

pub mod handler;
pub mod postgres;
pub mod survey;

pub use handler::AnalyticsHandler;
pub use postgres::PgSurveyStore;
pub use survey::{Aggregation, AnalyticsRow, SurveyStore};
