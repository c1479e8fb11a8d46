//! Keyword-based query intent classification.

use raa_core::IntentLabel;

/// Terms indicating a request for counts, statistics, trends, or survey
/// data. Mixes domain vocabulary with counting/trend phrasing.
const DEFAULT_ANALYTICS_SIGNALS: &[&str] = &[
    "profitability",
    "capital",
    "liquidity",
    "ratio",
    "metrics",
    "survey",
    "expectations",
    "how many",
    "average",
    "trend",
    "percentage",
    "statistics",
];

/// Terms indicating a request for regulatory text, citations, or policy
/// content.
const DEFAULT_DOCUMENT_SIGNALS: &[&str] = &[
    "eba",
    "regulation",
    "regulatory",
    "guideline",
    "report",
    "article",
    "paragraph",
    "directive",
    "compliance",
    "mentioned",
    "according to",
];

/// Classifies a raw query string into an [`IntentLabel`].
///
/// Keyword-based, not learned: a case-insensitive substring scan over two
/// signal lists. Pure and deterministic, so it is trivially testable and
/// swappable for a learned classifier later without touching callers.
/// The signal lists are construction parameters, not hard-coded truth —
/// the default lists can be replaced wholesale.
///
/// Decision table:
///
/// | analytics match | document match | label |
/// |---|---|---|
/// | yes | yes | hybrid |
/// | yes | no | analytics |
/// | no | yes | document |
/// | no | no | document |
///
/// An unrecognized query defaults to `document`: retrieval can honestly
/// report "no relevant documents", while a guessed statistic cannot.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    analytics_signals: Vec<String>,
    document_signals: Vec<String>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::with_signals(
            DEFAULT_ANALYTICS_SIGNALS.iter().map(|s| s.to_string()),
            DEFAULT_DOCUMENT_SIGNALS.iter().map(|s| s.to_string()),
        )
    }
}

impl IntentClassifier {
    /// Create a classifier with custom signal lists.
    ///
    /// Signals are matched case-insensitively; they are lowercased here
    /// once so classification allocates only the lowercased query.
    pub fn with_signals(
        analytics_signals: impl IntoIterator<Item = String>,
        document_signals: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            analytics_signals: analytics_signals.into_iter().map(|s| s.to_lowercase()).collect(),
            document_signals: document_signals.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Classify a query.
    pub fn classify(&self, query: &str) -> IntentLabel {
        let q = query.to_lowercase();

        let has_analytics = self.analytics_signals.iter().any(|signal| q.contains(signal.as_str()));
        let has_document = self.document_signals.iter().any(|signal| q.contains(signal.as_str()));

        match (has_analytics, has_document) {
            (true, true) => IntentLabel::Hybrid,
            (true, false) => IntentLabel::Analytics,
            (false, true) => IntentLabel::Document,
            (false, false) => IntentLabel::Document,
        }
    }
}
