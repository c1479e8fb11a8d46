//! Boundary types for queries and answers.

use serde::{Deserialize, Serialize};

/// The strategy a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentLabel {
    /// Structured aggregation over survey statistics.
    Analytics,
    /// Semantic retrieval and synthesis over regulatory documents.
    Document,
    /// Both strategies, merged into one answer.
    Hybrid,
}

impl IntentLabel {
    /// The wire name of the label, as serialized in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Analytics => "analytics",
            IntentLabel::Document => "document",
            IntentLabel::Hybrid => "hybrid",
        }
    }
}

/// A citation pointing at the document material an answer was grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source file name.
    pub file: String,
    /// 1-based page number, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Retrieval similarity score, when the source came from vector search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// The final output of the pipeline.
///
/// Invariant: analytics answers carry no sources; document and hybrid
/// answers cite exactly the chunks that were handed to the generation
/// model, in retrieval order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The strategy the query was routed to.
    pub query_type: IntentLabel,
    /// The answer text shown to the user.
    pub text: String,
    /// Citations for the answer, ordered as retrieved.
    pub sources: Vec<SourceRef>,
}

impl Answer {
    /// An answer with no document provenance.
    pub fn unsourced(query_type: IntentLabel, text: impl Into<String>) -> Self {
        Self { query_type, text: text.into(), sources: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_label_serializes_lowercase() {
        let json = serde_json::to_string(&IntentLabel::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
    }

    #[test]
    fn source_ref_omits_absent_fields() {
        let source = SourceRef { file: "raq.pdf".into(), page: None, score: None };
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, "{\"file\":\"raq.pdf\"}");
    }
}
