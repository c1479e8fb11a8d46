//! Grounded answer synthesis from retrieved chunks or analytics rows.

use std::sync::Arc;

use tracing::warn;

use raa_analytics::AnalyticsRow;
use raa_core::{Answer, ChatModel, IntentLabel, SourceRef};
use raa_rag::RetrievedChunk;

/// System instructions for document-grounded generation. The model must
/// answer only from supplied evidence, state explicitly when the evidence
/// is insufficient, and cite every claim.
const SYSTEM_PROMPT: &str = "You are a Regulatory Analytics Assistant.\n\
Use ONLY the provided sources. If the answer is not in the sources, say you don't know.\n\
Cite sources as: (file, p.X). Be concise and factual.\n";

/// Returned when retrieval produced no evidence; the generation model is
/// never called in that case.
const NO_EVIDENCE_TEXT: &str =
    "No relevant information was found in the regulatory documents for this question.";

/// Returned when the generation provider fails; raw provider errors never
/// reach the answer text.
const GENERATION_FAILURE_TEXT: &str =
    "The answer could not be generated right now. Please try again in a moment.";

/// Returned when no survey rows back the analytics section.
const NO_SURVEY_DATA_TEXT: &str =
    "No matching survey analytics are available for this question.";

/// Maximum number of analytics rows rendered in a summary.
const ANALYTICS_TOP_N: usize = 10;

/// Builds grounded answers from evidence.
///
/// Document evidence is serialized and handed to the [`ChatModel`] under
/// strict grounding instructions; analytics evidence is rendered by a
/// fixed template with no model call.
pub struct AnswerSynthesizer {
    model: Arc<dyn ChatModel>,
}

impl AnswerSynthesizer {
    /// Create a synthesizer delegating generation to the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Serialize retrieved chunks as indexed, attributed evidence blocks
    /// in retrieval rank order.
    fn format_sources(chunks: &[RetrievedChunk]) -> String {
        chunks
            .iter()
            .enumerate()
            .map(|(i, retrieved)| {
                format!(
                    "[{}] file={} page={} score={:.3}\n{}",
                    i + 1,
                    retrieved.chunk.file_name,
                    retrieved.chunk.page_number,
                    retrieved.score,
                    retrieved.chunk.content,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Synthesize a document-grounded answer for `query` from `chunks`.
    ///
    /// With zero chunks this short-circuits to the fixed no-evidence
    /// answer without invoking the generation model. A provider failure
    /// yields a fixed plain-language answer with empty sources. On
    /// success, `sources` enumerates exactly the chunks passed to the
    /// model, in the same order.
    pub async fn synthesize_documents(
        &self,
        query: &str,
        chunks: &[RetrievedChunk],
        query_type: IntentLabel,
    ) -> Answer {
        if chunks.is_empty() {
            return Answer::unsourced(query_type, NO_EVIDENCE_TEXT);
        }

        let sources_text = Self::format_sources(chunks);
        let user_prompt = format!(
            "Question:\n{query}\n\n\
             Sources:\n{sources_text}\n\n\
             Task:\n\
             Answer the question using ONLY the sources. Provide 2-5 bullet points, \
             then a short \"Sources used\" list with citations.\n"
        );

        match self.model.complete(SYSTEM_PROMPT, &user_prompt).await {
            Ok(text) => {
                let sources = chunks
                    .iter()
                    .map(|retrieved| SourceRef {
                        file: retrieved.chunk.file_name.clone(),
                        page: Some(retrieved.chunk.page_number),
                        score: Some(retrieved.score),
                    })
                    .collect();
                Answer { query_type, text, sources }
            }
            Err(e) => {
                warn!(error = %e, "generation failed, returning fallback answer");
                Answer::unsourced(query_type, GENERATION_FAILURE_TEXT)
            }
        }
    }

    /// Render an analytics summary: a narrative lead-in followed by one
    /// bullet per row, truncated to the top [`ANALYTICS_TOP_N`] by count.
    ///
    /// Template-based — no model call, so survey numbers are reported
    /// exactly as stored.
    pub fn render_analytics(&self, rows: &[AnalyticsRow]) -> String {
        if rows.is_empty() {
            return NO_SURVEY_DATA_TEXT.to_string();
        }

        let bullets = rows
            .iter()
            .take(ANALYTICS_TOP_N)
            .map(|row| format!("- {}: {} responses", row.label, row.responses))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Based on the EBA RAQ survey, banks' profitability expectations \
             are primarily driven by the following factors:\n{bullets}"
        )
    }
}
