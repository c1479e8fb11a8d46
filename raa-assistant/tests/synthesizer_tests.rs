//! Tests for answer synthesis: short-circuits, fallbacks, source fidelity.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use raa_analytics::AnalyticsRow;
use raa_assistant::AnswerSynthesizer;
use raa_core::{ChatModel, Error, IntentLabel, Result};
use raa_rag::{Chunk, RetrievedChunk};

/// A chat model double that counts calls, records the last prompt, and
/// returns a canned result.
struct ScriptedChatModel {
    calls: AtomicUsize,
    last_prompt: std::sync::Mutex<Option<String>>,
    fail: bool,
}

impl ScriptedChatModel {
    fn succeeding() -> Self {
        Self { calls: AtomicUsize::new(0), last_prompt: std::sync::Mutex::new(None), fail: false }
    }

    fn failing() -> Self {
        Self { calls: AtomicUsize::new(0), last_prompt: std::sync::Mutex::new(None), fail: true }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(user.to_string());
        if self.fail {
            Err(Error::external("openai-chat", "rate limited"))
        } else {
            Ok("grounded answer".to_string())
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn retrieved(file: &str, page: u32, ordinal: u32, score: f32) -> RetrievedChunk {
    RetrievedChunk {
        chunk: Chunk {
            file_name: file.to_string(),
            page_number: page,
            ordinal,
            content: format!("content of {file} p{page}#{ordinal}"),
        },
        score,
    }
}

#[tokio::test]
async fn zero_chunks_short_circuits_without_calling_the_model() {
    let model = Arc::new(ScriptedChatModel::succeeding());
    let synthesizer = AnswerSynthesizer::new(model.clone());

    let answer = synthesizer.synthesize_documents("any question", &[], IntentLabel::Document).await;

    assert_eq!(model.call_count(), 0);
    assert!(answer.text.contains("No relevant information"));
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn sources_enumerate_exactly_the_chunks_sent_in_order() {
    let model = Arc::new(ScriptedChatModel::succeeding());
    let synthesizer = AnswerSynthesizer::new(model.clone());

    let chunks = vec![
        retrieved("risk_report.pdf", 55, 0, 0.91),
        retrieved("risk_report.pdf", 63, 2, 0.84),
        retrieved("guidelines.pdf", 7, 1, 0.80),
    ];

    let answer =
        synthesizer.synthesize_documents("operational risk drivers", &chunks, IntentLabel::Document).await;

    assert_eq!(model.call_count(), 1);
    assert_eq!(answer.text, "grounded answer");
    assert_eq!(answer.sources.len(), 3);
    assert_eq!(answer.sources[0].file, "risk_report.pdf");
    assert_eq!(answer.sources[0].page, Some(55));
    assert_eq!(answer.sources[1].page, Some(63));
    assert_eq!(answer.sources[2].file, "guidelines.pdf");
    assert_eq!(answer.sources[2].score, Some(0.80));
}

#[tokio::test]
async fn evidence_blocks_are_indexed_and_attributed_in_rank_order() {
    let model = Arc::new(ScriptedChatModel::succeeding());
    let synthesizer = AnswerSynthesizer::new(model.clone());

    let chunks = vec![retrieved("a.pdf", 1, 0, 0.9), retrieved("b.pdf", 2, 0, 0.8)];
    synthesizer.synthesize_documents("question", &chunks, IntentLabel::Document).await;

    let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
    let first = prompt.find("[1] file=a.pdf page=1 score=0.900").unwrap();
    let second = prompt.find("[2] file=b.pdf page=2 score=0.800").unwrap();
    assert!(first < second);
    assert!(prompt.contains("content of a.pdf p1#0"));
}

#[tokio::test]
async fn generation_failure_becomes_fixed_fallback_with_empty_sources() {
    let model = Arc::new(ScriptedChatModel::failing());
    let synthesizer = AnswerSynthesizer::new(model.clone());

    let chunks = vec![retrieved("a.pdf", 1, 0, 0.9)];
    let answer = synthesizer.synthesize_documents("question", &chunks, IntentLabel::Document).await;

    assert_eq!(model.call_count(), 1);
    assert!(answer.text.contains("could not be generated"));
    assert!(!answer.text.contains("rate limited"));
    assert!(answer.sources.is_empty());
}

#[test]
fn analytics_rendering_truncates_to_top_ten() {
    let synthesizer = AnswerSynthesizer::new(Arc::new(ScriptedChatModel::succeeding()));

    let rows: Vec<AnalyticsRow> = (0..12)
        .map(|i| AnalyticsRow { label: format!("answer {i}"), responses: 100 - i })
        .collect();

    let text = synthesizer.render_analytics(&rows);
    assert_eq!(text.matches("responses").count(), 10);
    assert!(text.contains("- answer 0: 100 responses"));
    assert!(!text.contains("answer 10"));
}

#[test]
fn empty_analytics_rows_render_the_no_data_sentence() {
    let synthesizer = AnswerSynthesizer::new(Arc::new(ScriptedChatModel::succeeding()));
    let text = synthesizer.render_analytics(&[]);
    assert!(text.contains("No matching survey analytics"));
}
