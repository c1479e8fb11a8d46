//! The assistant facade: classify, branch, compose.

use std::sync::Arc;

use tracing::{info, warn};

use raa_analytics::AnalyticsHandler;
use raa_core::{Answer, ChatModel, Error, IntentLabel, Result};
use raa_rag::{EmbeddingProvider, Retriever, VectorStore};

use crate::classifier::IntentClassifier;
use crate::synthesizer::AnswerSynthesizer;

/// Substituted for the document section when retrieval fails inside a
/// hybrid answer.
const DOCUMENT_BRANCH_FAILURE_TEXT: &str =
    "Regulatory document retrieval is temporarily unavailable. Please try again in a moment.";

/// Answers natural-language questions about banking regulation.
///
/// The single operation exposed to transport layers is
/// [`answer`](Assistant::answer). Each query is classified, routed to the
/// analytics branch, the document branch, or both, and the branch outputs
/// are composed into one [`Answer`] with a combined source list.
///
/// All collaborators are injected at construction — there is no global
/// state, so tests substitute fakes for every external dependency.
///
/// # Example
///
/// ```rust,ignore
/// use raa_assistant::Assistant;
///
/// let assistant = Assistant::builder()
///     .embedder(embedder)
///     .vector_store(store)
///     .survey_store(survey)
///     .chat_model(model)
///     .build()?;
///
/// let answer = assistant.answer("profitability of banks").await?;
/// ```
pub struct Assistant {
    classifier: IntentClassifier,
    analytics: AnalyticsHandler,
    retriever: Retriever,
    synthesizer: AnswerSynthesizer,
}

impl Assistant {
    /// Create a new [`AssistantBuilder`].
    pub fn builder() -> AssistantBuilder {
        AssistantBuilder::default()
    }

    /// Answer a query.
    ///
    /// "No data found" is a valid successful result with explanatory text
    /// and empty or partial sources — never an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] or
    /// [`Error::ExternalService`] only when a document-only query cannot
    /// reach the vector store or the embedding provider: the single
    /// branch has nothing to degrade to. Hybrid queries isolate branch
    /// failures instead, and analytics absorbs its own.
    pub async fn answer(&self, query: &str) -> Result<Answer> {
        let query_type = self.classifier.classify(query);
        info!(query_type = query_type.as_str(), "classified query");

        match query_type {
            IntentLabel::Analytics => Ok(self.answer_analytics(query).await),
            IntentLabel::Document => self.answer_document(query).await,
            IntentLabel::Hybrid => Ok(self.answer_hybrid(query).await),
        }
    }

    /// Analytics branch: aggregate survey rows and render the template.
    /// Sources stay empty — no document provenance applies.
    async fn answer_analytics(&self, query: &str) -> Answer {
        let rows = self.analytics.rows_for(query).await;
        let text = self.synthesizer.render_analytics(&rows);
        Answer::unsourced(IntentLabel::Analytics, text)
    }

    /// Document branch: embed, retrieve, synthesize with citations.
    async fn answer_document(&self, query: &str) -> Result<Answer> {
        let chunks = self.retriever.retrieve(query).await?;
        Ok(self.synthesizer.synthesize_documents(query, &chunks, IntentLabel::Document).await)
    }

    /// Hybrid: run both branches concurrently with no shared mutable
    /// state, join at a barrier, then concatenate under labeled headings.
    /// A failed branch contributes a placeholder section instead of
    /// aborting the other; sources come from the document branch only.
    async fn answer_hybrid(&self, query: &str) -> Answer {
        let analytics_branch = async {
            let rows = self.analytics.rows_for(query).await;
            self.synthesizer.render_analytics(&rows)
        };

        let document_branch = async {
            match self.retriever.retrieve(query).await {
                Ok(chunks) => Ok(self
                    .synthesizer
                    .synthesize_documents(query, &chunks, IntentLabel::Hybrid)
                    .await),
                Err(e) => Err(e),
            }
        };

        let (analytics_text, document_result) = tokio::join!(analytics_branch, document_branch);

        let (document_text, sources) = match document_result {
            Ok(answer) => (answer.text, answer.sources),
            Err(e) => {
                warn!(error = %e, "document branch failed in hybrid answer");
                (DOCUMENT_BRANCH_FAILURE_TEXT.to_string(), Vec::new())
            }
        };

        let text = format!(
            "ANALYTICAL INSIGHTS (Survey-based):\n{analytics_text}\n\n\
             REGULATORY CONTEXT (EBA Documents):\n{document_text}"
        );

        Answer { query_type: IntentLabel::Hybrid, text, sources }
    }
}

/// Builder for constructing an [`Assistant`].
///
/// The classifier and retrieval depth are optional; every external
/// collaborator is required.
#[derive(Default)]
pub struct AssistantBuilder {
    classifier: Option<IntentClassifier>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    vector_store: Option<Arc<dyn VectorStore>>,
    survey_store: Option<Arc<dyn raa_analytics::SurveyStore>>,
    chat_model: Option<Arc<dyn ChatModel>>,
    top_k: Option<usize>,
}

impl AssistantBuilder {
    /// Override the default intent classifier.
    pub fn classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the embedding provider for query vectors.
    pub fn embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the vector store holding the document corpus.
    pub fn vector_store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.vector_store = Some(store);
        self
    }

    /// Set the structured survey store.
    pub fn survey_store(mut self, store: Arc<dyn raa_analytics::SurveyStore>) -> Self {
        self.survey_store = Some(store);
        self
    }

    /// Set the text-generation model.
    pub fn chat_model(mut self, model: Arc<dyn ChatModel>) -> Self {
        self.chat_model = Some(model);
        self
    }

    /// Override the number of chunks retrieved per query (default 5).
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Build the [`Assistant`], validating that all collaborators are set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any required collaborator is missing
    /// or `top_k` is zero.
    pub fn build(self) -> Result<Assistant> {
        let embedder =
            self.embedder.ok_or_else(|| Error::Config("embedder is required".to_string()))?;
        let vector_store = self
            .vector_store
            .ok_or_else(|| Error::Config("vector_store is required".to_string()))?;
        let survey_store = self
            .survey_store
            .ok_or_else(|| Error::Config("survey_store is required".to_string()))?;
        let chat_model =
            self.chat_model.ok_or_else(|| Error::Config("chat_model is required".to_string()))?;

        let top_k = self.top_k.unwrap_or(raa_rag::RagConfig::default().top_k);
        if top_k == 0 {
            return Err(Error::Config("top_k must be greater than zero".to_string()));
        }

        Ok(Assistant {
            classifier: self.classifier.unwrap_or_default(),
            analytics: AnalyticsHandler::new(survey_store),
            retriever: Retriever::new(embedder, vector_store, top_k),
            synthesizer: AnswerSynthesizer::new(chat_model),
        })
    }
}
