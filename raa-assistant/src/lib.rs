//! Query classification, answer synthesis, and hybrid composition.
//!
//! The decision core of the Regulatory Analytics Assistant:
//!
//! - [`IntentClassifier`] — routes a raw query to analytics, document
//!   retrieval, or both
//! - [`AnswerSynthesizer`] — turns retrieved chunks or survey rows into a
//!   grounded, citable answer
//! - [`Assistant`] — the facade transport layers call: classify, run the
//!   branches, compose one [`raa_core::Answer`]

pub mod classifier;
pub mod composer;
pub mod synthesizer;

pub use classifier::IntentClassifier;
pub use composer::{Assistant, AssistantBuilder};
pub use synthesizer::AnswerSynthesizer;
