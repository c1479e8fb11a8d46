//! Core types for the Regulatory Analytics Assistant.
//!
//! This crate is the shared kernel the other `raa-*` crates build on:
//!
//! - [`Error`] / [`Result`] — the error taxonomy every seam uses
//! - [`IntentLabel`], [`Answer`], [`SourceRef`] — the boundary data model
//! - [`ChatModel`] — the text-generation seam implemented by `raa-model`

mod answer;
mod chat;
mod error;

pub use answer::{Answer, IntentLabel, SourceRef};
pub use chat::ChatModel;
pub use error::{Error, Result};
