//! Google Gemini completion provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`CompletionProvider`](lucy_core::completion::provider::CompletionProvider)
//! trait for the Gemini `generateContent` API.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
