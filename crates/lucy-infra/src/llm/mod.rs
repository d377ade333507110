//! Completion provider implementations.
//!
//! Contains concrete implementations of the [`CompletionProvider`] trait
//! defined in `lucy-core`, currently Google Gemini.

pub mod gemini;
