//! Shared domain types for Lucy.
//!
//! This crate contains the core domain types used across the Lucy support
//! widget backend: Message, Sender, and the error types for the transcript
//! store, the conversation controller, and the completion provider.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod completion;
pub mod error;
pub mod message;
