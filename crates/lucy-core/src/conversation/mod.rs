//! Conversation lifecycle orchestration for Lucy.
//!
//! This module hosts the `ConversationService` controller plus the
//! canonical greeting, fallback reply, and message ceiling constants.

pub mod service;

pub use service::{
    suggestions_visible, BootstrapState, ConversationService, Turn, FALLBACK_REPLY, GREETING,
    MAX_MESSAGES,
};
