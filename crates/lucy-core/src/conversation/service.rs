//! Conversation controller orchestrating the widget message lifecycle.
//!
//! ConversationService coordinates between the TranscriptStore and the
//! CompletionProvider to manage the full conversation lifecycle: bootstrap
//! greeting, user turns, greeting-only submissions, and guarded resets.

use lucy_types::error::{ConversationError, StoreError};
use lucy_types::message::{Message, Sender};
use tracing::{info, warn};

use crate::completion::provider::CompletionProvider;
use crate::transcript::store::TranscriptStore;

/// The assistant message that opens every fresh conversation.
pub const GREETING: &str = "Hey! I am your assistant Lucy. How can I help you today?";

/// Reply substituted whenever the completion provider fails, for any reason.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't generate a response at this time. Please try again!";

/// Total message ceiling. Enforced on reset only: a transcript at or above
/// this count refuses to clear, while submission keeps growing it. The
/// widget client stops offering input at the ceiling; the server never
/// rejects a turn for length.
pub const MAX_MESSAGES: u64 = 10;

/// A completed user turn: the user message and the assistant reply, both
/// exactly as persisted.
#[derive(Debug, Clone)]
pub struct Turn {
    pub user: Message,
    pub assistant: Message,
}

/// Transcript snapshot returned by bootstrap, with the suggestion chips
/// visibility derived from its shape.
#[derive(Debug, Clone)]
pub struct BootstrapState {
    pub messages: Vec<Message>,
    pub suggestions_visible: bool,
}

/// Whether the prebuilt suggestion chips should be shown for a transcript.
///
/// Visible exactly when the transcript is a single assistant message whose
/// content is the canonical greeting. A pure function of transcript shape;
/// no flag is ever stored.
pub fn suggestions_visible(messages: &[Message]) -> bool {
    match messages {
        [only] => only.sender == Sender::Assistant && only.content == GREETING,
        _ => false,
    }
}

/// Orchestrates the conversation lifecycle over the transcript store and
/// the completion provider.
///
/// Generic over `TranscriptStore` and `CompletionProvider` to maintain
/// clean architecture (lucy-core never depends on lucy-infra).
pub struct ConversationService<S: TranscriptStore, P: CompletionProvider> {
    store: S,
    provider: P,
}

impl<S: TranscriptStore, P: CompletionProvider> ConversationService<S, P> {
    /// Create a new conversation service with the given store and provider.
    pub fn new(store: S, provider: P) -> Self {
        Self { store, provider }
    }

    /// Access the transcript store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the completion provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // --- Transcript access ---

    /// The full transcript in conversation order.
    pub async fn transcript(&self) -> Result<Vec<Message>, StoreError> {
        self.store.list_all().await
    }

    // --- Lifecycle ---

    /// Prepare the conversation for presentation.
    ///
    /// On an empty transcript, appends the canonical greeting as a single
    /// assistant message. Otherwise returns the transcript as-is. Suggestion
    /// visibility is recomputed from the resulting shape on every call.
    pub async fn bootstrap(&self) -> Result<BootstrapState, ConversationError> {
        let messages = self.store.list_all().await.map_err(ConversationError::from)?;
        if messages.is_empty() {
            let greeting = self.store.append(GREETING, Sender::Assistant).await?;
            info!("conversation bootstrapped with greeting");
            return Ok(BootstrapState {
                messages: vec![greeting],
                suggestions_visible: true,
            });
        }

        let visible = suggestions_visible(&messages);
        Ok(BootstrapState {
            messages,
            suggestions_visible: visible,
        })
    }

    /// Submit one user turn: persist the user message, obtain a reply,
    /// persist the assistant message, and return both records.
    ///
    /// The ceiling is NOT checked here; submission always grows the
    /// transcript. A provider failure never fails the turn: the fallback
    /// reply is substituted and the reason is logged. A store failure
    /// after the user append leaves the user message in place and surfaces
    /// as a turn-level error.
    pub async fn submit_turn(&self, content: &str) -> Result<Turn, ConversationError> {
        if content.trim().is_empty() {
            return Err(ConversationError::EmptyTurn);
        }

        let user = self.store.append(content, Sender::User).await?;

        let reply = match self.provider.complete(content).await {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "completion failed, substituting fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        let assistant = self.store.append(&reply, Sender::Assistant).await?;
        Ok(Turn { user, assistant })
    }

    /// Persist a greeting as a single assistant record, with no completion
    /// call. Used when the client re-greets after a reset.
    pub async fn submit_greeting(&self, content: &str) -> Result<Message, ConversationError> {
        if content.trim().is_empty() {
            return Err(ConversationError::EmptyTurn);
        }

        let message = self.store.append(content, Sender::Assistant).await?;
        Ok(message)
    }

    /// Clear the transcript, unless it has reached the message ceiling.
    ///
    /// At or above `MAX_MESSAGES` the reset is refused with `LimitReached`
    /// and the transcript is left untouched. Below the ceiling the clear is
    /// idempotent: resetting an empty conversation succeeds.
    pub async fn reset(&self) -> Result<(), ConversationError> {
        let count = self.store.count().await?;
        if count >= MAX_MESSAGES {
            warn!(count, "reset refused at message ceiling");
            return Err(ConversationError::LimitReached);
        }

        self.store.clear().await?;
        info!("conversation cleared");
        Ok(())
    }

    // --- Stateless completion ---

    /// One-shot completion that bypasses persistence.
    ///
    /// Provider failures are absorbed here the same way a turn absorbs
    /// them, so the caller always receives reply text.
    pub async fn direct_completion(&self, message: &str) -> String {
        match self.provider.complete(message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "completion failed, substituting fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
