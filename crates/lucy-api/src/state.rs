//! Application state wiring the conversation service together.
//!
//! The conversation service is generic over store/provider traits, but
//! AppState pins it to the concrete infra implementations.

use std::sync::Arc;

use lucy_core::conversation::service::ConversationService;
use lucy_infra::llm::gemini::GeminiProvider;
use lucy_infra::sqlite::pool::DatabasePool;
use lucy_infra::sqlite::transcript::SqliteTranscriptStore;
use secrecy::SecretString;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteConversationService = ConversationService<SqliteTranscriptStore, GeminiProvider>;

/// Shared application state holding the conversation service.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConcreteConversationService>,
}

impl AppState {
    /// Initialize the application state: connect to the DB (running
    /// migrations), wire the store and provider into the service.
    pub async fn init(database_url: &str, gemini_api_key: SecretString) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;

        let store = SqliteTranscriptStore::new(db_pool);
        let provider = GeminiProvider::new(gemini_api_key);
        let conversation = ConversationService::new(store, provider);

        Ok(Self {
            conversation: Arc::new(conversation),
        })
    }
}
