use thiserror::Error;

/// Errors from transcript store operations (used by trait definitions in
/// lucy-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from conversation controller operations.
///
/// A degraded completion provider is deliberately absent here: provider
/// failures are absorbed into the fallback reply inside the controller and
/// never surface as a turn failure.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("message content must not be empty")]
    EmptyTurn,

    #[error("limit reached")]
    LimitReached,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_limit_reached_display() {
        assert_eq!(ConversationError::LimitReached.to_string(), "limit reached");
    }

    #[test]
    fn test_store_error_wraps_transparently() {
        let err: ConversationError = StoreError::Connection.into();
        assert_eq!(err.to_string(), "database connection error");
    }
}
