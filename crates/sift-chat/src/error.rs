//! Error types for the conversational core.

use sift_core::error::SiftError;

/// Errors from the chat engine.
///
/// Pipeline failures (LLM, SQL) are deliberately NOT here: the orchestrator
/// resolves those to text replies per the error-handling design. These are
/// request-level rejections only.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session store error: {0}")]
    SessionStore(String),
}

impl From<ChatError> for SiftError {
    fn from(err: ChatError) -> Self {
        SiftError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            ChatError::SessionStore("lock poisoned".to_string()).to_string(),
            "session store error: lock poisoned"
        );
    }

    #[test]
    fn test_conversion_to_sift_error() {
        let err: SiftError = ChatError::EmptyMessage.into();
        assert!(matches!(err, SiftError::Chat(_)));
    }
}
