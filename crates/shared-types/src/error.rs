use std::fmt;

/// Errors surfaced by the admin REST backend, in the three shapes the UI
/// has to distinguish.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response (network failure,
    /// malformed body).
    Transport(String),
    /// The backend answered with `success: false` and (usually) a message.
    Backend(String),
    /// HTTP 401 — handled globally by the session interceptor.
    Unauthorized,
}

impl ApiError {
    /// User-facing message, falling back to `fallback` when the error
    /// carries nothing useful. Preference order: backend message, then the
    /// fallback, then the raw transport text.
    pub fn or_fallback(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend(msg) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Backend(_) => fallback.to_string(),
            ApiError::Transport(msg) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Transport(_) => fallback.to_string(),
            ApiError::Unauthorized => "Session expired. Please log in again.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{msg}"),
            ApiError::Backend(msg) => write!(f, "{msg}"),
            ApiError::Unauthorized => write!(f, "Session expired. Please log in again."),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::Backend("Court name already exists".into());
        assert_eq!(err.or_fallback("Failed to save court"), "Court name already exists");
    }

    #[test]
    fn empty_backend_message_uses_fallback() {
        let err = ApiError::Backend("  ".into());
        assert_eq!(err.or_fallback("Failed to save court"), "Failed to save court");
    }

    #[test]
    fn transport_text_is_kept_when_present() {
        let err = ApiError::Transport("error sending request".into());
        assert_eq!(err.or_fallback("Failed to load firms"), "error sending request");
    }

    #[test]
    fn unauthorized_has_a_fixed_message() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Session expired. Please log in again."
        );
    }
}
