//! Authentication and validation error types.

use thiserror::Error;

use crate::backend::BackendError;
use crate::error::{
    MSG_BACKEND_UNAVAILABLE, MSG_NETWORK, MSG_SESSION_EXPIRED, user_message_for,
};

/// Coarse outcome classification of a failed token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The token was examined and rejected; it has been discarded.
    Invalid,
    /// The remote authority is reachable but erroring; the token is retained.
    BackendUnavailable,
    /// The remote authority could not be reached; the token is retained.
    Network,
}

/// The outcome of a failed token check, as exposed to route guards.
///
/// `message` is pre-sanitized and never carries submitted credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    /// The token was rejected outright.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            kind: ValidationErrorKind::Invalid,
            message: MSG_SESSION_EXPIRED.to_owned(),
        }
    }

    /// Classify a backend failure raised during validation.
    ///
    /// Structured variants decide directly; opaque rejection text falls back
    /// to keyword matching. Anything ambiguous classifies as `Invalid` -
    /// discarding stale state is safer than granting access on a guess.
    #[must_use]
    pub fn from_backend(error: &BackendError) -> Self {
        let kind = match error {
            BackendError::Http(_) => ValidationErrorKind::Network,
            BackendError::Unavailable(_) | BackendError::RateLimited(_) => {
                ValidationErrorKind::BackendUnavailable
            }
            BackendError::Rejected(text) => classify_text(text),
            BackendError::InvalidSession
            | BackendError::InvalidCredentials
            | BackendError::Unauthorized
            | BackendError::NotFound(_)
            | BackendError::Parse(_) => ValidationErrorKind::Invalid,
        };

        let message = match kind {
            ValidationErrorKind::Invalid => MSG_SESSION_EXPIRED.to_owned(),
            ValidationErrorKind::BackendUnavailable => MSG_BACKEND_UNAVAILABLE.to_owned(),
            ValidationErrorKind::Network => MSG_NETWORK.to_owned(),
        };

        Self { kind, message }
    }

    /// Whether a retry without re-login can succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        !matches!(self.kind, ValidationErrorKind::Invalid)
    }
}

/// Keyword classification for failure text whose structure we do not control.
fn classify_text(text: &str) -> ValidationErrorKind {
    let lowered = text.to_lowercase();

    if ["backend", "service", "unavailable"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        return ValidationErrorKind::BackendUnavailable;
    }
    if ["network", "connection", "timed out"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        return ValidationErrorKind::Network;
    }

    ValidationErrorKind::Invalid
}

/// Errors surfaced by login and logout.
///
/// Messages are already user-safe; raw backend errors never escape here.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed; the message has been through the classifier.
    #[error("{0}")]
    Login(String),

    /// No remote authority is attached yet, so the operation cannot run.
    #[error("Backend service is not available. Please try again in a moment.")]
    AuthorityNotReady,
}

impl AuthError {
    pub(crate) fn login_failure(error: &BackendError) -> Self {
        Self::Login(user_message_for(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_INVALID_CREDENTIALS;

    #[test]
    fn test_service_errors_retain_token() {
        let err = ValidationError::from_backend(&BackendError::Unavailable(502));
        assert_eq!(err.kind, ValidationErrorKind::BackendUnavailable);
        assert!(err.is_transient());
    }

    #[test]
    fn test_rejection_is_terminal() {
        let err = ValidationError::from_backend(&BackendError::InvalidSession);
        assert_eq!(err.kind, ValidationErrorKind::Invalid);
        assert!(!err.is_transient());
    }

    #[test]
    fn test_opaque_text_classification() {
        let network = ValidationError::from_backend(&BackendError::Rejected(
            "network unreachable".to_owned(),
        ));
        assert_eq!(network.kind, ValidationErrorKind::Network);

        let degraded = ValidationError::from_backend(&BackendError::Rejected(
            "service restarting".to_owned(),
        ));
        assert_eq!(degraded.kind, ValidationErrorKind::BackendUnavailable);

        // Ambiguous text fails safe toward discarding the token.
        let ambiguous =
            ValidationError::from_backend(&BackendError::Rejected("weird state".to_owned()));
        assert_eq!(ambiguous.kind, ValidationErrorKind::Invalid);
    }

    #[test]
    fn test_login_failure_message_is_sanitized() {
        let err = AuthError::login_failure(&BackendError::InvalidCredentials);
        assert_eq!(err.to_string(), MSG_INVALID_CREDENTIALS);
    }
}
