//! User-facing error messages.
//!
//! Every failure that reaches the UI passes through here first: auth
//! failures, content/gallery/enquiry/contact mutations, all of it. The
//! classifier maps arbitrary failure text onto a small set of fixed English
//! messages so that raw backend diagnostics (and anything resembling a
//! credential) never reach the screen.
//!
//! Where the failure is a [`BackendError`] the mapping is structural - the
//! variant already says what went wrong. Message text matching remains as
//! the fallback for opaque errors whose origin we do not control.

use crate::backend::BackendError;

/// Fixed user-safe messages, one per failure category.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password. Please try again.";
pub const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
pub const MSG_NOT_PERMITTED: &str = "You do not have permission to perform this action.";
pub const MSG_AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub const MSG_BACKEND_UNAVAILABLE: &str =
    "Backend service is not available. Please try again in a moment.";
pub const MSG_NETWORK: &str = "Network error. Please check your connection and try again.";
pub const MSG_FEATURE_UNAVAILABLE: &str = "This feature is not available. Please contact support.";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

/// Longest raw message allowed through verbatim.
const MAX_PASSTHROUGH_LEN: usize = 200;

/// Substrings that mark a message as an internal aborted-call diagnostic.
/// Such messages are never shown verbatim.
const DIAGNOSTIC_MARKERS: &[&str] = &["trap", "reject"];

/// Keyword table in precedence order; first match wins.
const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (
        &["invalid username", "invalid password", "invalid credentials"],
        MSG_INVALID_CREDENTIALS,
    ),
    (
        &["session", "expired", "invalid token"],
        MSG_SESSION_EXPIRED,
    ),
    (
        &["unauthorized", "not authorized", "permission"],
        MSG_NOT_PERMITTED,
    ),
    (&["authentication", "login failed"], MSG_AUTH_FAILED),
    (
        &["backend", "service", "unavailable"],
        MSG_BACKEND_UNAVAILABLE,
    ),
    (&["network", "connection", "timed out"], MSG_NETWORK),
    (
        &["method", "function", "not found"],
        MSG_FEATURE_UNAVAILABLE,
    ),
];

/// Convert arbitrary failure text into exactly one user-safe message.
///
/// Matching is a case-insensitive substring test against the keyword table,
/// in precedence order. Unmatched messages under 200 characters that carry
/// no internal diagnostic markers pass through verbatim; everything else
/// collapses to the generic fallback.
#[must_use]
pub fn user_message(raw: &str) -> String {
    if raw.is_empty() {
        return MSG_UNEXPECTED.to_owned();
    }

    let lowered = raw.to_lowercase();

    for (keywords, message) in KEYWORD_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return (*message).to_owned();
        }
    }

    let clean = !DIAGNOSTIC_MARKERS.iter().any(|m| lowered.contains(m));
    if raw.len() < MAX_PASSTHROUGH_LEN && clean {
        return raw.to_owned();
    }

    MSG_UNEXPECTED.to_owned()
}

/// Convert a [`BackendError`] into a user-safe message.
///
/// Structured variants map directly; [`BackendError::Rejected`] carries
/// backend-authored text and goes through [`user_message`] like any other
/// opaque string.
#[must_use]
pub fn user_message_for(error: &BackendError) -> String {
    match error {
        BackendError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_owned(),
        BackendError::InvalidSession => MSG_SESSION_EXPIRED.to_owned(),
        BackendError::Unauthorized => MSG_NOT_PERMITTED.to_owned(),
        BackendError::Unavailable(_) | BackendError::RateLimited(_) => {
            MSG_BACKEND_UNAVAILABLE.to_owned()
        }
        BackendError::Http(_) => MSG_NETWORK.to_owned(),
        BackendError::NotFound(_) => MSG_FEATURE_UNAVAILABLE.to_owned(),
        BackendError::Rejected(text) => user_message(text),
        BackendError::Parse(_) => MSG_UNEXPECTED.to_owned(),
    }
}
