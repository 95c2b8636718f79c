//! User-facing copy for fetch failures.
//!
//! Single source of truth: every surface that shows a failure to the user
//! goes through [`user_message`], so the copy cannot diverge between call
//! sites. Pure and deterministic over the whole failure taxonomy.

use crate::outcome::FetchError;

/// Stable user-facing text plus whether offering a retry makes sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub text: String,
    pub can_retry: bool,
}

impl UserMessage {
    fn retryable(text: &str) -> Self {
        Self {
            text: text.to_string(),
            can_retry: true,
        }
    }

    /// Copy for a failure that escaped classification entirely. Not a
    /// designed path; reachable only through task-join failures in the
    /// service layer.
    pub fn fallback() -> Self {
        Self::retryable("An unexpected error occurred")
    }
}

/// Maps a final failure to its user copy.
///
/// `EmptyData` yields `None`: callers surface it as a successful empty list,
/// not as an error.
pub fn user_message(error: &FetchError) -> Option<UserMessage> {
    let message = match error {
        FetchError::Network { message, .. } => network_message(message),
        FetchError::Parse { .. } => {
            UserMessage::retryable("We're having trouble processing the data. Please try again.")
        }
        FetchError::Http { code, .. } => http_message(*code),
        FetchError::EmptyData { .. } => return None,
        FetchError::Unknown { .. } => {
            UserMessage::retryable("Something unexpected happened. Please try again.")
        }
    };
    Some(message)
}

// Substring precedence over the classifier's diagnostic text: the
// internet/connection check comes before the timeout check, so the gate's
// "No internet connection. …" copy wins even when a description mentions a
// timeout.
fn network_message(diagnostic: &str) -> UserMessage {
    if diagnostic.contains("internet") || diagnostic.contains("connection") {
        UserMessage::retryable("Please check your internet connection and try again")
    } else if diagnostic.contains("timeout") || diagnostic.contains("timed out") {
        UserMessage::retryable("The request is taking too long. Please try again")
    } else {
        UserMessage::retryable("Network error occurred. Please try again")
    }
}

fn http_message(code: u32) -> UserMessage {
    match code {
        // The one failure the user cannot fix by retrying.
        401 => UserMessage {
            text: "Authentication required. Please log in again".to_string(),
            can_retry: false,
        },
        403 => UserMessage::retryable("You don't have permission to access this data"),
        404 => UserMessage::retryable("The requested data could not be found"),
        500 | 502 | 503 | 504 => UserMessage::retryable("Server error. Please try again later"),
        other => UserMessage {
            text: format!("Server returned error {}. Please try again", other),
            can_retry: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(message: &str) -> FetchError {
        FetchError::Network {
            message: message.to_string(),
            source: None,
        }
    }

    fn http(code: u32) -> FetchError {
        FetchError::Http {
            code,
            message: format!("HTTP {}: error", code),
            source: None,
        }
    }

    #[test]
    fn no_internet_maps_to_check_connection_copy() {
        let msg = user_message(&network("No internet connection available")).unwrap();
        assert_eq!(msg.text, "Please check your internet connection and try again");
        assert!(msg.can_retry);
    }

    #[test]
    fn gate_message_maps_to_check_connection_copy() {
        let msg = user_message(&network("No internet connection. airplane mode")).unwrap();
        assert_eq!(msg.text, "Please check your internet connection and try again");
        assert!(msg.can_retry);
    }

    #[test]
    fn timeout_maps_to_taking_too_long_copy() {
        let msg = user_message(&network("Connection timed out")).unwrap();
        assert_eq!(msg.text, "The request is taking too long. Please try again");
        assert!(msg.can_retry);
    }

    #[test]
    fn other_network_failures_map_to_generic_copy() {
        let msg = user_message(&network("Network error occurred")).unwrap();
        assert_eq!(msg.text, "Network error occurred. Please try again");
        assert!(msg.can_retry);
    }

    #[test]
    fn parse_maps_to_trouble_processing_copy() {
        let err = FetchError::Parse {
            message: "Failed to parse server response".to_string(),
            source: None,
        };
        let msg = user_message(&err).unwrap();
        assert_eq!(msg.text, "We're having trouble processing the data. Please try again.");
        assert!(msg.can_retry);
    }

    #[test]
    fn http_401_is_the_only_non_retryable_code() {
        let msg = user_message(&http(401)).unwrap();
        assert_eq!(msg.text, "Authentication required. Please log in again");
        assert!(!msg.can_retry);
    }

    #[test]
    fn http_403_and_404_have_specific_copy() {
        let forbidden = user_message(&http(403)).unwrap();
        assert_eq!(forbidden.text, "You don't have permission to access this data");
        assert!(forbidden.can_retry);

        let missing = user_message(&http(404)).unwrap();
        assert_eq!(missing.text, "The requested data could not be found");
        assert!(missing.can_retry);
    }

    #[test]
    fn server_error_codes_share_one_copy() {
        for code in [500, 502, 503, 504] {
            let msg = user_message(&http(code)).unwrap();
            assert_eq!(msg.text, "Server error. Please try again later");
            assert!(msg.can_retry, "code {} should be retryable", code);
        }
    }

    #[test]
    fn unlisted_http_code_embeds_the_exact_code() {
        let msg = user_message(&http(418)).unwrap();
        assert_eq!(msg.text, "Server returned error 418. Please try again");
        assert!(msg.can_retry);
    }

    #[test]
    fn unknown_maps_to_something_unexpected_copy() {
        let err = FetchError::Unknown {
            message: "An unexpected error occurred: boom".to_string(),
            source: None,
        };
        let msg = user_message(&err).unwrap();
        assert_eq!(msg.text, "Something unexpected happened. Please try again.");
        assert!(msg.can_retry);
    }

    #[test]
    fn empty_data_emits_no_message() {
        let err = FetchError::EmptyData {
            message: "Response contained no users".to_string(),
        };
        assert!(user_message(&err).is_none());
    }

    #[test]
    fn fallback_is_retryable() {
        let msg = UserMessage::fallback();
        assert_eq!(msg.text, "An unexpected error occurred");
        assert!(msg.can_retry);
    }
}
