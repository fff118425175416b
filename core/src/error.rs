use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Default number of characters of a failed response body shown to the user.
pub const ERROR_MAX_CHARS: usize = 50;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("rate limited")]
    Limited,

    #[error("action not permitted in current state")]
    NotPermitted,
}

/// Client-side validation failures.
///
/// The `Display` text is what gets shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email must be a Purdue address")]
    InvalidEmail,

    #[error("Password must be {min}+ characters")]
    PasswordLength { min: usize, max: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Only {length} numbers")]
    InvalidCode { length: usize },

    #[error("Invalid housing")]
    InvalidHousing,

    #[error("Invalid overall rating")]
    InvalidOverallRating,

    #[error("Invalid sub-rating")]
    InvalidSubRating,

    #[error("Invalid description")]
    InvalidDescription { min: usize, max: usize },

    #[error("unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

/// Failures talking to the search index or the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("client error: {0}")]
    Client(String),
}

impl TransportError {
    /// Short message suitable for an error banner, at most `max_chars` characters.
    pub fn user_message(&self, max_chars: usize) -> String {
        let text = match self {
            TransportError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            TransportError::Status { .. } => self.to_string(),
            TransportError::Client(message) => message.clone(),
        };

        truncate_chars(&text, max_chars)
    }
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
