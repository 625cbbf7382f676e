use crate::Violations;

/// Error type for screening pipeline and backend operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Answers failed local validation; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Transport { status: u16, message: String },

    /// The backend answered 2xx but reported failure or sent an unusable body.
    #[error("Request rejected: {0}")]
    Application(String),

    /// Network, timeout or (de)serialization failure.
    #[error("I/O error: {0}")]
    Io(#[from] anyhow::Error),
}

impl ApiError {
    /// Create an I/O error from any error type.
    pub fn io(err: impl Into<anyhow::Error>) -> Self {
        Self::Io(err.into())
    }

    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status, for transport errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The local violations, for validation errors.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation(violations) => Some(violations),
            _ => None,
        }
    }

    /// Whether showing a retry affordance makes sense.
    ///
    /// Validation and application errors repeat identically on retry;
    /// I/O failures and 5xx statuses may not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Transport { status, .. } => *status >= 500,
            Self::Validation(_) | Self::Application(_) => false,
        }
    }
}
