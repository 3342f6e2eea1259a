use thiserror::Error;

pub type Result<T> = std::result::Result<T, EclatError>;

/// Errors surfaced by a mining run. All of them are raised before any
/// transformation of the input takes place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EclatError {
    /// Minimum support count is zero or negative.
    #[error("minimum support count must be positive, got {min_support_count}")]
    InvalidThreshold { min_support_count: i64 },

    /// Relative support outside (0, 1].
    #[error("support fraction must be in (0, 1], got {fraction}")]
    InvalidSupportFraction { fraction: f64 },

    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl EclatError {
    pub fn invalid_threshold(min_support_count: i64) -> Self {
        Self::InvalidThreshold { min_support_count }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
