//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("User id is missing or empty")]
    MissingUserId,

    #[error("Activity ends before it starts: start {start} > end {end}")]
    TimestampsOutOfOrder { start: u64, end: u64 },

    #[error("Party size out of order: current {current} > max {max}")]
    PartySizeOutOfOrder { current: u32, max: u32 },

    #[error("Too many buttons: {actual} given, max {max}")]
    TooManyButtons { max: usize, actual: usize },

    #[error("Button {index} has an empty {field}")]
    EmptyButtonField { index: usize, field: String },

    #[error("Conflicting values for asset {slot}")]
    ConflictingAsset { slot: &'static str },

    // =========================================================================
    // Collection Errors
    // =========================================================================
    #[error("Duplicate user id: {0}")]
    DuplicateUserId(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl DomainError {
    /// Get an error code string for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingUserId => "MISSING_USER_ID",
            Self::TimestampsOutOfOrder { .. } => "TIMESTAMPS_OUT_OF_ORDER",
            Self::PartySizeOutOfOrder { .. } => "PARTY_SIZE_OUT_OF_ORDER",
            Self::TooManyButtons { .. } => "TOO_MANY_BUTTONS",
            Self::EmptyButtonField { .. } => "EMPTY_BUTTON_FIELD",
            Self::ConflictingAsset { .. } => "CONFLICTING_ASSET",
            Self::DuplicateUserId(_) => "DUPLICATE_USER_ID",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
        }
    }

    /// Check if this is an invariant violation on a single record or collection
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::MalformedInput(_))
    }

    /// Check if the input could not be read as any known shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
