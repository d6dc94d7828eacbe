//! Error types shared by the calculator, carousel and deck configuration

use thiserror::Error;

/// Errors raised by deck operations
#[derive(Debug, Error)]
pub enum DeckError {
    /// A carousel needs at least one screen
    #[error("carousel requires at least one screen")]
    EmptyScreens,

    /// Caller asked for a screen that does not exist
    #[error("screen index {index} out of range for {len} screens")]
    ScreenOutOfRange { index: usize, len: usize },

    /// Auto-advance needs a tokio runtime to schedule its timer
    #[error("no tokio runtime available to schedule the carousel timer")]
    NoRuntime,

    #[error("invalid slider range: {0}")]
    InvalidSlider(String),

    /// A revenue assumption is negative or not finite
    #[error("invalid assumption {name}: {value}")]
    InvalidAssumption { name: &'static str, value: f64 },

    #[error("invalid deck config: {0}")]
    InvalidConfig(String),

    /// Display text that does not contain a number
    #[error("cannot parse a number from {0:?}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failures reported by an analytics sink. The tracker swallows these.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics collector unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write analytics event: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode analytics event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience result type for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;
