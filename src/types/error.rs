use thiserror::Error;

/// rhythmview error types
#[derive(Error, Debug)]
pub enum RhythmError {
    /// Payload has no review rhythm data (absent, null or empty)
    #[error("review rhythm data missing")]
    MissingData,

    /// Upstream reported that the review rhythm component failed
    #[error("review rhythm unavailable: {0}")]
    Unavailable(String),

    /// Day key that is not an integer in 1..=7
    #[error("invalid day key: {0:?}")]
    InvalidDay(String),

    /// Hour key that is not an integer in 0..=23
    #[error("invalid hour key: {0:?}")]
    InvalidHour(String),

    /// Failed to parse JSON payload
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile API request failed
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl RhythmError {
    /// Whether the error means "nothing to draw" rather than a failure.
    /// The panel shows its fallback line for these instead of an error screen.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::MissingData | Self::Unavailable(_))
    }
}

impl From<serde_json::Error> for RhythmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for rhythmview
pub type Result<T> = std::result::Result<T, RhythmError>;
