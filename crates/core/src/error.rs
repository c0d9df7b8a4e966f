use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorTimeError>;

/// Errors raised while building a color-time configuration or answering a query.
#[derive(Error, Debug)]
pub enum ColorTimeError {
    /// The option set did not yield a single usable day-color pair.
    #[error("{0}")]
    Configuration(String),

    /// An internal precondition was broken by the caller, e.g. locating
    /// bounds in an empty anchor set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized date: {input:?}")]
    DateParse { input: String },

    #[error("Unrecognized color: {input:?}")]
    ColorParse { input: String },
}

impl ColorTimeError {
    pub(crate) fn no_anchors() -> Self {
        Self::Configuration("Need at least one valid day-color pair".to_string())
    }

    pub(crate) fn date_parse(input: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.into(),
        }
    }

    pub(crate) fn color_parse(input: impl Into<String>) -> Self {
        Self::ColorParse {
            input: input.into(),
        }
    }
}
