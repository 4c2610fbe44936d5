use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

/// Misuse by the embedding code.
///
/// Runtime conditions such as unknown paths, stale member ids, or missing
/// section anchors are recovered inside the engine and never surface here.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid navigation intent: {0}")]
    InvalidIntent(String),

    #[error("carousel index {index} out of range for {len} entries")]
    CarouselIndexOutOfRange { index: usize, len: usize },

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("host failure: {0}")]
    Host(String),
}
