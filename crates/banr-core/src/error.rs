//! Error types for banr

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BanrError>;

/// Main error type for banr
///
/// The render pipeline itself is total: unknown fonts, unknown borders,
/// and unsupported characters all fall back silently. Failures only arise
/// at the I/O boundary around it.
#[derive(Debug, Error)]
pub enum BanrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}
