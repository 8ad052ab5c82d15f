//! Error types for glyph rendering

use thiserror::Error;

/// Error type for glyph rendering operations
#[derive(Debug, Error)]
pub enum Error {
    /// Color identifier is neither a known name nor a hex code
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Alphabet name does not match any supported alphabet
    #[error("unknown alphabet: {0}")]
    UnknownAlphabet(String),

    /// Pixel buffer of the requested size cannot be created
    #[error("cannot allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    /// Export was requested before anything was drawn
    #[error("nothing has been rendered yet")]
    EmptyCanvas,

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Png(String),

    /// Render parameters could not be parsed
    #[error("invalid render parameters: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for glyph rendering operations
pub type Result<T> = std::result::Result<T, Error>;
