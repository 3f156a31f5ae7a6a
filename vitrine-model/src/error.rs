use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// The carousel was handed an empty image list. Every index and
    /// modulo operation downstream assumes at least one entry, so the
    /// gallery refuses to exist without one.
    EmptyGallery,
    InvalidImageRef(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyGallery => {
                write!(f, "empty carousel not permitted")
            }
            ModelError::InvalidImageRef(msg) => {
                write!(f, "invalid image reference: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
