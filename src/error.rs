//! Error types for the chromakit library

use thiserror::Error;

/// Result type alias for chromakit operations
pub type Result<T> = std::result::Result<T, ChromaError>;

/// Error types for color toolkit operations
///
/// Malformed hex strings are not represented here: hex parsing returns
/// `Option` and callers handle the `None` case directly.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Clustering was invoked on an empty sample sequence
    #[error("Cannot cluster an empty sample sequence")]
    EmptySamples,

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl ChromaError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ChromaError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            ChromaError::EmptySamples => {
                "The image produced no usable pixels. Please try a different image.".to_string()
            }
            ChromaError::InvalidParameter { .. } => {
                "Invalid settings. Please check the extraction parameters.".to_string()
            }
        }
    }
}
