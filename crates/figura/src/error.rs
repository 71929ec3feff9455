//! Error types for Figura operations

use thiserror::Error;

/// Main error type for Figura operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FiguraError {
    /// An aggregation input lacked the required measurement capability
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected capability or type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// A shape was constructed with a dimension outside its domain
    #[error("invalid dimension for {shape}: {value}")]
    InvalidDimension {
        /// The shape being constructed
        shape: &'static str,
        /// The offending dimension
        value: f64,
    },
}

/// Result type alias for Figura operations
pub type Result<T> = std::result::Result<T, FiguraError>;
