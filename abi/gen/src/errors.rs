//! Error types for the binding generator.

use abi_define::DefineError;
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse the ABI description
    #[error("Failed to parse ABI description: {0}")]
    Definition(#[from] DefineError),

    /// The requested output format is not registered
    #[error("Unknown output format '{format}'. Available formats: {available}")]
    UnknownFormat {
        /// The requested format identifier.
        format: String,
        /// Comma-separated list of registered identifiers.
        available: String,
    },

    /// Failed to read the ABI input
    #[error("Failed to read ABI from '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The contract name cannot be used as a class and file name.
    ///
    /// The name must be a valid TypeScript identifier (letters, digits, `_`,
    /// `$`, not starting with a digit).
    #[error("Invalid contract name '{name}': {reason}")]
    InvalidContractName {
        /// The rejected name.
        name: String,
        /// Explanation of why the name is invalid.
        reason: String,
    },
}
