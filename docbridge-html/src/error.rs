//! Error types for document loading

use std::fmt;

/// Errors that can occur while loading a document for conversion
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The input could not be deserialized into a document
    ParseError(String),
    /// The input deserialized, but is not a usable document
    InvalidDocument(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            RenderError::InvalidDocument(msg) => write!(f, "Invalid document: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
