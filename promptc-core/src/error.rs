//! Error types owned by the core data model.
//!
//! One small `thiserror` enum per failure domain rather than a single
//! flat error type; the umbrella enum that composes these via `#[from]`
//! lives in `promptc-compiler::error::CompileError`, next to the adapter
//! errors it is composed with.

use thiserror::Error;

/// `CompileInput` fails its boundary schema. Surfaced by the driver
/// before any pipeline stage runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// `PromptSpec` fails its strict schema check.
///
/// `path` follows a dotted/indexed accessor style (`dial`,
/// `meta.totalTokens`, `sections[2].injectedBlocks[0].priority`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("schema violation at {path}: {reason}")]
pub struct SchemaError {
    pub path: String,
    pub reason: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

