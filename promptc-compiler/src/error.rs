//! Error types owned by the driver and its host-adapter seam.
//!
//! Small domain enums (here, just [`AdapterError`]) composed into the
//! master [`CompileError`] via `#[from]`.

use promptc_core::InputError;
use thiserror::Error;

/// A host callback (`resolve_refs` or `fetch_artifact`) failed.
/// Propagated unchanged; fatal to the compilation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("resolveRefs failed: {reason}")]
    ResolveRefsFailed { reason: String },

    #[error("fetchArtifact failed for artifact {artifact_id}: {reason}")]
    FetchArtifactFailed { artifact_id: String, reason: String },
}

/// Master error type returned by `promptc_compiler::compile`'s `Err` side.
///
/// Every other degradation (omitted blocks, unresolved refs, lint
/// findings, repairs) is data carried in `CompileOutput`, not a variant
/// here.
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    #[error("invalid compile input: {0}")]
    Input(#[from] InputError),

    #[error("host adapter failed: {0}")]
    Adapter(#[from] AdapterError),
}
