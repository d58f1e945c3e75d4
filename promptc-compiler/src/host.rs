//! Artifact resolver adapter: the host-supplied callback seam through
//! which the compiler resolves `@name` references and fetches artifacts.
//!
//! The core never caches artifacts across compilations and never holds a
//! reference past the compilation; it only ever sees snapshots returned
//! through these two callbacks — a thin async trait the host implements
//! and the library consumes.

use crate::error::AdapterError;
use async_trait::async_trait;
use promptc_core::{Artifact, ArtifactId, ArtifactRef};

/// Host-supplied resolver/fetcher pair. Implementations must be
/// thread-safe (`Send + Sync`) since the driver fans out concurrent
/// `fetch_artifact` calls.
#[async_trait]
pub trait ArtifactHost: Send + Sync {
    /// Resolve raw `@name` strings to artifacts, one [`ArtifactRef`] per
    /// input name, in the same order. Called at most once per
    /// compilation, and only when there is at least one name to resolve.
    async fn resolve_refs(&self, names: &[String]) -> Result<Vec<ArtifactRef>, AdapterError>;

    /// Fetch one artifact by id. `Ok(None)` means "no such artifact" and
    /// is not an error — it simply contributes zero blocks.
    async fn fetch_artifact(&self, id: &ArtifactId) -> Result<Option<Artifact>, AdapterError>;
}
