//! Identity types for promptc entities.
//!
//! Artifact and block identities are opaque handles minted by the host
//! store, never cached here, so they are thin string newtypes rather than
//! UUID newtypes: the host is free to use whatever ID scheme its
//! persistence layer already has. `SpecId` is the one identity the core
//! mints itself, via UUIDv7, for sort-friendly opaque compilation ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define an opaque string-backed identity newtype.
macro_rules! define_string_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_string_id!(ArtifactId, "Opaque, host-assigned identifier for an Artifact.");
define_string_id!(BlockId, "Opaque, host-assigned identifier for an ArtifactBlock.");

/// Opaque, core-minted identifier for one compilation's `PromptSpec`.
///
/// Generated fresh per compilation; this is one of the two explicit,
/// permitted sources of nondeterminism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecId(pub Uuid);

impl SpecId {
    /// Mint a fresh, timestamp-sortable spec id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UTC timestamp, used for `Artifact`/`ArtifactBlock` lifecycle fields and
/// `PromptMeta::compiled_at` — the other permitted nondeterminism source.
pub type Timestamp = DateTime<Utc>;
