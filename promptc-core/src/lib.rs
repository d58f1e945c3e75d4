//! Core data types for the prompt compiler.
//!
//! Pure data structures and pure functions only — no I/O, no async, no
//! host callbacks. Every other crate in the workspace depends on this one.

mod artifact;
mod enums;
mod error;
mod estimator;
mod ids;
mod input;
mod intent;
mod spec;

pub use artifact::*;
pub use enums::*;
pub use error::*;
pub use estimator::*;
pub use ids::*;
pub use input::*;
pub use intent::*;
pub use spec::*;
