//! Host adapter traits and the async pipeline driver.
//!
//! This is the only crate in the workspace that performs I/O or touches a
//! clock: everything it calls into (`promptc-pipeline`, `promptc-validate`)
//! is pure and synchronous.

mod driver;
mod error;
mod host;
mod settings;

pub use driver::compile;
pub use error::{AdapterError, CompileError};
pub use host::ArtifactHost;
pub use settings::CompilerSettings;
