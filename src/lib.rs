//! gt: a minimal version-control front end
//!
//! `gt` stages files and seals the staged state into parent-linked commits.
//! Object storage is delegated to three external executables; this crate
//! sequences them and owns the HEAD pointer that threads commits into a
//! linear history.
//!
//! - `areas`: HEAD store, object primitives and the repository that wires them
//! - `artifacts`: content identifiers, primitive names and configuration
//! - `commands`: the `add` and `commit` workflows
//! - `errors`: error taxonomy and exit codes

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
