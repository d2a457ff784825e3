//! Command implementations
//!
//! Only porcelain commands live here; the plumbing (index updates, tree and
//! commit objects) is provided by external executables, see
//! [`crate::areas::primitives`].

pub mod porcelain;
