//! Value types shared by the workflows
//!
//! - `config`: environment-derived locations (HEAD file, primitive executables)
//! - `objects`: content identifiers and the names of the object primitives

pub mod config;
pub mod objects;
