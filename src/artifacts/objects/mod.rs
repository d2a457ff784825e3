//! Object identifiers and primitives
//!
//! Objects themselves are built and stored by external executables. This
//! crate only ever holds their identifiers and knows which executable
//! produces which kind of object:
//!
//! - **update-index**: records files in the staging index
//! - **write-tree**: snapshots the index into a tree object
//! - **commit-tree**: links a tree to an optional parent commit

pub mod content_id;
pub mod primitive;
