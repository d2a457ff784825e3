//! Repository components
//!
//! - `primitives`: the external object executables behind a capability trait
//! - `refs`: the HEAD store (file backed and in memory)
//! - `repository`: wires primitives, HEAD and the output writer together

pub mod primitives;
pub mod refs;
pub mod repository;
