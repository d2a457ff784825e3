//! Porcelain commands (user-facing operations)
//!
//! - `add`: stage files for the next commit
//! - `commit`: seal the staged state into a commit and advance HEAD

pub mod add;
pub mod commit;
