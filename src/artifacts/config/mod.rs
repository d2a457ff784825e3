//! Invocation configuration
//!
//! Locations are resolved from environment variables once per invocation and
//! then passed explicitly to the stores that need them.
//!
//! ## Variables
//!
//! - `GT_HEAD_FILE`: exact path of the HEAD file
//! - `GT_DIRECTORY`: repository metadata directory, shared with the primitives;
//!   HEAD lives at `<dir>/HEAD`
//! - `GT_EXEC_PATH`: directory holding `update-index`, `write-tree` and
//!   `commit-tree`
//!
//! HEAD precedence is `GT_HEAD_FILE`, then `GT_DIRECTORY`, then `./.gt/HEAD`.
//! Empty values count as unset.

use derive_new::new;
use std::path::{Path, PathBuf};

pub const HEAD_FILE_ENV: &str = "GT_HEAD_FILE";
pub const DIRECTORY_ENV: &str = "GT_DIRECTORY";
pub const EXEC_PATH_ENV: &str = "GT_EXEC_PATH";

pub const DEFAULT_DIRECTORY: &str = "./.gt";
pub const DEFAULT_EXEC_PATH: &str = ".";
pub const HEAD_FILE_NAME: &str = "HEAD";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Config {
    head_path: PathBuf,
    exec_path: PathBuf,
}

impl Config {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let head_path = match lookup(HEAD_FILE_ENV) {
            Some(file) => PathBuf::from(file),
            None => lookup(DIRECTORY_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY))
                .join(HEAD_FILE_NAME),
        };
        let exec_path = lookup(EXEC_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXEC_PATH));

        Self::new(head_path, exec_path)
    }

    pub fn head_path(&self) -> &Path {
        &self.head_path
    }

    pub fn exec_path(&self) -> &Path {
        &self.exec_path
    }
}
