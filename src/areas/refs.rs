//! HEAD reference
//!
//! HEAD is the single pointer to the tip of the linear history. It holds at
//! most one content identifier and is overwritten, never appended, on every
//! successful commit.
//!
//! ## File Format
//!
//! The raw identifier with no trailing newline. Readers take the first line
//! and strip its line terminator, so files written by other tools with a
//! trailing newline read back the same.
//!
//! ## Concurrency
//!
//! Writes truncate and rewrite the HEAD file only while holding an exclusive
//! lock on it, so two writers never interleave bytes. There is no compare-and-swap: two commits that read the
//! same parent both succeed and the last write wins.

use crate::artifacts::objects::content_id::ContentId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::ops::DerefMut;
use std::path::Path;
use std::sync::Mutex;

/// Storage for the HEAD reference
pub trait HeadStore {
    /// Current tip of history
    ///
    /// A missing, empty or unreadable reference all yield `None`.
    fn read_head(&self) -> Option<ContentId>;

    /// Replace the current tip with `id`
    fn write_head(&self, id: &ContentId) -> anyhow::Result<()>;
}

impl<T: HeadStore + ?Sized> HeadStore for &T {
    fn read_head(&self) -> Option<ContentId> {
        (**self).read_head()
    }

    fn write_head(&self, id: &ContentId) -> anyhow::Result<()> {
        (**self).write_head(id)
    }
}

/// HEAD persisted as a plain file
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the HEAD file itself (typically `.gt/HEAD`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> &Path {
        &self.path
    }

    fn read_first_line(&self) -> std::io::Result<String> {
        let head_file = std::fs::File::open(&self.path)?;
        let mut line = String::new();
        BufReader::new(head_file).read_line(&mut line)?;

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Open HEAD for writing without touching its content
    fn open_for_write(&self) -> anyhow::Result<File> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create parent directories for HEAD at {:?}",
                    self.path
                )
            })?;
        }

        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .with_context(|| format!("failed to open HEAD at {:?}", self.path))
    }

    /// Replace the content of an open HEAD file while holding its lock
    ///
    /// Truncation happens under the lock, so a writer that opened the file
    /// earlier can never leave a tail of someone else's identifier behind.
    fn write_locked(&self, head_file: &mut File, id: &ContentId) -> anyhow::Result<()> {
        let mut lock = file_guard::lock(head_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock HEAD at {:?}", self.path))?;

        let locked_file = lock.deref_mut();
        locked_file
            .set_len(0)
            .and_then(|()| locked_file.seek(SeekFrom::Start(0)))
            .and_then(|_| locked_file.write_all(id.as_ref().as_bytes()))
            .with_context(|| format!("failed to write HEAD at {:?}", self.path))?;

        debug!("HEAD at {:?} now points to {}", self.path, id);

        Ok(())
    }
}

impl HeadStore for Refs {
    fn read_head(&self) -> Option<ContentId> {
        match self.read_first_line() {
            Ok(line) if line.is_empty() => {
                debug!("HEAD at {:?} is empty", self.path);
                None
            }
            Ok(line) => Some(ContentId::new(line)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!("no HEAD at {:?} yet", self.path);
                None
            }
            Err(error) => {
                // unreadable HEAD is treated as a fresh history
                warn!("ignoring unreadable HEAD at {:?}: {}", self.path, error);
                None
            }
        }
    }

    fn write_head(&self, id: &ContentId) -> anyhow::Result<()> {
        let mut head_file = self.open_for_write()?;
        self.write_locked(&mut head_file, id)
    }
}

/// HEAD kept in process memory
#[derive(Debug, Default)]
pub struct MemoryRefs {
    head: Mutex<Option<ContentId>>,
}

impl MemoryRefs {
    pub fn with_head(id: ContentId) -> Self {
        Self {
            head: Mutex::new(Some(id)),
        }
    }
}

impl HeadStore for MemoryRefs {
    fn read_head(&self) -> Option<ContentId> {
        self.head
            .lock()
            .ok()
            .and_then(|head| head.clone())
            .filter(|id| !id.is_empty())
    }

    fn write_head(&self, id: &ContentId) -> anyhow::Result<()> {
        let mut head = self
            .head
            .lock()
            .map_err(|_| anyhow::anyhow!("in-memory HEAD lock poisoned"))?;
        *head = Some(id.clone());

        Ok(())
    }
}
