//! Object primitives
//!
//! Staging, tree building and commit building are done by three external
//! executables. [`ObjectPrimitives`] is the capability boundary the workflows
//! are written against; [`Executables`] implements it by spawning the
//! executables from the exec path.
//!
//! ## Process contract
//!
//! - stdout is captured; for the builders it is the new object's identifier
//! - stderr is inherited so the primitive's own diagnostics reach the user
//! - a non-zero exit status is reported verbatim as a primitive failure

use crate::artifacts::objects::content_id::ContentId;
use crate::artifacts::objects::primitive::Primitive;
use crate::errors::{EXIT_FAILURE, GtError};
use derive_new::new;
use is_executable::IsExecutable;
use log::{debug, warn};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::ChildStdin;

/// Capabilities the workflows need from the object layer
pub trait ObjectPrimitives {
    /// Record `paths` in the staging index
    fn stage_files(&self, paths: &[String]) -> impl Future<Output = anyhow::Result<()>>;

    /// Snapshot the staging index into a tree object
    fn build_tree(&self) -> impl Future<Output = anyhow::Result<ContentId>>;

    /// Create a commit object for `tree_id`, linked to `parent_id` when present
    ///
    /// `message` is fed to the builder's stdin; without one the builder reads
    /// the caller's stdin.
    fn build_commit(
        &self,
        tree_id: &ContentId,
        parent_id: Option<&ContentId>,
        message: Option<&str>,
    ) -> impl Future<Output = anyhow::Result<ContentId>>;
}

/// Primitive executables living in one directory
#[derive(Debug, new)]
pub struct Executables {
    exec_path: Box<Path>,
}

impl Executables {
    pub fn exec_path(&self) -> &Path {
        &self.exec_path
    }

    pub fn path_of(&self, primitive: Primitive) -> PathBuf {
        self.exec_path.join(primitive.executable_name())
    }

    /// Check that every primitive is present before any command runs
    pub fn preflight(&self) -> anyhow::Result<()> {
        let missing = Primitive::ALL
            .iter()
            .filter(|primitive| !self.path_of(**primitive).is_file())
            .map(|primitive| primitive.to_string())
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(GtError::Preflight {
                exec_path: self.exec_path.to_path_buf(),
                missing,
            }
            .into());
        }

        // present but not executable still gets a chance to run; the spawn
        // error will say why if it does not
        for primitive in Primitive::ALL {
            let path = self.path_of(primitive);
            if !path.is_executable() {
                warn!("{} is present but not executable", path.display());
            }
        }

        Ok(())
    }

    async fn run(
        &self,
        primitive: Primitive,
        args: &[&str],
        stdin: Option<&str>,
    ) -> anyhow::Result<Vec<u8>> {
        let path = self.path_of(primitive);
        debug!("running {} {:?}", path.display(), args);

        let mut child = tokio::process::Command::new(&path)
            .args(args)
            .stdin(match stdin {
                Some(_) => Stdio::piped(),
                None => Stdio::inherit(),
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| GtError::PrimitiveSpawn {
                primitive,
                path: path.clone(),
                source,
            })?;

        // feed stdin while stdout drains so neither side fills its pipe
        let feed = feed_stdin(primitive, child.stdin.take(), stdin);
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        fed?;
        let output = output?;

        if !output.status.success() {
            return Err(GtError::PrimitiveFailure {
                primitive,
                status: status_code(&output.status),
            }
            .into());
        }

        Ok(output.stdout)
    }
}

impl ObjectPrimitives for Executables {
    async fn stage_files(&self, paths: &[String]) -> anyhow::Result<()> {
        let args = ["--add", "--"]
            .into_iter()
            .chain(paths.iter().map(String::as_str))
            .collect::<Vec<_>>();

        let stdout = self.run(Primitive::UpdateIndex, &args, None).await?;
        if !stdout.is_empty() {
            debug!(
                "{} output: {}",
                Primitive::UpdateIndex,
                String::from_utf8_lossy(&stdout).trim_end()
            );
        }

        Ok(())
    }

    async fn build_tree(&self) -> anyhow::Result<ContentId> {
        let stdout = self.run(Primitive::WriteTree, &[], None).await?;

        Ok(ContentId::from_output(&stdout))
    }

    async fn build_commit(
        &self,
        tree_id: &ContentId,
        parent_id: Option<&ContentId>,
        message: Option<&str>,
    ) -> anyhow::Result<ContentId> {
        let mut args: Vec<&str> = vec![tree_id.as_ref()];
        if let Some(parent_id) = parent_id {
            args.extend(["--parent", parent_id.as_ref()]);
        }

        let message = message.map(|message| {
            if message.ends_with('\n') {
                message.to_string()
            } else {
                format!("{message}\n")
            }
        });

        let stdout = self
            .run(Primitive::CommitTree, &args, message.as_deref())
            .await?;

        Ok(ContentId::from_output(&stdout))
    }
}

async fn feed_stdin(
    primitive: Primitive,
    pipe: Option<ChildStdin>,
    input: Option<&str>,
) -> std::io::Result<()> {
    let (Some(mut pipe), Some(input)) = (pipe, input) else {
        return Ok(());
    };

    match pipe.write_all(input.as_bytes()).await {
        Ok(()) => Ok(()),
        // the primitive stopped reading; its exit status tells the rest
        Err(error) if error.kind() == std::io::ErrorKind::BrokenPipe => {
            debug!("{} closed stdin early", primitive);
            Ok(())
        }
        Err(error) => Err(error),
    }
}

/// Exit status of a finished primitive as a process exit code
///
/// Signals map to `128 + signal` the way shells report them.
fn status_code(status: &std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}
