use crate::areas::primitives::ObjectPrimitives;
use crate::areas::refs::HeadStore;
use crate::areas::repository::Repository;
use crate::errors::GtError;
use log::debug;

pub const ADD_USAGE: &str = "gt add <file>...";

impl<P, H> Repository<P, H>
where
    P: ObjectPrimitives,
    H: HeadStore,
{
    /// Stage `paths` for the next commit
    ///
    /// Paths are handed to the staging primitive verbatim and in order. The
    /// primitive either records all of them or fails as a whole.
    pub async fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        if paths.is_empty() {
            return Err(GtError::usage(format!("missing filename\n{ADD_USAGE}")).into());
        }

        debug!("staging {} path(s)", paths.len());
        self.primitives().stage_files(paths).await
    }
}
