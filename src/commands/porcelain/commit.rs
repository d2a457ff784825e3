use crate::areas::primitives::ObjectPrimitives;
use crate::areas::refs::HeadStore;
use crate::areas::repository::Repository;
use crate::errors::GtError;
use log::{debug, warn};
use std::io::Write;

impl<P, H> Repository<P, H>
where
    P: ObjectPrimitives,
    H: HeadStore,
{
    /// Seal the staged state into a commit and advance HEAD to it
    ///
    /// The parent is whatever HEAD held when the tree was built. HEAD is only
    /// written once both objects exist; a failed write leaves them behind
    /// unreferenced.
    pub async fn commit(&self, message: Option<&str>) -> anyhow::Result<()> {
        let tree_id = self.primitives().build_tree().await?;
        debug!("built tree {}", tree_id);

        let parent = self.refs().read_head();
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit_id = self
            .primitives()
            .build_commit(&tree_id, parent.as_ref(), message)
            .await?;
        debug!("built commit {} with parent {:?}", commit_id, parent);

        self.refs()
            .write_head(&commit_id)
            .map_err(|source| GtError::HeadWrite {
                commit_id: commit_id.to_string(),
                source: source.into(),
            })?;

        // HEAD already moved; a closed stdout is not worth failing for
        if let Err(error) = writeln!(self.writer(), "[{}{}]", is_root, commit_id) {
            warn!("failed to report commit {}: {}", commit_id, error);
        }

        Ok(())
    }
}
