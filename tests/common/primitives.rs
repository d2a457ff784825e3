use gt::areas::primitives::ObjectPrimitives;
use gt::areas::refs::HeadStore;
use gt::artifacts::objects::content_id::ContentId;
use gt::artifacts::objects::primitive::Primitive;
use gt::errors::GtError;
use std::sync::Mutex;

/// A primitive invocation as observed by [`SpyPrimitives`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Stage(Vec<String>),
    BuildTree,
    BuildCommit {
        tree_id: ContentId,
        parent_id: Option<ContentId>,
        message: Option<String>,
    },
}

/// Scripted object primitives that record every invocation
///
/// Each result is either the identifier to return or the exit status to fail
/// with.
#[derive(Debug)]
pub struct SpyPrimitives {
    calls: Mutex<Vec<Call>>,
    stage: Result<(), i32>,
    tree: Result<ContentId, i32>,
    commit: Result<ContentId, i32>,
}

impl SpyPrimitives {
    pub fn new(tree: &str, commit: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            stage: Ok(()),
            tree: Ok(ContentId::from(tree)),
            commit: Ok(ContentId::from(commit)),
        }
    }

    pub fn failing_stage(mut self, status: i32) -> Self {
        self.stage = Err(status);
        self
    }

    pub fn failing_tree(mut self, status: i32) -> Self {
        self.tree = Err(status);
        self
    }

    pub fn failing_commit(mut self, status: i32) -> Self {
        self.commit = Err(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock poisoned").push(call);
    }
}

fn failure(primitive: Primitive, status: i32) -> anyhow::Error {
    GtError::PrimitiveFailure { primitive, status }.into()
}

impl ObjectPrimitives for SpyPrimitives {
    async fn stage_files(&self, paths: &[String]) -> anyhow::Result<()> {
        self.record(Call::Stage(paths.to_vec()));
        self.stage
            .map_err(|status| failure(Primitive::UpdateIndex, status))
    }

    async fn build_tree(&self) -> anyhow::Result<ContentId> {
        self.record(Call::BuildTree);
        self.tree
            .clone()
            .map_err(|status| failure(Primitive::WriteTree, status))
    }

    async fn build_commit(
        &self,
        tree_id: &ContentId,
        parent_id: Option<&ContentId>,
        message: Option<&str>,
    ) -> anyhow::Result<ContentId> {
        self.record(Call::BuildCommit {
            tree_id: tree_id.clone(),
            parent_id: parent_id.cloned(),
            message: message.map(str::to_string),
        });
        self.commit
            .clone()
            .map_err(|status| failure(Primitive::CommitTree, status))
    }
}

/// HEAD store whose writes always fail
#[derive(Debug, Default)]
pub struct ReadOnlyRefs {
    head: Option<ContentId>,
}

impl ReadOnlyRefs {
    pub fn with_head(id: &str) -> Self {
        Self {
            head: Some(ContentId::from(id)),
        }
    }
}

impl HeadStore for ReadOnlyRefs {
    fn read_head(&self) -> Option<ContentId> {
        self.head.clone()
    }

    fn write_head(&self, _id: &ContentId) -> anyhow::Result<()> {
        anyhow::bail!("HEAD is read-only")
    }
}
