use crate::areas::primitives::{Executables, ObjectPrimitives};
use crate::areas::refs::{HeadStore, Refs};
use crate::artifacts::config::Config;
use std::cell::{RefCell, RefMut};

/// A repository as seen by one invocation
///
/// Holds the object primitives, the HEAD store and the writer that user-facing
/// output goes to. Nothing is cached between invocations: every HEAD access
/// goes through the store.
pub struct Repository<P, H> {
    writer: RefCell<Box<dyn std::io::Write>>,
    primitives: P,
    refs: H,
}

impl<P, H> Repository<P, H>
where
    P: ObjectPrimitives,
    H: HeadStore,
{
    pub fn new(primitives: P, refs: H, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            writer: RefCell::new(writer),
            primitives,
            refs,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    pub fn refs(&self) -> &H {
        &self.refs
    }
}

impl Repository<Executables, Refs> {
    /// Open the on-disk repository described by `config`
    pub fn open(config: &Config, writer: Box<dyn std::io::Write>) -> Self {
        let primitives = Executables::new(config.exec_path().into());
        let refs = Refs::new(config.head_path().into());

        Repository::new(primitives, refs, writer)
    }
}
