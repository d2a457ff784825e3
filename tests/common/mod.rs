#![allow(dead_code)]

pub mod command;
pub mod primitives;

use gt::areas::primitives::ObjectPrimitives;
use gt::areas::refs::HeadStore;
use gt::areas::repository::Repository;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Writer whose contents stay readable after it is handed to a repository
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn repository_with<P, H>(primitives: P, refs: H) -> (Repository<P, H>, SharedBuffer)
where
    P: ObjectPrimitives,
    H: HeadStore,
{
    let output = SharedBuffer::default();
    let repository = Repository::new(primitives, refs, Box::new(output.clone()));

    (repository, output)
}
