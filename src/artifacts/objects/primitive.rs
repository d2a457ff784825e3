use std::fmt;

/// One of the three external object executables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    UpdateIndex,
    WriteTree,
    CommitTree,
}

impl Primitive {
    pub const ALL: [Primitive; 3] = [
        Primitive::UpdateIndex,
        Primitive::WriteTree,
        Primitive::CommitTree,
    ];

    /// File name of the executable inside the exec path
    pub fn executable_name(&self) -> &'static str {
        match self {
            Primitive::UpdateIndex => "update-index",
            Primitive::WriteTree => "write-tree",
            Primitive::CommitTree => "commit-tree",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable_name())
    }
}
