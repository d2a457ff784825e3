use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

/// Every primitive appends one line per invocation here
pub const CALLS_LOG: &str = "calls.log";
/// commit-tree copies its stdin here
pub const MESSAGE_FILE: &str = "message.txt";

const UPDATE_INDEX: &str = r#"#!/bin/sh
echo "update-index $*" >> calls.log
exit "${STUB_STAGE_STATUS:-0}"
"#;

const WRITE_TREE: &str = r#"#!/bin/sh
echo "write-tree" >> calls.log
if [ -n "$STUB_TREE_STATUS" ]; then
    exit "$STUB_TREE_STATUS"
fi
echo "${STUB_TREE_ID:-t1}"
"#;

const COMMIT_TREE: &str = r#"#!/bin/sh
echo "commit-tree $*" >> calls.log
cat > message.txt
if [ -n "$STUB_COMMIT_STATUS" ]; then
    exit "$STUB_COMMIT_STATUS"
fi
echo "${STUB_COMMIT_ID:-c1}"
"#;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[cfg(unix)]
#[fixture]
pub fn stubbed_repository_dir(repository_dir: TempDir) -> TempDir {
    install_stub_primitives(repository_dir.path());
    repository_dir
}

#[cfg(unix)]
pub fn install_stub_primitives(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    for (name, script) in [
        ("update-index", UPDATE_INDEX),
        ("write-tree", WRITE_TREE),
        ("commit-tree", COMMIT_TREE),
    ] {
        let path = dir.join(name);
        std::fs::write(&path, script).expect("Failed to write stub primitive");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub primitive executable");
    }
}

pub fn run_gt_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gt").expect("Failed to find gt binary");
    cmd.current_dir(dir);
    for key in ["GT_HEAD_FILE", "GT_DIRECTORY", "GT_EXEC_PATH", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Lines the stub primitives logged, empty if none ran
pub fn read_calls(dir: &TempDir) -> Vec<String> {
    std::fs::read_to_string(dir.child(CALLS_LOG).path())
        .map(|calls| calls.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn read_head(dir: &TempDir) -> Option<String> {
    std::fs::read_to_string(dir.child(".gt/HEAD").path()).ok()
}

pub fn write_head(dir: &TempDir, id: &str) {
    std::fs::create_dir_all(dir.child(".gt").path()).expect("Failed to create .gt");
    dir.child(".gt/HEAD")
        .write_str(id)
        .expect("Failed to write HEAD");
}
