use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `cwd` and normalize it lexically.
///
/// Absolute paths replace `cwd`. `.` components are dropped and `..` pops
/// one component, never above the root. Symlinks are not followed.
pub fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let joined = cwd.join(path);

    let mut res = PathBuf::new();
    for part in joined.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root
                res.pop();
            }
            other => res.push(other.as_os_str()),
        }
    }
    res
}
