use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::utils;

// PATH is re-read on every lookup, so changes to the environment take
// effect on the next command without a restart.
pub fn find_bin(name: &str) -> Option<PathBuf> {
    search_path(name, &env::var("PATH").unwrap_or_default())
}

// First directory wins; entries that are missing, non-executable or
// directories are skipped and the scan continues.
pub fn search_path(name: &str, paths: &str) -> Option<PathBuf> {
    for dir in paths.split(':') {
        let candidate = Path::new(dir).join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn is_executable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

pub fn run(name: &str, args: &[String]) {
    let bin = match find_bin(name) {
        Some(m) => m,
        None => {
            println!("{}: not found", name);
            return;
        }
    };

    // The child sees the name it was invoked by, not the resolved path
    let mut child = match Command::new(&bin).arg0(name).args(args).spawn() {
        Ok(m) => m,
        Err(err) => {
            println!("error executing command: {}", err);
            return;
        }
    };
    if let Err(err) = child.wait() {
        utils::shell_error(format!("{}: {}", name, err));
    }
}

#[cfg(test)]
mod tests {
    use super::search_path;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn place(dir: &Path, name: &str, mode: u32) {
        let bin = dir.join(name);
        fs::write(&bin, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_first_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        place(first.path(), "prog", 0o755);
        place(second.path(), "prog", 0o755);

        let paths = format!("{}:{}", first.path().display(), second.path().display());
        assert_eq!(search_path("prog", &paths), Some(first.path().join("prog")));
    }

    #[test]
    fn test_skips_non_executable() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        place(first.path(), "prog", 0o644);
        place(second.path(), "prog", 0o755);

        let paths = format!("{}:{}", first.path().display(), second.path().display());
        assert_eq!(search_path("prog", &paths), Some(second.path().join("prog")));
    }

    #[test]
    fn test_skips_directory_with_matching_name() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir(first.path().join("prog")).unwrap();
        place(second.path(), "prog", 0o755);

        let paths = format!("{}:{}", first.path().display(), second.path().display());
        assert_eq!(search_path("prog", &paths), Some(second.path().join("prog")));
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let paths = dir.path().display().to_string();
        assert_eq!(search_path("prog", &paths), None);
    }
}
