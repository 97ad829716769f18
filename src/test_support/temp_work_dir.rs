use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// A `TempWorkDir` is an empty scratch directory for exercising
/// gitstart. Command-line git from the host system can be run inside
/// it to inspect what gitstart left behind.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub(crate) struct TempWorkDir {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

impl TempWorkDir {
    // Create a new directory. It will be deleted when the struct is dropped.
    pub fn new() -> TempWorkDir {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().to_path_buf();

        TempWorkDir { tempdir, path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.path.join(name), content).unwrap();
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path.join(name)).unwrap()
    }

    // Run a git command in this directory and return its trimmed stdout.
    // Panics if the command fails.
    pub fn git_command<I, S>(&self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .unwrap();

        if !output.status.success() {
            panic!(
                "git command failed with status {:?}\n\nstdout:\n\n{}\n\nstderr:\n\n{}\n\n",
                output.status.code(),
                std::str::from_utf8(&output.stdout).unwrap(),
                std::str::from_utf8(&output.stderr).unwrap()
            );
        }

        String::from_utf8(output.stdout).unwrap().trim().to_owned()
    }

    pub fn commit_count(&self) -> usize {
        self.git_command(&["rev-list", "--count", "HEAD"])
            .parse()
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::TempWorkDir;

    #[test]
    fn temp_path() {
        let path = {
            let twd = TempWorkDir::new();
            twd.git_command(&["init"]);

            let path = twd.path().to_path_buf();
            assert!(path.join(".git").is_dir());

            path
        };

        assert!(!path.as_path().is_dir());
    }

    #[test]
    fn files() {
        let twd = TempWorkDir::new();
        twd.write_file("a.txt", "alpha");
        assert_eq!(twd.read_file("a.txt"), "alpha");
    }

    #[test]
    #[should_panic(expected = "git command failed with status")]
    fn git_command_error() {
        let twd = TempWorkDir::new();
        twd.git_command(&["bogus"]);
    }
}
