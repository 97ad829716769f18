use std::{ffi::OsStr, path::Path, process::Command};

// A command for the gitstart binary under test.
pub fn gitstart() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("gitstart").unwrap()
}

// Run command-line git in `dir` and return trimmed stdout.
// Panics if git fails.
pub fn git<I, S>(dir: &Path, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();

    if !output.status.success() {
        panic!(
            "git command failed with status {:?}\n\nstderr:\n\n{}\n\n",
            output.status.code(),
            std::str::from_utf8(&output.stderr).unwrap()
        );
    }

    String::from_utf8(output.stdout).unwrap().trim().to_owned()
}

#[allow(dead_code)]
pub fn commit_count(dir: &Path) -> usize {
    git(dir, &["rev-list", "--count", "HEAD"]).parse().unwrap()
}

// Arguments that give the new repo an identity, so the initial
// commit doesn't depend on the host's global git config.
#[allow(dead_code)]
pub const IDENTITY: [&str; 4] = ["--name", "Gitstart Tester", "--email", "tester@example.com"];
