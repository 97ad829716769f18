//! Bootstraps a git repository in an existing directory.
//!
//! The sequence is fixed: `git init`, optional per-repository identity,
//! a default `.gitignore`, `git add .` and an initial commit. Only the
//! first step is allowed to abort the run. Everything after it is best
//! effort and degrades to a printed warning.

use std::{
    env,
    io::Write,
    path::{Component, Path, PathBuf},
};

use chrono::Local;
use tracing::{info, warn};

use crate::{cwd::ScopedCwd, gitignore, Error, Git, Result};

/// Name of the directory (or file) git uses to mark a work tree.
pub const GIT_DIR: &str = ".git";

const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to initialize and how.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InitOptions {
    /// Directory to initialize. Relative paths are resolved against
    /// the current working directory.
    pub path: PathBuf,

    /// Value for the repository-local `user.name`.
    pub name: Option<String>,

    /// Value for the repository-local `user.email`.
    pub email: Option<String>,
}

impl InitOptions {
    pub fn new<P: Into<PathBuf>>(path: P) -> InitOptions {
        InitOptions {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> InitOptions {
        self.name = Some(name.into());
        self
    }

    pub fn email<S: Into<String>>(mut self, email: S) -> InitOptions {
        self.email = Some(email.into());
        self
    }
}

/// Describes a completed run of [`init_repo`].
#[derive(Debug, Default)]
pub struct Summary {
    /// Absolute path of the initialized work tree, as given (symlinks
    /// are not resolved).
    pub work_dir: PathBuf,

    pub created_gitignore: bool,
    pub staged: bool,
    pub committed: bool,

    /// Every warning printed while running the best-effort steps.
    pub warnings: Vec<String>,
}

/// Initialize a repository as described by `options`.
///
/// Status lines are written to `out`. The working directory of the host
/// process is changed to the target directory for the duration of the
/// call and restored before this function returns, whatever the outcome.
///
/// Returns [`Error::DirectoryNotFound`] if the target isn't a directory,
/// [`Error::AlreadyInitialized`] if it already contains a `.git` entry,
/// or the underlying error if `git init` itself fails. In each of those
/// cases nothing on disk has been changed by gitstart.
pub fn init_repo(git: &Git, options: &InitOptions, out: &mut dyn Write) -> Result<Summary> {
    let target = absolute(&options.path)?;

    if !target.is_dir() {
        writeln!(out, "ERROR: Directory {} does not exist.", target.display())?;
        return Err(Error::DirectoryNotFound(target));
    }

    let _cwd = ScopedCwd::enter(&target)?;
    let work_dir = target;
    writeln!(out, "Initializing Git repository in: {}", work_dir.display())?;

    if work_dir.join(GIT_DIR).exists() {
        writeln!(out, "Git repository already exists in this directory.")?;
        return Err(Error::AlreadyInitialized(work_dir));
    }

    if let Err(err) = git.run(&["init"]) {
        writeln!(out, "Failed to initialize Git repository: {}", err)?;
        return Err(err);
    }
    writeln!(out, "Git repository initialized successfully.")?;
    info!(path = %work_dir.display(), "repository created");

    let mut steps = Steps {
        out,
        warnings: Vec::new(),
    };

    if let Some(name) = &options.name {
        let r = git.run(&["config", "user.name", name.as_str()]);
        steps.report(
            r,
            &format!("Git user name set to: {}", name),
            "Could not set Git user name",
        )?;
    }

    if let Some(email) = &options.email {
        let r = git.run(&["config", "user.email", email.as_str()]);
        steps.report(
            r,
            &format!("Git user email set to: {}", email),
            "Could not set Git user email",
        )?;
    }

    let created_gitignore = match gitignore::write_default(&work_dir) {
        Ok(true) => {
            writeln!(steps.out, "Created default .gitignore file.")?;
            true
        }
        Ok(false) => false,
        Err(err) => {
            steps.warn("Could not create .gitignore file", &err)?;
            false
        }
    };

    let staged = steps.report(
        git.run(&["add", "."]),
        "All files added to staging area.",
        "Could not add files",
    )?;

    let message = commit_message();
    let committed = steps.report(
        git.run(&["commit", "-m", message.as_str()]),
        "Initial commit created successfully.",
        "Could not create initial commit",
    )?;

    if !committed {
        writeln!(
            steps.out,
            "You may need to set your Git user name and email with:"
        )?;
        writeln!(steps.out, "  git config --global user.name \"Your Name\"")?;
        writeln!(
            steps.out,
            "  git config --global user.email \"your.email@example.com\""
        )?;
    }

    Ok(Summary {
        work_dir,
        created_gitignore,
        staged,
        committed,
        warnings: steps.warnings,
    })
}

/// Message for the initial commit, stamped with the local time.
pub fn commit_message() -> String {
    format!(
        "Initial commit - {}",
        Local::now().format(COMMIT_TIMESTAMP_FORMAT)
    )
}

// Make `path` absolute and drop `.` and `..` components without
// touching the filesystem, so symlinks in the path are kept as written.
fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            c => normalized.push(c.as_os_str()),
        }
    }

    Ok(normalized)
}

// Status output for the best-effort steps.
struct Steps<'a> {
    out: &'a mut dyn Write,
    warnings: Vec<String>,
}

impl<'a> Steps<'a> {
    fn report(&mut self, r: Result<String>, done: &str, failed: &str) -> Result<bool> {
        match r {
            Ok(_) => {
                writeln!(self.out, "{}", done)?;
                Ok(true)
            }
            Err(err) => {
                self.warn(failed, &err)?;
                Ok(false)
            }
        }
    }

    fn warn(&mut self, what: &str, err: &Error) -> Result<()> {
        let warning = format!("{}: {}", what, err);
        warn!("{}", warning);
        writeln!(self.out, "Warning: {}", warning)?;
        self.warnings.push(warning);
        Ok(())
    }
}
