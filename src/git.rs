//! Runs the host system's command-line git.
//!
//! Every repository operation gitstart performs is delegated to an
//! external `git` process. Invocations run in the current working
//! directory of the host process (see [`crate::cwd::ScopedCwd`]).

use std::{
    ffi::{OsStr, OsString},
    process::Command,
};

use tracing::debug;

use crate::{Error, Result};

/// A handle on the external git executable.
#[derive(Clone, Debug)]
pub struct Git {
    program: OsString,
}

impl Default for Git {
    fn default() -> Self {
        Git::new("git")
    }
}

impl Git {
    /// Use `program` (a name found via `PATH`, or a path) as the git executable.
    pub fn new<S: Into<OsString>>(program: S) -> Git {
        Git {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Run git with the given arguments and wait for it to finish.
    ///
    /// Returns the trimmed stdout on success. A non-zero exit status
    /// becomes [`Error::CommandFailed`] carrying the trimmed stderr;
    /// when git wrote nothing to stderr, its stdout is reported instead.
    pub fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
        let command = self.describe(&args);
        debug!(%command, "running");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_owned();

        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        let code = output.status.code();
        debug!(%command, ?code, "command failed");

        Err(Error::CommandFailed {
            command,
            code,
            output: if stderr.is_empty() { stdout } else { stderr },
        })
    }

    /// `git --version`
    pub fn version(&self) -> Result<String> {
        self.run(&["--version"])
    }

    /// True if the executable can be started and answers `--version`.
    pub fn is_available(&self) -> bool {
        self.version().is_ok()
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut s = self.program.to_string_lossy().into_owned();
        for arg in args {
            s.push(' ');
            s.push_str(&arg.to_string_lossy());
        }
        s
    }
}
