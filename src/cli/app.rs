#![deny(warnings)]

use std::{ffi::OsStr, io::Write};

#[cfg(test)]
use std::ffi::OsString;

use clap::{crate_version, Arg, ArgMatches};
use gitstart::{init_repo, Error, Git, InitOptions};
use tracing::{debug, info};

use crate::Result;

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("gitstart")
        .version(crate_version!())
        .about("Initialize a Git repository in a directory")
        .arg(
            Arg::with_name("path")
                .short("p")
                .long("path")
                .value_name("PATH")
                .default_value(".")
                .help("Path to directory for Git initialization"),
        )
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("Git user name for this repository"),
        )
        .arg(
            Arg::with_name("email")
                .short("e")
                .long("email")
                .value_name("EMAIL")
                .help("Git user email for this repository"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log diagnostics to stderr (repeat for more detail)"),
        )
}

/// Process exit status for the outcome of [`App::run`].
///
/// Only a missing git is a failure. Every other problem has already been
/// reported on stdout as part of the run.
pub(crate) fn exit_code(r: &Result<()>) -> i32 {
    match r {
        Err(err) if is_git_not_found(err.as_ref()) => 1,
        _ => 0,
    }
}

pub(crate) fn is_git_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    matches!(err.downcast_ref::<Error>(), Some(Error::GitNotFound))
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub git: Git,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn options(&self) -> InitOptions {
        let m = &self.arg_matches;

        InitOptions {
            path: m.value_of_os("path").unwrap_or_else(|| OsStr::new(".")).into(),
            name: m.value_of("name").map(String::from),
            email: m.value_of("email").map(String::from),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let git = self.git.clone();

        match git.version() {
            Ok(version) => debug!(%version, "found git"),
            Err(err) => {
                debug!(program = ?git.program(), %err, "git is unavailable");
                writeln!(self, "ERROR: {}", Error::GitNotFound)?;
                writeln!(self, "Please install Git first: https://git-scm.com/downloads")?;
                return Err(Error::GitNotFound.into());
            }
        }

        let options = self.options();

        match init_repo(&git, &options, &mut *self.stdout) {
            Ok(summary) => {
                info!(
                    path = %summary.work_dir.display(),
                    warnings = summary.warnings.len(),
                    "done"
                );
                writeln!(self, "\nRepository successfully initialized!")?;
                writeln!(self, "\nNext steps:")?;
                writeln!(self, "  1. To add a remote repository:")?;
                writeln!(self, "     git remote add origin <repository-url>")?;
                writeln!(self, "  2. To push your changes:")?;
                writeln!(self, "     git push -u origin main")?;
            }
            Err(err) => {
                info!(%err, "repository not initialized");
                writeln!(
                    self,
                    "\nFailed to initialize repository. See error messages above."
                )?;
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn run_with_git_and_args<I, T>(git: Git, args: I) -> (Result<()>, Vec<u8>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("gitstart"));

        let mut stdout: Vec<u8> = Vec::new();

        let r = match clap_app().get_matches_from_safe(args) {
            Ok(arg_matches) => App {
                arg_matches,
                git,
                stdout: &mut stdout,
            }
            .run(),
            Err(err) => Err(err.into()),
        };

        (r, stdout)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let (r, stdout) = App::run_with_git_and_args(Git::default(), args);
        r.map(|_| stdout)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
