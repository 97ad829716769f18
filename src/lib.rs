//! Bootstrap a git repository with the host's command-line git.
//!
//! `gitstart` runs `git init` in an existing directory, optionally sets
//! a repository-local author identity, writes a default `.gitignore`
//! when there is none, stages everything and records an initial commit.
//! It does not implement any part of git itself: every repository
//! operation is a subprocess call (see [`Git`]).

mod error;
pub use error::{Error, Result};

pub mod cwd;
pub mod git;
pub use git::Git;

pub mod gitignore;

pub mod init;
pub use init::{init_repo, InitOptions, Summary};

pub mod logging;

#[cfg(test)]
pub(crate) mod test_support;
