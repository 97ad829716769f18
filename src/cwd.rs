use std::{
    env, io,
    path::{Path, PathBuf},
};

use tracing::warn;

/// A `ScopedCwd` changes the current working directory of the host
/// process for as long as it is alive.
///
/// When the guard goes out of scope, the working directory is reset
/// to the value it had when the guard was created. This happens on
/// every exit path, including early returns and `?` propagation.
///
/// The working directory is process-wide state. Any test that uses
/// this type should be marked `#[serial]`.
#[derive(Debug)]
pub struct ScopedCwd {
    old_path: PathBuf,
}

impl ScopedCwd {
    /// Change into `path`, remembering the current directory.
    pub fn enter<P: AsRef<Path>>(path: P) -> io::Result<ScopedCwd> {
        let old_path = env::current_dir()?;
        env::set_current_dir(path)?;

        Ok(ScopedCwd { old_path })
    }
}

impl Drop for ScopedCwd {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.old_path) {
            warn!(
                path = %self.old_path.display(),
                %err,
                "unable to restore working directory"
            );
        }
    }
}
