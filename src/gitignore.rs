use std::{fs::OpenOptions, io::Write, path::Path};

use crate::Result;

/// File name of the ignore-file, relative to the work directory.
pub const GITIGNORE: &str = ".gitignore";

/// Content written to a new repository that has no `.gitignore` yet.
pub const DEFAULT_GITIGNORE: &str = "# OS generated files
.DS_Store
Thumbs.db
desktop.ini

# Editor files
*.swp
.idea/
.vscode/
*.sublime-*
";

/// Write [`DEFAULT_GITIGNORE`] to `dir/.gitignore` unless that file exists.
///
/// Returns `true` if the file was created and `false` if an existing
/// file was left untouched.
pub fn write_default<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let path = dir.as_ref().join(GITIGNORE);
    if path.exists() {
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    file.write_all(DEFAULT_GITIGNORE.as_bytes())?;

    Ok(true)
}
