//! Discovery of the installed icon library.
//!
//! The configuration software installs one directory per release under
//! `%ProgramData%\Loxone`, named `Loxone Config <version>`. The newest
//! release's `IconLibrary.zip` is the default library to edit.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the shared application data directory.
pub const PROGRAM_DATA_ENV: &str = "ProgramData";

/// Vendor directory below the application data directory.
pub const INSTALL_DIR: &str = "Loxone";

/// Pattern matching release directories.
pub const RELEASE_PATTERN: &str = "Loxone Config *";

/// File name of the icon library inside a release directory.
pub const LIBRARY_FILE: &str = "IconLibrary.zip";

/// Returns the icon library of the newest installed release.
///
/// Returns `None` if `ProgramData` is unset or no release is installed.
pub fn find_icon_library() -> Option<PathBuf> {
    let Some(base) = std::env::var_os(PROGRAM_DATA_ENV) else {
        log::debug!("{} is not set", PROGRAM_DATA_ENV);
        return None;
    };
    find_icon_library_in(Path::new(&base))
}

/// Returns the icon library of the newest release installed below `base`.
///
/// Release directories are compared in natural order, so `Loxone Config 10`
/// sorts after `Loxone Config 9`. The returned path is not checked for
/// existence.
pub fn find_icon_library_in(base: &Path) -> Option<PathBuf> {
    let install = base.join(INSTALL_DIR);
    let pattern = glob::Pattern::new(RELEASE_PATTERN).ok()?;

    let entries = match fs::read_dir(&install) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list {}: {}", install.display(), e);
            return None;
        }
    };

    let newest = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| pattern.matches(name))
        .max_by(|a, b| natural_order(a, b))?;

    let library = install.join(newest).join(LIBRARY_FILE);
    log::debug!("Found icon library at {}", library.display());
    Some(library)
}

fn natural_order(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}
