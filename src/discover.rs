//! Discovery of icon files on disk.
//!
//! Icon files are named `<index>.<name>.svg`. The numeric prefix becomes the
//! icon's index (and so its catalog `uuid`); the rest, prefixed with
//! [`CUSTOM_ICON_PREFIX`], becomes its name inside the library.

use std::path::PathBuf;

use crate::{Error, Result};

/// Prefix given to every custom icon name.
pub const CUSTOM_ICON_PREFIX: &str = "x-";

/// An icon file matched on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Index the icon's identifier is derived from (1-based).
    pub index: u32,
    /// Name of the icon inside the library, e.g. `x-lamp.svg`.
    pub name: String,
    /// Location of the SVG source.
    pub path: PathBuf,
}

impl IconDescriptor {
    /// Creates a descriptor, adding the custom prefix to `file_name`.
    pub fn new(index: u32, file_name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            index,
            name: format!("{}{}", CUSTOM_ICON_PREFIX, file_name),
            path: path.into(),
        }
    }
}

/// How files without a numeric prefix are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Only files named `<digits>.<name>` are used; others are skipped.
    #[default]
    RequirePrefix,
    /// Files without a prefix are numbered, in match order, starting one
    /// above the highest explicit prefix among the matched files.
    AutoIndex,
}

/// Splits a file name into its optional numeric prefix and the remainder.
///
/// ```
/// use iconlib::parse_icon_file_name;
///
/// assert_eq!(parse_icon_file_name("5.foo.svg"), (Some(5), "foo.svg"));
/// assert_eq!(parse_icon_file_name("foo.svg"), (None, "foo.svg"));
/// ```
pub fn parse_icon_file_name(file_name: &str) -> (Option<u32>, &str) {
    if let Some((digits, rest)) = file_name.split_once('.') {
        if !digits.is_empty() && !rest.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = digits.parse::<u32>() {
                return (Some(index), rest);
            }
        }
    }
    (None, file_name)
}

/// Collects icon descriptors for every file matching `pattern`.
///
/// Entries are returned in the glob's iteration order (alphabetical).
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern cannot be compiled.
/// Unreadable paths reported by the glob are logged and skipped.
pub fn compile_icons(pattern: &str, policy: IndexPolicy) -> Result<Vec<IconDescriptor>> {
    let paths = glob::glob(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }

        if let Some(file_name) = path.file_name() {
            let file_name = file_name.to_string_lossy().into_owned();
            files.push((path, file_name));
        }
    }

    // Unprefixed files are numbered after the highest explicit index so
    // they never share an identifier with a prefixed one.
    let mut next = files
        .iter()
        .filter_map(|(_, file_name)| parse_icon_file_name(file_name).0)
        .max()
        .unwrap_or(0)
        .checked_add(1);

    let mut icons = Vec::with_capacity(files.len());
    for (path, file_name) in files {
        match (parse_icon_file_name(&file_name), policy) {
            ((Some(index), name), _) => icons.push(IconDescriptor::new(index, name, path)),
            ((None, name), IndexPolicy::AutoIndex) => match next {
                Some(index) => {
                    icons.push(IconDescriptor::new(index, name, path));
                    next = index.checked_add(1);
                }
                None => log::warn!("Skipping {}: no free index left", path.display()),
            },
            ((None, _), IndexPolicy::RequirePrefix) => {
                log::debug!("Skipping {}: no numeric prefix", path.display());
            }
        }
    }

    Ok(icons)
}
