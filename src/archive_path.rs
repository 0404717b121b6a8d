//! Archive entry names with validation.

use crate::{Error, Result};
use std::fmt;

/// Maximum length for entry names (in bytes).
///
/// The zip format stores names with a 16-bit length field.
const MAX_PATH_LENGTH: usize = u16::MAX as usize;

/// A validated name of an entry inside the icon library.
///
/// `ArchivePath` accepts forward-slash separated relative names and rejects:
/// - NUL bytes and backslashes
/// - Absolute paths (leading `/`)
/// - Empty segments (no `//` or trailing `/`)
/// - `.` or `..` segments
///
/// # Examples
///
/// ```
/// use iconlib::ArchivePath;
///
/// let path = ArchivePath::new("IconsFilled/x-lamp.svg").unwrap();
/// assert_eq!(path.as_str(), "IconsFilled/x-lamp.svg");
///
/// assert!(ArchivePath::new("../IconLibrary.xml").is_err());
/// assert!(ArchivePath::new("/version").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Creates a new `ArchivePath` from a string, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArchivePath`] if the name breaks any of the
    /// rules listed on the type.
    pub fn new(s: &str) -> Result<Self> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }

    fn validate(s: &str) -> Result<()> {
        if s.is_empty() {
            return Err(Error::InvalidArchivePath("empty path".into()));
        }
        if s.contains('\0') {
            return Err(Error::InvalidArchivePath("contains NUL byte".into()));
        }
        if s.contains('\\') {
            return Err(Error::InvalidArchivePath("contains backslash".into()));
        }
        if s.len() > MAX_PATH_LENGTH {
            return Err(Error::InvalidArchivePath(format!(
                "path exceeds maximum length of {} bytes",
                MAX_PATH_LENGTH
            )));
        }
        if s.starts_with('/') {
            return Err(Error::InvalidArchivePath(
                "absolute path not allowed".into(),
            ));
        }
        if s.ends_with('/') {
            return Err(Error::InvalidArchivePath(
                "trailing slash not allowed".into(),
            ));
        }

        for segment in s.split('/') {
            match segment {
                "" => {
                    return Err(Error::InvalidArchivePath(
                        "empty segment (consecutive slashes)".into(),
                    ));
                }
                "." => {
                    return Err(Error::InvalidArchivePath("'.' segment not allowed".into()));
                }
                ".." => {
                    return Err(Error::InvalidArchivePath(
                        "'..' segment not allowed (path traversal)".into(),
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Returns the path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins this path with another segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting path would be invalid.
    pub fn join(&self, other: &str) -> Result<Self> {
        Self::new(&format!("{}/{}", self.0, other))
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArchivePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
