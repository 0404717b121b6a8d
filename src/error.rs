//! Error types for icon library operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when editing an icon library and pushing it to a device,
//! along with a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`:
//!
//! ```rust,no_run
//! use iconlib::{IconLibrary, Result};
//!
//! fn current_version(path: &str) -> Result<String> {
//!     let library = IconLibrary::open_path(path)?;
//!     library.version()
//! }
//! ```
//!
//! ## User-Friendly Error Messages
//!
//! ```rust
//! use iconlib::Error;
//!
//! fn print_user_message(error: &Error) {
//!     match error {
//!         Error::Io(e) => println!("File error: {}", e),
//!         Error::InvalidCatalog { entry, .. } => {
//!             println!("{} is not a valid icon catalog.", entry)
//!         }
//!         Error::EntryNotFound { path } => {
//!             println!("The library has no {} entry.", path)
//!         }
//!         _ => println!("Error: {}", error),
//!     }
//! }
//! ```

use std::io;

/// The main error type for icon library operations.
///
/// # Error Categories
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | Missing source SVG or library file |
/// | Archive | [`Zip`][Self::Zip], [`EntryNotFound`][Self::EntryNotFound], [`InvalidArchivePath`][Self::InvalidArchivePath] | Damaged or unexpected library |
/// | Catalog | [`InvalidCatalog`][Self::InvalidCatalog] | Malformed XML |
/// | Input | [`InvalidPattern`][Self::InvalidPattern] | Bad glob on the command line |
/// | Transport | `Transfer`, `Http` | Device unreachable or credentials rejected |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The zip container could not be read or written.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An icon catalog is not well-formed XML or has an unexpected shape.
    ///
    /// Editing stops at the first invalid catalog; nothing is written back.
    #[error("Invalid icon catalog {entry}: {reason}")]
    InvalidCatalog {
        /// Name of the archive entry holding the catalog.
        entry: String,
        /// What the parser rejected.
        reason: String,
    },

    /// A required entry does not exist in the library.
    ///
    /// ```rust
    /// use iconlib::Error;
    ///
    /// let err = Error::EntryNotFound { path: "IconLibrary_FRA.xml".into() };
    /// assert_eq!(err.to_string(), "Entry not found: IconLibrary_FRA.xml");
    /// ```
    #[error("Entry not found: {path}")]
    EntryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An archive entry name is not acceptable.
    ///
    /// See [`ArchivePath`](crate::ArchivePath) for the rules.
    #[error("Invalid archive path: {0}")]
    InvalidArchivePath(String),

    /// A glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Description of why the pattern is invalid.
        reason: String,
    },

    /// The FTP session failed.
    #[cfg(feature = "transfer")]
    #[error("Transfer error: {0}")]
    Transfer(#[from] suppaftp::FtpError),

    /// The HTTP request failed.
    #[cfg(feature = "transfer")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Returns `true` if this error came from talking to the remote device.
    ///
    /// Transport errors are the only ones the command surface tolerates: the
    /// edited library is already saved when they occur.
    pub fn is_transport_error(&self) -> bool {
        match self {
            #[cfg(feature = "transfer")]
            Error::Transfer(_) | Error::Http(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the library itself is damaged or lacks expected entries.
    pub fn is_archive_error(&self) -> bool {
        matches!(
            self,
            Error::Zip(_) | Error::InvalidCatalog { .. } | Error::EntryNotFound { .. }
        )
    }

    /// Returns the archive entry associated with this error, if any.
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Error::InvalidCatalog { entry, .. } => Some(entry.as_str()),
            Error::EntryNotFound { path } => Some(path.as_str()),
            _ => None,
        }
    }

    /// Creates an InvalidCatalog error.
    pub fn invalid_catalog(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCatalog {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for icon library operations.
pub type Result<T> = std::result::Result<T, Error>;
