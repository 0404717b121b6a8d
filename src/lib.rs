//! # iconlib
//!
//! Adds custom SVG icons to a Loxone icon library and pushes the result to a
//! Miniserver.
//!
//! An icon library is a zip archive holding SVG assets under `IconsFilled/`,
//! an XML catalog per language (`IconLibrary.xml`, `IconLibrary_ENG.xml`, ...)
//! and a `version` stamp. This crate matches icon files on disk, stores them
//! in the archive, registers each one in every catalog, and bumps the version.
//!
//! ## Quick Start
//!
//! ### Adding Icons
//!
//! Icon files are named `<index>.<name>.svg`. The index fixes the icon's
//! identifier, so re-running with the same files is a no-op.
//!
//! ```rust,no_run
//! use iconlib::{AddOptions, IconLibrary, IndexPolicy, Result, add_icons_to_library, compile_icons};
//!
//! fn main() -> Result<()> {
//!     let icons = compile_icons("icons/*.svg", IndexPolicy::RequirePrefix)?;
//!
//!     let mut library = IconLibrary::open_path("IconLibrary.zip")?;
//!     let options = AddOptions::new()
//!         .languages(["", "ENG", "DEU"])
//!         .tags(["custom", "garden"]);
//!     let report = add_icons_to_library(&mut library, &icons, &options)?;
//!
//!     for name in &report.svgs_added {
//!         println!("added {}", name);
//!     }
//!     library.save_path("IconLibrary.zip")?;
//!     Ok(())
//! }
//! ```
//!
//! ### Finding the Installed Library
//!
//! ```rust,no_run
//! if let Some(path) = iconlib::find_icon_library() {
//!     println!("installed library: {}", path.display());
//! }
//! ```
//!
//! ### Uploading to the Device
//!
//! ```rust,ignore
//! # #[cfg(feature = "transfer")]
//! use iconlib::transfer::{Credentials, DEFAULT_REMOTE_PATH, upload};
//!
//! let creds = Credentials::new("admin", "secret");
//! upload("192.168.1.7", "IconLibrary.zip", DEFAULT_REMOTE_PATH, &creds)?;
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `transfer` | Yes | FTP upload and HTTP reboot |
//! | `cli` | No | The `iconlib` command-line tool |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod archive_path;
pub mod discover;
pub mod error;
pub mod ident;
pub mod library;
pub mod locate;

#[cfg(feature = "transfer")]
#[cfg_attr(docsrs, doc(cfg(feature = "transfer")))]
pub mod transfer;

pub use archive_path::ArchivePath;
pub use error::{Error, Result};

// Re-export the icon matching API
pub use discover::{
    CUSTOM_ICON_PREFIX, IconDescriptor, IndexPolicy, compile_icons, parse_icon_file_name,
};
pub use ident::icon_uuid;

// Re-export the editing API
pub use library::{
    AddOptions, AddReport, CatalogIcon, CatalogReport, IconCatalog, IconLibrary, Insertion,
    add_icons_to_library, catalog_entry_name,
};

pub use locate::{find_icon_library, find_icon_library_in};

/// File name of the working copy edited when the original is left alone.
pub const WORKING_COPY: &str = "IconLibrary.zip";
