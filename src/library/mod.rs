//! Icon library editing.
//!
//! An icon library is a zip archive holding SVG assets under `IconsFilled/`,
//! one XML catalog per language describing each icon, and a `version` entry.
//! This module loads the archive into memory, edits it, and writes it back.
//!
//! # Example
//!
//! ```rust,no_run
//! use iconlib::{AddOptions, IconLibrary, IndexPolicy, add_icons_to_library, compile_icons};
//!
//! let icons = compile_icons("*.svg", IndexPolicy::RequirePrefix)?;
//! let mut library = IconLibrary::open_path("IconLibrary.zip")?;
//!
//! let options = AddOptions::new().languages(["", "ENG", "DEU"]);
//! let report = add_icons_to_library(&mut library, &icons, &options)?;
//!
//! if report.is_modified() {
//!     library.save_path("IconLibrary.zip")?;
//! }
//! # Ok::<(), iconlib::Error>(())
//! ```

mod archive;
mod catalog;
mod editor;
mod options;

pub use archive::{ICONS_DIR, IconLibrary, VERSION_ENTRY};
pub use catalog::{CatalogIcon, ICON_TAG, IconCatalog, IconRef, Insertion};
pub use editor::{AddReport, CatalogReport, add_icons_to_library, catalog_entry_name};
pub use options::{AddOptions, DEFAULT_TAG};
