//! Adding icons to a library.

use std::fs;

use crate::discover::IconDescriptor;
use crate::{ArchivePath, Result};

use super::archive::{ICONS_DIR, IconLibrary};
use super::catalog::{CatalogIcon, IconCatalog, Insertion};
use super::options::AddOptions;

/// Base name of the catalog entries.
const CATALOG_STEM: &str = "IconLibrary";

/// Returns the catalog entry for a language; `""` is the base catalog.
///
/// ```
/// use iconlib::catalog_entry_name;
///
/// assert_eq!(catalog_entry_name(""), "IconLibrary.xml");
/// assert_eq!(catalog_entry_name("ENG"), "IconLibrary_ENG.xml");
/// ```
pub fn catalog_entry_name(language: &str) -> String {
    if language.is_empty() {
        format!("{}.xml", CATALOG_STEM)
    } else {
        format!("{}_{}.xml", CATALOG_STEM, language)
    }
}

/// Changes made to one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Catalog entry name.
    pub name: String,
    /// Icons appended.
    pub added: Vec<String>,
    /// Icons whose previous entries were replaced.
    pub replaced: Vec<String>,
    /// Icons left alone because they already existed.
    pub skipped: Vec<String>,
}

impl CatalogReport {
    /// Returns `true` if the catalog was rewritten.
    pub fn is_modified(&self) -> bool {
        !self.added.is_empty() || !self.replaced.is_empty()
    }
}

/// Result of [`add_icons_to_library`].
#[must_use = "the report tells which icons were skipped"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// SVG entries written.
    pub svgs_added: Vec<String>,
    /// SVG entries left alone because they already existed.
    pub svgs_skipped: Vec<String>,
    /// One report per catalog, in language order.
    pub catalogs: Vec<CatalogReport>,
    /// New version stamp, if any catalog changed.
    pub version: Option<String>,
}

impl AddReport {
    /// Returns `true` if any catalog was rewritten.
    pub fn is_modified(&self) -> bool {
        self.catalogs.iter().any(CatalogReport::is_modified)
    }

    /// Returns `true` if the library differs from before the call.
    pub fn has_changes(&self) -> bool {
        !self.svgs_added.is_empty() || self.is_modified()
    }
}

/// Adds icons to an open library.
///
/// Each icon's SVG is stored at `IconsFilled/<name>` and a catalog entry is
/// added to the catalog of every language in `options.languages`. Existing
/// SVGs and catalog entries are skipped unless `options.force` is set. When
/// at least one catalog changes, the `version` entry is set to the
/// `YYYYMMDD` stamp of `options.version_date`.
///
/// All inputs are read and every catalog is parsed before the library is
/// touched, so an error leaves `library` unchanged.
///
/// # Errors
///
/// - [`Error::Io`](crate::Error::Io) if an SVG cannot be read
/// - [`Error::EntryNotFound`](crate::Error::EntryNotFound) if a catalog is missing
/// - [`Error::InvalidCatalog`](crate::Error::InvalidCatalog) if a catalog is malformed
/// - [`Error::InvalidArchivePath`](crate::Error::InvalidArchivePath) if an icon name
///   cannot be used as an entry name
pub fn add_icons_to_library(
    library: &mut IconLibrary,
    icons: &[IconDescriptor],
    options: &AddOptions,
) -> Result<AddReport> {
    let icons_dir = ArchivePath::new(ICONS_DIR)?;
    let mut svgs = Vec::with_capacity(icons.len());
    for icon in icons {
        let dest = icons_dir.join(&icon.name)?;
        let data = fs::read(&icon.path)?;
        svgs.push((dest, data));
    }

    let mut catalogs = Vec::with_capacity(options.languages.len());
    for language in &options.languages {
        let name = catalog_entry_name(language);
        let catalog = IconCatalog::parse(&name, library.read(&name)?)?;
        catalogs.push((ArchivePath::new(&name)?, catalog));
    }

    let mut report = AddReport::default();

    for (dest, data) in svgs {
        if library.contains(dest.as_str()) && !options.force {
            log::info!("Skipping svg: {}", dest);
            report.svgs_skipped.push(dest.to_string());
        } else {
            log::info!("Adding svg: {}", dest);
            report.svgs_added.push(dest.to_string());
            library.write(dest, data);
        }
    }

    let entries: Vec<CatalogIcon> = icons
        .iter()
        .map(|icon| CatalogIcon::new(icon, &options.tags, options.line, options.filled))
        .collect();

    for (path, mut catalog) in catalogs {
        log::info!("Updating: {}", path);
        let mut catalog_report = CatalogReport {
            name: path.to_string(),
            ..Default::default()
        };

        for entry in &entries {
            let outcome = catalog.insert(entry, options.force);
            log::info!("{:?} {} in {} ({})", outcome, entry.id, path, entry.uuid);
            let list = match outcome {
                Insertion::Added => &mut catalog_report.added,
                Insertion::Replaced => &mut catalog_report.replaced,
                Insertion::Skipped => &mut catalog_report.skipped,
            };
            list.push(entry.id.clone());
        }

        if catalog_report.is_modified() {
            library.write(path, catalog.to_bytes()?);
        }
        report.catalogs.push(catalog_report);
    }

    if report.is_modified() {
        let stamp = options.version_stamp();
        log::info!("Updating: version -> {}", stamp);
        library.set_version(&stamp)?;
        report.version = Some(stamp);
    }

    Ok(report)
}
