//! Shared test utilities for integration tests.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use iconlib::{IconCatalog, IconDescriptor, IconLibrary};
use zip::write::SimpleFileOptions;

/// Version stamp written into fixture libraries.
pub const FIXTURE_VERSION: &str = "20200101";

/// A catalog with no icons, shaped like the vendor's.
pub const EMPTY_CATALOG: &str =
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n<IconLibrary>\r\n</IconLibrary>";

/// A catalog holding two vendor icons.
pub const VENDOR_CATALOG: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n",
    "<IconLibrary>\r\n",
    "  <Icon uuid=\"00000001-0000-0000-0000000000000000\" Id=\"IconsFilled/lamp.svg\" Tags=\"light,lamp\" line=\"true\" filled=\"true\" />\r\n",
    "  <!-- heating -->\r\n",
    "  <Icon uuid=\"00000002-0000-0000-0000000000000000\" Id=\"IconsFilled/radiator.svg\" Tags=\"heat\" line=\"false\" filled=\"true\" />\r\n",
    "</IconLibrary>",
);

/// Builds library zip bytes with one catalog per language plus a version.
pub fn create_library(languages: &[&str], catalog: &str) -> Vec<u8> {
    let mut entries: Vec<(String, Vec<u8>)> = languages
        .iter()
        .map(|lang| {
            (
                iconlib::catalog_entry_name(lang),
                catalog.as_bytes().to_vec(),
            )
        })
        .collect();
    entries.push(("IconsFilled/lamp.svg".into(), b"<svg>lamp</svg>".to_vec()));
    entries.push(("version".into(), FIXTURE_VERSION.as_bytes().to_vec()));
    create_zip(&entries)
}

/// Builds zip bytes from (name, data) pairs; names ending in `/` become directories.
pub fn create_zip(entries: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);
        let options = SimpleFileOptions::default();
        for (name, data) in entries {
            if name.ends_with('/') {
                zip.add_directory(name.as_str(), options).unwrap();
            } else {
                zip.start_file(name.as_str(), options).unwrap();
                zip.write_all(data).unwrap();
            }
        }
        zip.finish().unwrap();
    }
    buf.into_inner()
}

/// Writes a fixture library to `dir` and returns its path.
pub fn write_library(dir: &Path, languages: &[&str], catalog: &str) -> PathBuf {
    let path = dir.join("IconLibrary.zip");
    std::fs::write(&path, create_library(languages, catalog)).unwrap();
    path
}

/// Writes an SVG named `<index>.<name>` into `dir` and returns its descriptor.
pub fn write_icon(dir: &Path, index: u32, name: &str, body: &[u8]) -> IconDescriptor {
    let path = dir.join(format!("{}.{}", index, name));
    std::fs::write(&path, body).unwrap();
    IconDescriptor::new(index, name, path)
}

/// Opens library bytes.
pub fn open(bytes: &[u8]) -> IconLibrary {
    IconLibrary::open(Cursor::new(bytes.to_vec())).unwrap()
}

/// Parses the catalog of `lang` from a library.
pub fn catalog(library: &IconLibrary, lang: &str) -> IconCatalog {
    let name = iconlib::catalog_entry_name(lang);
    IconCatalog::parse(&name, library.read(&name).unwrap()).unwrap()
}
