//! In-memory model of an icon library zip.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::{ArchivePath, Error, Result};

/// Entry holding the library's version stamp.
pub const VERSION_ENTRY: &str = "version";

/// Directory holding icon SVGs.
pub const ICONS_DIR: &str = "IconsFilled";

#[derive(Debug, Clone)]
struct LibraryEntry {
    name: String,
    data: Vec<u8>,
    method: CompressionMethod,
    is_dir: bool,
}

/// An icon library loaded fully into memory.
///
/// Every entry of the zip is read on open. Edits only touch the in-memory
/// copy; [`save_path`](Self::save_path) or [`write_to`](Self::write_to)
/// serialize the whole library in one pass, keeping the original entry order
/// and compression method of untouched entries.
///
/// # Example
///
/// ```rust,no_run
/// use iconlib::{ArchivePath, IconLibrary};
///
/// let mut library = IconLibrary::open_path("IconLibrary.zip")?;
/// println!("version {}", library.version()?);
///
/// library.write(ArchivePath::new("IconsFilled/x-lamp.svg")?, b"<svg/>".to_vec());
/// library.save_path("IconLibrary.zip")?;
/// # Ok::<(), iconlib::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconLibrary {
    entries: Vec<LibraryEntry>,
}

impl IconLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a library from a file path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::open(BufReader::new(file))
    }

    /// Reads every entry of a zip archive into memory.
    pub fn open<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let is_dir = file.is_dir();
            let mut data = Vec::new();
            if !is_dir {
                data.reserve(file.size() as usize);
                file.read_to_end(&mut data)?;
            }
            entries.push(LibraryEntry {
                name: file.name().to_string(),
                data,
                method: file.compression(),
                is_dir,
            });
        }

        log::debug!("Loaded {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Returns the number of entries, directories included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the library has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the names of all entries in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Returns `true` if a file entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the content of a file entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] if there is no such file entry.
    pub fn read(&self, name: &str) -> Result<&[u8]> {
        self.position(name)
            .map(|idx| self.entries[idx].data.as_slice())
            .ok_or_else(|| Error::EntryNotFound {
                path: name.to_string(),
            })
    }

    /// Writes a file entry, replacing an existing one in place.
    ///
    /// Returns `true` if an entry was replaced.
    pub fn write(&mut self, path: ArchivePath, data: impl Into<Vec<u8>>) -> bool {
        let data = data.into();
        match self.position(path.as_str()) {
            Some(idx) => {
                self.entries[idx].data = data;
                true
            }
            None => {
                self.entries.push(LibraryEntry {
                    name: path.as_str().to_string(),
                    data,
                    method: CompressionMethod::Deflated,
                    is_dir: false,
                });
                false
            }
        }
    }

    /// Returns the library's version stamp.
    pub fn version(&self) -> Result<String> {
        let raw = self.read(VERSION_ENTRY)?;
        Ok(String::from_utf8_lossy(raw).trim().to_string())
    }

    /// Overwrites the library's version stamp.
    pub fn set_version(&mut self, version: &str) -> Result<()> {
        self.write(ArchivePath::new(VERSION_ENTRY)?, version.as_bytes());
        Ok(())
    }

    /// Serializes the library as a zip archive into `writer`.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = zip::ZipWriter::new(writer);

        for entry in &self.entries {
            let options = SimpleFileOptions::default().compression_method(writable(entry.method));
            if entry.is_dir {
                zip.add_directory(entry.name.as_str(), options)?;
            } else {
                zip.start_file(entry.name.as_str(), options)?;
                zip.write_all(&entry.data)?;
            }
        }

        Ok(zip.finish()?)
    }

    /// Saves the library to `path`.
    ///
    /// The archive is written to a temporary sibling first and renamed over
    /// the destination, so an interrupted save leaves the old file intact.
    pub fn save_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp = temp_sibling(path);

        let result = File::create(&tmp)
            .map_err(Error::from)
            .and_then(|file| self.write_to(BufWriter::new(file)))
            .and_then(|mut writer| writer.flush().map_err(Error::from));

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        fs::rename(&tmp, path)?;
        log::debug!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| !e.is_dir && e.name == name)
    }
}

/// Maps a stored method onto one the writer can produce.
fn writable(method: CompressionMethod) -> CompressionMethod {
    match method {
        CompressionMethod::Stored => CompressionMethod::Stored,
        _ => CompressionMethod::Deflated,
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
