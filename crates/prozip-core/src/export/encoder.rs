//! Archive entry encoders.
//!
//! [`ArchiveEncoder`] is the seam between the walk and the byte format:
//! the builder hands it pre-computed relative names and source paths and
//! never sees zip internals. [`ZipEncoder`] writes a deflate-compressed
//! zip file; [`ManifestEncoder`] records entries without touching disk
//! and backs the preview operation.

use crate::ExportError;
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One record written into the output archive.
///
/// `name` always uses forward-slash separators regardless of host path
/// conventions; directory names carry no trailing slash (the zip
/// encoder appends it at write time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Relative name inside the archive.
    pub name: String,
    /// Full filesystem path the entry was read from.
    pub source: PathBuf,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

/// Scoped destination for archive entries.
///
/// The encoder is acquired before the walk begins and must be released
/// when the walk completes or fails: [`close`](ArchiveEncoder::close)
/// finalizes and flushes; simply dropping an unclosed encoder still
/// releases the underlying handle, but the resulting bytes are not
/// guaranteed to form a valid archive.
pub trait ArchiveEncoder {
    /// Adds a directory entry under the given relative name.
    fn add_directory(&mut self, name: &str, source: &Path) -> Result<()>;

    /// Adds a file entry under the given relative name, returning the
    /// number of content bytes written.
    fn add_file(&mut self, name: &str, source: &Path) -> Result<u64>;

    /// Finalizes the archive and flushes all written bytes.
    fn close(&mut self) -> Result<()>;
}

/// Zip-format [`ArchiveEncoder`] writing to a destination file.
///
/// Entries are deflate-compressed at the configured level, or stored
/// uncompressed when no level is given.
pub struct ZipEncoder {
    writer: Option<ZipWriter<File>>,
    options: SimpleFileOptions,
    buffer: Vec<u8>,
}

impl ZipEncoder {
    /// Creates the destination file and prepares the zip writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination file cannot be created.
    pub fn create(destination: &Path, compression_level: Option<u8>) -> Result<Self> {
        let file = File::create(destination)?;

        let options = compression_level.map_or_else(
            || SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
            |level| {
                SimpleFileOptions::default()
                    .compression_method(CompressionMethod::Deflated)
                    .compression_level(Some(i64::from(level)))
            },
        );

        Ok(Self {
            writer: Some(ZipWriter::new(file)),
            options,
            buffer: vec![0u8; 64 * 1024],
        })
    }

    fn writer(&mut self) -> Result<&mut ZipWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| ExportError::Encode("archive already closed".to_string()))
    }
}

impl ArchiveEncoder for ZipEncoder {
    fn add_directory(&mut self, name: &str, _source: &Path) -> Result<()> {
        let options = self.options;
        let dir_name = format!("{name}/");
        self.writer()?
            .add_directory(&dir_name, options)
            .map_err(|e| ExportError::Encode(format!("failed to add directory {dir_name}: {e}")))
    }

    fn add_file(&mut self, name: &str, source: &Path) -> Result<u64> {
        let mut file = File::open(source)?;
        let options = self.options;

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| ExportError::Encode("archive already closed".to_string()))?;
        writer
            .start_file(name, options)
            .map_err(|e| ExportError::Encode(format!("failed to start file {name}: {e}")))?;

        let mut bytes_written = 0u64;
        loop {
            let bytes_read = file.read(&mut self.buffer)?;
            if bytes_read == 0 {
                break;
            }
            writer.write_all(&self.buffer[..bytes_read])?;
            bytes_written += bytes_read as u64;
        }

        Ok(bytes_written)
    }

    fn close(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer
                .finish()
                .map_err(|e| ExportError::Encode(format!("failed to finish archive: {e}")))?;
        }
        Ok(())
    }
}

/// Collecting [`ArchiveEncoder`] that records entries without writing
/// any archive bytes.
///
/// Backs dry runs and the accepted-entry-set oracle in tests.
#[derive(Debug, Default)]
pub struct ManifestEncoder {
    entries: Vec<ArchiveEntry>,
}

impl ManifestEncoder {
    /// Creates an empty manifest collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries collected so far.
    #[must_use]
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Consumes the collector, returning the recorded entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ArchiveEntry> {
        self.entries
    }
}

impl ArchiveEncoder for ManifestEncoder {
    fn add_directory(&mut self, name: &str, source: &Path) -> Result<()> {
        self.entries.push(ArchiveEntry {
            name: name.to_string(),
            source: source.to_path_buf(),
            is_dir: true,
        });
        Ok(())
    }

    fn add_file(&mut self, name: &str, source: &Path) -> Result<u64> {
        let size = std::fs::metadata(source)?.len();
        self.entries.push(ArchiveEntry {
            name: name.to_string(),
            source: source.to_path_buf(),
            is_dir: false,
        });
        Ok(size)
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_zip_encoder_writes_valid_archive() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.zip");
        let source = temp.path().join("file.txt");
        fs::write(&source, "hello zip").unwrap();

        let mut encoder = ZipEncoder::create(&dest, Some(6)).unwrap();
        encoder.add_directory("proj", temp.path()).unwrap();
        let bytes = encoder.add_file("proj/file.txt", &source).unwrap();
        encoder.close().unwrap();

        assert_eq!(bytes, 9);

        let data = fs::read(&dest).unwrap();
        assert_eq!(&data[0..4], b"PK\x03\x04");

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["proj/", "proj/file.txt"]);
    }

    #[test]
    fn test_zip_encoder_directory_entries_have_trailing_slash() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.zip");

        let mut encoder = ZipEncoder::create(&dest, Some(1)).unwrap();
        encoder.add_directory("a", temp.path()).unwrap();
        encoder.add_directory("a/b", temp.path()).unwrap();
        encoder.close().unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert!(entry.is_dir());
            assert!(entry.name().ends_with('/'));
        }
    }

    #[test]
    fn test_zip_encoder_stored_mode() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.zip");
        let source = temp.path().join("file.txt");
        fs::write(&source, "x".repeat(512)).unwrap();

        let mut encoder = ZipEncoder::create(&dest, None).unwrap();
        encoder.add_file("file.txt", &source).unwrap();
        encoder.close().unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let entry = archive.by_index(0).unwrap();
        // Stored entries are not compressed at all
        assert_eq!(entry.compressed_size(), entry.size());
    }

    #[test]
    fn test_zip_encoder_rejects_use_after_close() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.zip");
        let source = temp.path().join("file.txt");
        fs::write(&source, "data").unwrap();

        let mut encoder = ZipEncoder::create(&dest, Some(6)).unwrap();
        encoder.close().unwrap();

        let result = encoder.add_file("file.txt", &source);
        assert!(matches!(result.unwrap_err(), ExportError::Encode(_)));

        // Closing twice is harmless
        assert!(encoder.close().is_ok());
    }

    #[test]
    fn test_zip_encoder_missing_source_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.zip");

        let mut encoder = ZipEncoder::create(&dest, Some(6)).unwrap();
        let result = encoder.add_file("ghost.txt", &temp.path().join("ghost.txt"));
        assert!(matches!(result.unwrap_err(), ExportError::Io(_)));
    }

    #[test]
    fn test_manifest_encoder_records_entries() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("file.txt");
        fs::write(&source, "12345").unwrap();

        let mut encoder = ManifestEncoder::new();
        encoder.add_directory("proj", temp.path()).unwrap();
        let size = encoder.add_file("proj/file.txt", &source).unwrap();
        encoder.close().unwrap();

        assert_eq!(size, 5);
        let entries = encoder.into_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_dir);
        assert_eq!(entries[0].name, "proj");
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].source, source);
    }
}
