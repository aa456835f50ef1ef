//! Test utilities for building tarballs and configure directories.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Compresses raw tar bytes with gzip.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Creates an in-memory `.tar.gz` archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are created with mode 0o644.
///
/// # Examples
///
/// ```
/// use depprep_core::test_utils::create_test_tar_gz;
///
/// let data = create_test_tar_gz(&[
///     ("file.txt", b"hello".as_slice()),
///     ("dir/nested.txt", b"world!".as_slice()),
/// ]);
/// assert_eq!(&data[..2], &[0x1f, 0x8b]);
/// ```
#[must_use]
pub fn create_test_tar_gz(entries: &[(&str, &[u8])]) -> Vec<u8> {
    entries
        .iter()
        .fold(TarTestBuilder::new(), |builder, &(path, data)| {
            builder.add_file(path, data)
        })
        .build_gz()
}

/// Writes archive bytes to `dir/name` and returns the full path.
pub fn write_archive(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

/// Writes a `configure` script with the given shell body into `dir`.
///
/// The script is not marked executable; it is run through an interpreter.
pub fn write_configure_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("configure");
    fs::write(&path, format!("#!/bin/bash\n{body}\n")).unwrap();
    path
}

/// Builder for TAR test archives with various entry types.
///
/// # Examples
///
/// ```
/// use depprep_core::test_utils::TarTestBuilder;
///
/// let tar_gz = TarTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .add_symlink("link", "file.txt")
///     .build_gz();
/// ```
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    /// Creates a new TAR test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Adds a regular file to the archive.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a regular file with custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a regular file whose name is written into the header verbatim.
    ///
    /// `tar::Builder` refuses names containing `..`; this bypasses the check
    /// so archives with escaping members can be produced.
    #[must_use]
    pub fn add_raw_path_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_old();
        let name = &mut header.as_old_mut().name;
        name[..path.len()].copy_from_slice(path.as_bytes());
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Adds a directory to the archive.
    #[must_use]
    pub fn add_directory(self, path: &str) -> Self {
        self.append_directory(path, 0o755, 0)
    }

    /// Adds a directory with custom mode.
    #[must_use]
    pub fn add_directory_with_mode(self, path: &str, mode: u32) -> Self {
        self.append_directory(path, mode, 0)
    }

    /// Adds a directory with a modification time in seconds since the epoch.
    #[must_use]
    pub fn add_directory_with_mtime(self, path: &str, mtime: u64) -> Self {
        self.append_directory(path, 0o755, mtime)
    }

    fn append_directory(mut self, path: &str, mode: u32, mtime: u64) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(mode);
        header.set_mtime(mtime);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a symlink to the archive.
    #[must_use]
    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Returns the uncompressed TAR archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Returns the archive data compressed with gzip.
    #[must_use]
    pub fn build_gz(self) -> Vec<u8> {
        gzip(&self.build())
    }
}

impl Default for TarTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
