//! Gzip-compressed tar extraction.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use filetime::FileTime;
use flate2::read::GzDecoder;

use crate::ExtractConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::paths::resolve_absolute;

/// Extracts a `.tar.gz` archive into `dest`.
///
/// Both paths are resolved to absolute form first. The destination and any
/// missing parents are created after the archive has been opened, so a
/// missing archive leaves the filesystem untouched. Every member is
/// unpacked beneath `dest`; a member whose path would escape it aborts the
/// extraction. Members written before a failure are left on disk.
///
/// Directory members are applied last, deepest first, so a read-only
/// directory does not block its own contents and its mtime is not disturbed
/// by later writes.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened
/// - The archive is not gzip-compressed tar data
/// - The destination exists and is not a directory
/// - A member would be written outside the destination
/// - Writing a member fails
///
/// # Examples
///
/// ```no_run
/// use depprep_core::ExtractConfig;
/// use depprep_core::extract_tarball;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_tarball("icu4c-src.tgz", "deps", &ExtractConfig::default())?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_tarball<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    extract_tarball_with_progress(archive_path, dest, config, &mut NoopProgress)
}

/// Extracts a `.tar.gz` archive into `dest`, reporting each member to
/// `progress`.
///
/// See [`extract_tarball`] for the extraction contract.
pub fn extract_tarball_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest: Q,
    config: &ExtractConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let archive_path = resolve_absolute(archive_path)?;
    let dest = resolve_absolute(dest)?;

    let file = open_archive(&archive_path)?;
    prepare_destination(&dest)?;

    let mut archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
    archive.set_overwrite(config.overwrite);
    archive.set_preserve_permissions(config.preserve_permissions);
    archive.set_preserve_mtime(config.preserve_mtime);
    archive.set_unpack_xattrs(config.unpack_xattrs);

    let mut report = ExtractionReport::new(&archive_path, &dest);
    let mut directories = Vec::new();

    for (index, entry) in archive.entries().map_err(invalid_archive)?.enumerate() {
        let mut entry = entry.map_err(invalid_archive)?;
        let path = entry.path().map_err(invalid_archive)?.into_owned();
        let kind = entry.header().entry_type();
        let size = entry.size();

        progress.on_entry_start(&path, index + 1);

        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(ExtractionError::PathTraversal { path });
        }
        if path.has_root() {
            report.add_warning(format!(
                "absolute member path unpacked relative to destination: {}",
                path.display()
            ));
        }

        // Directories are applied after their contents so restrictive
        // modes and mtimes survive.
        if kind.is_dir() {
            directories.push((path, entry));
            continue;
        }

        unpack_member(&mut entry, &dest, &path)?;

        if kind.is_symlink() {
            report.symlinks_created += 1;
        } else if kind.is_file() || kind.is_hard_link() {
            report.files_extracted += 1;
            report.bytes_written += size;
            progress.on_bytes_written(size);
        } else {
            report.add_warning(format!("special file unpacked: {}", path.display()));
        }

        progress.on_entry_complete(&path);
    }

    // Deepest first, so a read-only parent is applied after its children.
    directories.sort_by(|(a, _), (b, _)| b.cmp(a));
    for (path, mut entry) in directories {
        unpack_member(&mut entry, &dest, &path)?;
        if config.preserve_mtime {
            restore_mtime(&entry, &member_target(&dest, &path)).map_err(|source| {
                ExtractionError::Unpack {
                    path: path.clone(),
                    source,
                }
            })?;
        }
        report.directories_created += 1;
        progress.on_entry_complete(&path);
    }

    progress.on_complete();
    report.duration = start.elapsed();
    Ok(report)
}

fn unpack_member<R: Read>(entry: &mut tar::Entry<'_, R>, dest: &Path, path: &Path) -> Result<()> {
    let unpacked = entry
        .unpack_in(dest)
        .map_err(|source| ExtractionError::Unpack {
            path: path.to_path_buf(),
            source,
        })?;
    if !unpacked {
        return Err(ExtractionError::PathTraversal {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// On-disk location of a member, with root and `.` components dropped the
/// way `unpack_in` drops them.
fn member_target(dest: &Path, path: &Path) -> PathBuf {
    let mut target = dest.to_path_buf();
    target.extend(path.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part),
        _ => None,
    }));
    target
}

fn restore_mtime<R: Read>(entry: &tar::Entry<'_, R>, target: &Path) -> io::Result<()> {
    let mtime = entry.header().mtime()?;
    let mtime = FileTime::from_unix_time(i64::try_from(mtime).unwrap_or(i64::MAX), 0);
    filetime::set_file_mtime(target, mtime)
}

fn open_archive(path: &Path) -> Result<File> {
    let open_err = |source| ExtractionError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    if file.metadata().map_err(open_err)?.is_dir() {
        return Err(open_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }
    Ok(file)
}

fn prepare_destination(dest: &Path) -> Result<()> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ExtractionError::DestinationNotDirectory {
            path: dest.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dest)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn invalid_archive(err: io::Error) -> ExtractionError {
    ExtractionError::InvalidArchive(err.to_string())
}
