//! Absolute path resolution.

use std::env;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Resolves `path` to an absolute path without touching the filesystem
/// beyond reading the current directory.
///
/// Relative paths are joined onto the current working directory. `.`
/// components are dropped and `..` components pop the previous component,
/// so the result has the same shape `os.path.abspath` style helpers
/// produce. Symlinks are not resolved and the path does not need to exist.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```
/// use depprep_core::resolve_absolute;
/// use std::path::Path;
///
/// # fn main() -> std::io::Result<()> {
/// let abs = resolve_absolute("/opt/deps/./icu/../zlib")?;
/// assert_eq!(abs, Path::new("/opt/deps/zlib"));
/// # Ok(())
/// # }
/// ```
pub fn resolve_absolute(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot resolve an empty path",
        ));
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(normalize_lexical(&joined))
}

fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                out.clear();
                out.push(prefix.as_os_str());
            }
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
