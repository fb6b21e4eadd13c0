//! Filesystem operations
//!
//! [`PathService`] wraps the native file and directory primitives behind one
//! logged API. Every operation expands a leading `~` first and checks the
//! entry type itself before acting; nothing is cached between calls.
//!
//! Predicates (`exists`, `is_directory`, `is_file`) fold every failure into
//! `false`. Everything else returns a [`PathError`].
//!
//! Each service logs through its own `tracing` dispatcher: either the one
//! passed to [`PathService::with_logger`], or a stderr logger built on first
//! use from the configured verbosity. No global subscriber is touched.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::Dispatch;

use crate::core::config::PathServiceConfig;
use crate::core::mode::FileMode;
use crate::core::path_text;
use crate::error::PathError;
use crate::infra::{checksum, home, logging};

/// Home-aware, logged filesystem façade
#[derive(Debug, Default)]
pub struct PathService {
    config: PathServiceConfig,
    logger: OnceLock<Dispatch>,
}

impl PathService {
    /// Create a service that builds its own logger on first use
    pub fn new(config: PathServiceConfig) -> Self {
        Self {
            config,
            logger: OnceLock::new(),
        }
    }

    /// Create a service with the given verbosity
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self::new(PathServiceConfig::new(verbosity))
    }

    /// Create a service that logs through an injected dispatcher
    ///
    /// The configured verbosity is ignored for filtering; the dispatcher's
    /// own subscriber decides what gets recorded.
    pub fn with_logger(config: PathServiceConfig, logger: Dispatch) -> Self {
        Self {
            config,
            logger: OnceLock::from(logger),
        }
    }

    /// Configuration this service was built with
    pub fn config(&self) -> PathServiceConfig {
        self.config
    }

    /// Dispatcher this service logs through
    pub fn logger(&self) -> &Dispatch {
        self.logger
            .get_or_init(|| logging::default_dispatch(self.config.verbosity))
    }

    fn logged<T>(&self, operation: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(self.logger(), operation)
    }

    /// Expand a leading `~` to the current user's home directory
    ///
    /// Paths without the shorthand are returned unchanged.
    pub fn expand_home(&self, path: impl AsRef<Path>) -> Result<PathBuf, PathError> {
        let path = path.as_ref();
        self.logged(|| warn_failure(self.expand(path), "expand path"))
    }

    fn expand(&self, path: &Path) -> Result<PathBuf, PathError> {
        tracing::debug!(path = %path.display(), "Expanding path");
        let expanded = home::expand_home(path)?;
        tracing::debug!(
            path = %path.display(),
            expanded = %expanded.display(),
            "Expanded path"
        );
        Ok(expanded)
    }

    /// Whether anything exists at the path
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.logged(|| {
            let Some(path) = self.expand_for_check(path) else {
                return false;
            };
            tracing::debug!(path = %path.display(), "Checking to see if path exists");
            fs::metadata(&path).is_ok()
        })
    }

    /// Whether the path exists and is a directory
    pub fn is_directory(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.logged(|| {
            let Some(path) = self.expand_for_check(path) else {
                return false;
            };
            tracing::debug!(path = %path.display(), "Checking to see if path is a directory");
            is_dir(&path)
        })
    }

    /// Whether the path exists and is not a directory
    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.logged(|| {
            let Some(path) = self.expand_for_check(path) else {
                return false;
            };
            tracing::debug!(path = %path.display(), "Checking to see if path is a file");
            is_non_dir(&path)
        })
    }

    /// Whether the path is an existing directory with no entries
    ///
    /// Returns `Ok(false)` when the path can't be expanded or isn't a
    /// directory. Failing to open or read an existing directory is an error.
    pub fn is_empty_directory(&self, path: impl AsRef<Path>) -> Result<bool, PathError> {
        let path = path.as_ref();
        self.logged(|| {
            let Some(path) = self.expand_for_check(path) else {
                return Ok(false);
            };
            tracing::debug!(
                path = %path.display(),
                "Checking to see if path is an empty directory"
            );
            if !is_dir(&path) {
                return Ok(false);
            }

            let result = fs::read_dir(&path)
                .and_then(|mut entries| entries.next().transpose())
                .map(|first| first.is_none())
                .map_err(|source| PathError::ReadDir { path, source });
            warn_failure(result, "check directory contents")
        })
    }

    /// Create a directory and all missing parents with mode `0o755`
    ///
    /// Succeeds without side effects if the directory already exists.
    pub fn create_directory(&self, path: impl AsRef<Path>) -> Result<(), PathError> {
        self.create_directory_with_mode(path, FileMode::DIRECTORY)
    }

    /// Create a directory and all missing parents with the given mode
    pub fn create_directory_with_mode(
        &self,
        path: impl AsRef<Path>,
        mode: FileMode,
    ) -> Result<(), PathError> {
        let path = path.as_ref();
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                tracing::debug!(path = %path.display(), %mode, "Creating directory");
                if is_dir(&path) {
                    tracing::debug!(path = %path.display(), "Directory already exists");
                    return Ok(());
                }
                dir_builder(mode)
                    .create(&path)
                    .map_err(|source| PathError::CreateDir {
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), "Directory created successfully");
                Ok(())
            });
            warn_failure(result, "create directory")
        })
    }

    /// Remove a directory
    ///
    /// Without `recursive` only an empty directory can be removed. With it,
    /// the directory and everything below it is deleted. A symlink is not a
    /// directory here, even when it points at one.
    pub fn remove_directory(
        &self,
        path: impl AsRef<Path>,
        recursive: bool,
    ) -> Result<(), PathError> {
        let path = path.as_ref();
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                tracing::debug!(
                    directory = %path.display(),
                    recursive,
                    "Attempting to remove directory"
                );
                if !is_real_dir(&path) {
                    return Err(PathError::NotADirectory { path });
                }
                let removed = if recursive {
                    fs::remove_dir_all(&path)
                } else {
                    fs::remove_dir(&path)
                };
                removed.map_err(|source| PathError::RemoveDir {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(directory = %path.display(), "Directory was removed");
                Ok(())
            });
            warn_failure(result, "remove directory")
        })
    }

    /// Names of the immediate children of a directory
    ///
    /// Order is whatever the OS yields; it is not sorted. A name that isn't
    /// valid UTF-8 fails the listing with `InvalidData` instead of being
    /// mangled.
    pub fn directory_contents(&self, path: impl AsRef<Path>) -> Result<Vec<String>, PathError> {
        let path = path.as_ref();
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                tracing::debug!(path = %path.display(), "Listing directory contents");
                list_names(&path).map_err(|source| PathError::ReadDir { path, source })
            });
            warn_failure(result, "list directory")
        })
    }

    /// Read a whole file as UTF-8 text
    pub fn load_file_string(&self, path: impl AsRef<Path>) -> Result<String, PathError> {
        self.load_with(path.as_ref(), |path| fs::read_to_string(path))
    }

    /// Read a whole file as raw bytes
    pub fn load_file_bytes(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, PathError> {
        self.load_with(path.as_ref(), |path| fs::read(path))
    }

    /// Read a whole file as UTF-8 text
    #[deprecated(since = "0.1.0", note = "use `load_file_string` instead")]
    pub fn load_file_if_exists(&self, path: impl AsRef<Path>) -> Result<String, PathError> {
        self.load_file_string(path)
    }

    fn load_with<T, F>(&self, path: &Path, read: F) -> Result<T, PathError>
    where
        F: FnOnce(&Path) -> io::Result<T>,
    {
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                tracing::debug!(file = %path.display(), "Attempting to load file");
                let contents = read_regular(&path, read)?;
                tracing::debug!(file = %path.display(), "File read successfully");
                Ok(contents)
            });
            if let Err(e) = &result {
                tracing::info!(file = %e.path().display(), error = %e, "Could not read file");
            }
            result
        })
    }

    /// Write bytes to a file, creating or truncating it
    ///
    /// `mode` applies when the file is created. Parent directories are not
    /// created. The write is not atomic; a failure can leave a partial file.
    pub fn write_file(
        &self,
        path: impl AsRef<Path>,
        data: impl AsRef<[u8]>,
        mode: FileMode,
    ) -> Result<(), PathError> {
        let path = path.as_ref();
        let data = data.as_ref();
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                tracing::debug!(
                    filename = %path.display(),
                    %mode,
                    bytes = data.len(),
                    "Writing file"
                );
                write_with_mode(&path, data, mode).map_err(|source| PathError::WriteFile {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(filename = %path.display(), %mode, "Successfully wrote file");
                Ok(())
            });
            warn_failure(result, "write file")
        })
    }

    /// SHA-256 digest of a file as 64 lowercase hex characters
    ///
    /// Matches `sha256sum` / `shasum -a 256` output.
    pub fn file_sha256_checksum(&self, path: impl AsRef<Path>) -> Result<String, PathError> {
        let path = path.as_ref();
        self.logged(|| {
            let result = self.expand(path).and_then(|path| {
                let contents = read_regular(&path, |p| fs::read(p))?;
                let checksum = checksum::compute_checksum(&contents);
                tracing::debug!(path = %path.display(), %checksum, "Computed file checksum");
                Ok(checksum)
            });
            warn_failure(result, "compute file checksum")
        })
    }

    /// See [`path_text::force_trailing_slash`]
    pub fn force_trailing_slash(path: &str) -> String {
        path_text::force_trailing_slash(path)
    }

    /// See [`path_text::file_extension`]
    pub fn file_extension(path: &str) -> &str {
        path_text::file_extension(path)
    }

    /// Expansion for predicates: failures are logged and become `None`
    fn expand_for_check(&self, path: &Path) -> Option<PathBuf> {
        match self.expand(path) {
            Ok(expanded) => Some(expanded),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Could not expand path");
                None
            }
        }
    }
}

/// Log a failed operation at warn before handing the error back
fn warn_failure<T>(result: Result<T, PathError>, action: &str) -> Result<T, PathError> {
    if let Err(e) = &result {
        tracing::warn!(path = %e.path().display(), error = %e, "Failed to {action}");
    }
    result
}

fn is_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Directory check that does not follow a final symlink
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

fn is_non_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// Read an entry that must exist and not be a directory
fn read_regular<T, F>(path: &Path, read: F) -> Result<T, PathError>
where
    F: FnOnce(&Path) -> io::Result<T>,
{
    if !is_non_dir(path) {
        return Err(PathError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    read(path).map_err(|source| PathError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Entry names; a name that isn't valid UTF-8 fails the listing
fn list_names(path: &Path) -> io::Result<Vec<String>> {
    fs::read_dir(path)?
        .map(|entry| {
            entry?.file_name().into_string().map_err(|name| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name {} is not valid UTF-8", name.to_string_lossy()),
                )
            })
        })
        .collect()
}

fn dir_builder(mode: FileMode) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode.bits());
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder
}

fn write_with_mode(path: &Path, data: &[u8], mode: FileMode) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.bits());
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(data)
}
