//! Error types for pathkit
//!
//! Domain-specific error types using thiserror.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by fallible [`PathService`](crate::infra::filesystem::PathService) operations
#[derive(Error, Debug)]
pub enum PathError {
    /// Home directory could not be resolved for a `~` path
    #[error("Failed to expand '{}': home directory could not be determined", path.display())]
    HomeExpansion { path: PathBuf },

    /// `~user` shorthand is not supported
    #[error(
        "Failed to expand '{}': user-specific home directories are not supported",
        path.display()
    )]
    UnsupportedUserHome { path: PathBuf },

    /// Path does not denote an existing file
    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    /// Path does not denote an existing directory
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Failed to create directory
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to remove directory
    #[error("Failed to remove directory '{}': {source}", path.display())]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to list or read directory entries
    #[error("Failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write file '{}': {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PathError {
    /// The path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            Self::HomeExpansion { path }
            | Self::UnsupportedUserHome { path }
            | Self::NotAFile { path }
            | Self::NotADirectory { path }
            | Self::CreateDir { path, .. }
            | Self::RemoveDir { path, .. }
            | Self::ReadDir { path, .. }
            | Self::ReadFile { path, .. }
            | Self::WriteFile { path, .. } => path.as_path(),
        }
    }

    /// Kind of the underlying native failure, if there was one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::CreateDir { source, .. }
            | Self::RemoveDir { source, .. }
            | Self::ReadDir { source, .. }
            | Self::ReadFile { source, .. }
            | Self::WriteFile { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Whether this is a home expansion failure
    pub fn is_expansion(&self) -> bool {
        matches!(
            self,
            Self::HomeExpansion { .. } | Self::UnsupportedUserHome { .. }
        )
    }
}
