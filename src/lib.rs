//! Pathkit - logged, home-aware filesystem helpers
//!
//! This library wraps the native filesystem primitives an application
//! usually scatters around (stat, mkdir -p, remove, read-dir, whole-file
//! read and write, SHA-256) behind one consistent API with `~` expansion
//! and structured logging.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`] - Pure logic: configuration, modes, verbosity, path strings (no I/O)
//! - [`infra`] - Infrastructure layer (filesystem, home resolution, logging)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use pathkit::{FileMode, PathService};
//!
//! let fs = PathService::with_verbosity(1);
//! fs.create_directory("~/.myapp/cache")?;
//! fs.write_file("~/.myapp/cache/state", b"ready", FileMode::FILE)?;
//! let digest = fs.file_sha256_checksum("~/.myapp/cache/state")?;
//! # Ok::<(), pathkit::PathError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;

pub use crate::core::config::PathServiceConfig;
pub use crate::core::mode::FileMode;
pub use crate::core::path_text::{file_extension, force_trailing_slash};
pub use crate::error::PathError;
pub use crate::infra::filesystem::PathService;
