//! File permission mode
//!
//! A thin wrapper over Unix permission bits. The value is passed through to
//! directory creation and file writes untouched; the process umask still
//! applies. On non-Unix targets it is accepted and ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};

/// Permission bits for created files and directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    /// Mode used by `create_directory` (`0o755`)
    pub const DIRECTORY: Self = Self(DEFAULT_DIR_MODE);

    /// Conventional mode for regular files (`0o644`)
    pub const FILE: Self = Self(DEFAULT_FILE_MODE);

    /// Wrap raw permission bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw permission bits
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::FILE
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#o}", self.0)
    }
}
