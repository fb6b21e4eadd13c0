//! Core logic module
//!
//! This module contains the pure parts of pathkit.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`config`] - Service configuration and environment override
//! - [`mode`] - Permission mode passed to created files and directories
//! - [`path_text`] - String-only path transforms
//! - [`verbosity`] - Verbosity to log level mapping

pub mod config;
pub mod mode;
pub mod path_text;
pub mod verbosity;
