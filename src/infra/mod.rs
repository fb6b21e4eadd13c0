//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem access and home directory lookup.
//! This module is the only place where side effects occur.

pub mod checksum;
pub mod filesystem;
pub mod home;
pub mod logging;
