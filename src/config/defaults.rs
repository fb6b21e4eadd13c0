//! Default configuration values

/// Permission bits applied when creating directories without an explicit mode
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Permission bits applied when creating files without an explicit mode
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Verbosity used when none is configured (errors only)
pub const DEFAULT_VERBOSITY: u8 = 0;

/// Highest meaningful verbosity; anything above behaves the same
pub const MAX_VERBOSITY: u8 = 4;

/// Environment variable that overrides the configured verbosity
pub const ENV_VERBOSITY: &str = "PATHKIT_VERBOSITY";

/// Home directory shorthand marker
pub const HOME_MARKER: char = '~';

/// Separator appended by trailing-slash normalization
pub const PATH_SEPARATOR: char = '/';
