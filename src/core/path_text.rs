//! Pure path string transforms
//!
//! Nothing here touches the filesystem or expands `~`; functions operate on
//! the literal input.

use crate::config::defaults::PATH_SEPARATOR;

/// Append a trailing `/` unless the path already ends with one
///
/// The empty string maps to `/`. Repeated trailing separators are kept
/// as they are.
pub fn force_trailing_slash(path: &str) -> String {
    let mut out = path.to_string();
    if !out.ends_with(PATH_SEPARATOR) {
        out.push(PATH_SEPARATOR);
    }
    out
}

/// Extension of the final path segment, without the dot
///
/// Returns an empty string when the final segment has no `.` or ends with one.
pub fn file_extension(path: &str) -> &str {
    let segment = path
        .rsplit_once(PATH_SEPARATOR)
        .map_or(path, |(_, last)| last);

    segment.rsplit_once('.').map_or("", |(_, ext)| ext)
}
