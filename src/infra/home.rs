//! Home directory shorthand expansion
//!
//! Replaces a leading `~` path component with the current user's home
//! directory as reported by the platform (`$HOME` on Unix, the profile
//! directory on Windows). Paths that don't start with `~` pass through
//! unchanged. `~user` is rejected rather than guessed at.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::config::defaults::HOME_MARKER;
use crate::error::PathError;

/// Expand a leading `~` to the current user's home directory
pub fn expand_home(path: &Path) -> Result<PathBuf, PathError> {
    expand_with(path, dirs::home_dir)
}

/// Expansion with an explicit home resolver
fn expand_with<F>(path: &Path, resolve_home: F) -> Result<PathBuf, PathError>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };

    if !is_marker(first) {
        if first.to_string_lossy().starts_with(HOME_MARKER) {
            return Err(PathError::UnsupportedUserHome {
                path: path.to_path_buf(),
            });
        }
        return Ok(path.to_path_buf());
    }

    let home = resolve_home().ok_or_else(|| PathError::HomeExpansion {
        path: path.to_path_buf(),
    })?;

    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

fn is_marker(component: &OsStr) -> bool {
    let mut chars = component.to_str().unwrap_or_default().chars();
    chars.next() == Some(HOME_MARKER) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/tester"))
    }

    #[test]
    fn test_tilde_alone_is_home() {
        let expanded = expand_with(Path::new("~"), fake_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester"));
    }

    #[test]
    fn test_tilde_prefix_is_joined() {
        let expanded = expand_with(Path::new("~/test-dir/file.txt"), fake_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester/test-dir/file.txt"));
    }

    #[test]
    fn test_tilde_with_trailing_slash() {
        let expanded = expand_with(Path::new("~/"), fake_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester"));
    }

    #[test]
    fn test_plain_paths_unchanged() {
        for input in ["/abs/path", "relative/path", "", "./~/odd", "/~/not-leading"] {
            let expanded = expand_with(Path::new(input), || unreachable!()).unwrap();
            assert_eq!(expanded, PathBuf::from(input));
        }
    }

    #[test]
    fn test_tilde_user_rejected() {
        let err = expand_with(Path::new("~bob/notes"), fake_home).unwrap_err();
        assert!(matches!(err, PathError::UnsupportedUserHome { .. }));
    }

    #[test]
    fn test_missing_home_is_error() {
        let err = expand_with(Path::new("~/x"), || None).unwrap_err();
        assert!(matches!(err, PathError::HomeExpansion { .. }));
        assert_eq!(err.path(), Path::new("~/x"));
    }

    #[test]
    fn test_real_home_is_absolute() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_home(Path::new("~/test-dir")).unwrap();
            assert!(expanded.starts_with(&home));
            assert!(expanded.ends_with("test-dir"));
        }
    }
}
