//! Integration test for the `PATHKIT_VERBOSITY` override
//!
//! Kept in its own test binary since it mutates the process environment.

use pathkit::{PathService, PathServiceConfig};

#[test]
fn test_env_override() {
    std::env::set_var("PATHKIT_VERBOSITY", "3");
    assert_eq!(PathServiceConfig::from_env().verbosity, 3);

    std::env::set_var("PATHKIT_VERBOSITY", "99");
    assert_eq!(PathServiceConfig::from_env().verbosity, 4);

    std::env::set_var("PATHKIT_VERBOSITY", "chatty");
    assert_eq!(PathServiceConfig::from_env().verbosity, 0);

    std::env::remove_var("PATHKIT_VERBOSITY");
    assert_eq!(PathServiceConfig::from_env(), PathServiceConfig::default());

    let fs = PathService::new(PathServiceConfig::new(1).with_env_override());
    assert_eq!(fs.config().verbosity, 1);
}
