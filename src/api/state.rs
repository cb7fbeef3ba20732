//! Application state for the wage engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, WagePolicy};

/// Shared application state.
///
/// Holds the wage policy loaded at startup. It is read-only after load and
/// shared between handlers through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Shorthand for the loaded wage policy.
    pub fn policy(&self) -> &WagePolicy {
        self.config.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_policy() {
        let state = AppState::new(ConfigLoader::from_policy(WagePolicy::default()));
        let cloned = state.clone();
        assert!(std::ptr::eq(state.policy(), cloned.policy()));
    }
}
