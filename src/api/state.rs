//! Application state for the Attendance and Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyConfig;
use crate::store::Store;

/// Shared application state.
///
/// Contains the storage collaborator and the loaded policy, shared
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    policy: Arc<PolicyConfig>,
}

impl AppState {
    /// Creates a new application state over a store and a policy.
    pub fn new(store: Arc<dyn Store>, policy: PolicyConfig) -> Self {
        Self {
            store,
            policy: Arc::new(policy),
        }
    }

    /// Returns the storage collaborator.
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Returns the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_store_and_policy() {
        let state = AppState::new(Arc::new(MemoryStore::new()), PolicyConfig::default());
        assert!(state.store().employees().unwrap().is_empty());
        assert_eq!(state.policy().payroll.default_working_days, 26);
    }
}
