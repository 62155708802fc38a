//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::services::Session;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Cloning is cheap: both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The coaching session; writers are serialized by the lock
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    /// Create a new application state with an empty session
    pub fn new(config: AppConfig) -> Self {
        let session = Session::new(config.nutrition.policy(), config.nutrition.bands());
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn session(&self) -> &RwLock<Session> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_session() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();

        {
            let mut session = cloned.session().write().await;
            session
                .log_food("Egg (1 large)", 1.0, chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
                .unwrap();
        }

        assert_eq!(state.session().read().await.log().len(), 1);
    }

    #[tokio::test]
    async fn test_session_uses_configured_policy() {
        let mut config = AppConfig::default();
        config.nutrition.obesity_factor = 0.8;
        let state = AppState::new(config);
        assert_eq!(state.session().read().await.policy().obesity_factor, 0.8);
    }
}
