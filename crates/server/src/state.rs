//! Application state

use std::sync::Arc;

use parking_lot::RwLock;
use voice_form_config::{load_settings, Settings};
use voice_form_text_processing::FormExtractor;

use crate::ServerError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Current settings, replaced on reload
    pub config: Arc<RwLock<Settings>>,
    /// Current extractor; requests clone the inner `Arc` and never hold the lock
    extractor: Arc<RwLock<Arc<FormExtractor>>>,
    /// Environment name for config reload
    env: Option<String>,
}

impl AppState {
    /// Build state and the extractor described by `config`
    pub fn new(config: Settings) -> Self {
        let extractor = FormExtractor::from_config(&config.extraction);
        Self {
            config: Arc::new(RwLock::new(config)),
            extractor: Arc::new(RwLock::new(Arc::new(extractor))),
            env: None,
        }
    }

    /// Set the environment used by [`AppState::reload_config`]
    pub fn with_env(mut self, env: Option<String>) -> Self {
        self.env = env;
        self
    }

    /// Replace the extractor, e.g. with a custom recognizer
    pub fn with_extractor(self, extractor: FormExtractor) -> Self {
        *self.extractor.write() = Arc::new(extractor);
        self
    }

    pub fn extractor(&self) -> Arc<FormExtractor> {
        self.extractor.read().clone()
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Reload settings from disk and environment, then rebuild the extractor
    ///
    /// Server settings (bind address, CORS, timeout) only apply at startup.
    pub fn reload_config(&self) -> Result<(), ServerError> {
        let new_config = load_settings(self.env.as_deref())
            .map_err(|e| ServerError::Config(format!("Failed to reload config: {}", e)))?;

        let extractor = Arc::new(FormExtractor::from_config(&new_config.extraction));
        let recognizer = extractor.recognizer_name().to_string();

        *self.extractor.write() = extractor;
        *self.config.write() = new_config;

        tracing::info!(recognizer = %recognizer, "Configuration reloaded successfully");
        Ok(())
    }
}
