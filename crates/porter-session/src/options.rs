//! Session store configuration.

use porter_core::logger::LoggerConfig;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Route the store navigates to after logout (default: `/`).
    pub home_path: String,

    /// Logger configuration.
    pub logger: LoggerConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            home_path: "/".to_string(),
            logger: LoggerConfig::default(),
        }
    }
}
