//! Fixture configuration.

use crate::storage::CONTENT_ROOT_PATH;

/// Configuration for constructing a fixture database.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the backing store the fixture is bound to.
    pub database_name: String,

    /// Full path of the content root every parentless item lands under.
    pub content_root_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_name: "master".to_owned(),
            content_root_path: CONTENT_ROOT_PATH.to_owned(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backing store name.
    #[must_use]
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Sets the content-root path.
    #[must_use]
    pub fn content_root_path(mut self, path: impl Into<String>) -> Self {
        self.content_root_path = path.into();
        self
    }
}
