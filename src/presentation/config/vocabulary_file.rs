use std::path::Path;

use config::{Config, File};

use crate::domain::Vocabulary;

use super::configuration_error::ConfigurationError;

/// Loads a TOML, JSON or YAML vocabulary file; absent tables keep their
/// built-in defaults.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ConfigurationError> {
    let config = Config::builder().add_source(File::from(path)).build()?;
    Ok(config.try_deserialize()?)
}
