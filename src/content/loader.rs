//! Loader for the RON configuration file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::CatConfig;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a config from RON text. `origin` is only used in error messages.
pub fn parse_cat_config(contents: &str, origin: &str) -> Result<CatConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: origin.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the cat config from a RON file on disk.
pub fn load_cat_config(path: &Path) -> Result<CatConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_cat_config(&contents, &file_name)
}
