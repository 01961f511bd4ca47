pub mod build;
pub mod parse;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
use paneling::config::DEFAULT_CONFIG_PATH;
use paneling::{ConfigFile, Paneling};
use tracing::debug;

/// Loads the config file (defaults when absent) and builds the route
///
/// Without an explicit path, `paneling.toml` in the working directory is used.
pub fn load_paneling(config: Option<&Path>) -> Result<Paneling<String>> {
    let file = match config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };
    debug!(panels = file.panels.len(), path = ?file.paneling.path, "config loaded");

    let source = config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    Paneling::from_config_file(&file)
        .with_context(|| format!("Invalid configuration in {:?}", source))
}

#[cfg(test)]
pub(crate) fn sample_config() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("paneling.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let paneling = load_paneling(Some(Path::new("no/such/dir/paneling.toml"))).unwrap();
        assert_eq!(paneling.separator(), ':');
        assert_eq!(paneling.route_path(), "*");
        assert!(paneling.registry().is_empty());
    }

    #[test]
    fn test_sample_config_loads() {
        let paneling = load_paneling(Some(sample_config().as_path())).unwrap();
        assert_eq!(paneling.separator(), ';');
        assert_eq!(paneling.route_path(), "/paneling/*");
        assert!(paneling.registry().contains("extra:"));
    }
}
