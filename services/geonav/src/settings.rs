//! Navigation configuration loading for the CLI.
//!
//! Precedence, lowest first: built-in defaults, `GEONAV_*` environment
//! variables (or a YAML file when `--config` is given), command-line flags.

use anyhow::{anyhow, Context, Result};
use projection::NavigationConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::Args;

/// Parse a YAML configuration document. Missing fields take defaults.
pub fn from_yaml_str(text: &str) -> Result<NavigationConfig> {
    let config: NavigationConfig =
        serde_yaml::from_str(text).context("Failed to parse navigation configuration")?;
    Ok(config)
}

/// Load a YAML configuration file.
pub fn from_yaml_file(path: &Path) -> Result<NavigationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    from_yaml_str(&text).with_context(|| format!("In config file {}", path.display()))
}

/// Apply command-line overrides.
pub fn apply_overrides(config: &mut NavigationConfig, args: &Args) {
    if let Some(sub_lon) = args.sub_lon {
        config.sub_satellite_longitude = sub_lon;
    }
    if let Some(convention) = &args.convention {
        config.scan_convention = convention.clone();
    }
    if let Some(geoid) = &args.geoid {
        config.geoid = Some(geoid.clone());
    }
    if let Some(resolution) = args.resolution {
        config.abi_resolution_km = resolution;
        // An explicit grid would no longer match the ABI resolution
        config.fgf = None;
        config.grid_width = None;
        config.grid_height = None;
    }
}

/// Resolve and validate the configuration for this invocation.
pub fn load(args: &Args) -> Result<NavigationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            from_yaml_file(path)?
        }
        None => NavigationConfig::from_env(),
    };

    apply_overrides(&mut config, args);

    config
        .validate()
        .map_err(|e| anyhow!("Invalid navigation configuration: {}", e))?;

    debug!(
        sub_lon = config.sub_satellite_longitude,
        convention = %config.scan_convention,
        geoid = ?config.geoid,
        "Resolved navigation configuration"
    );

    Ok(config)
}
