//! Load rulesets from TOML files

use crate::core::config::RulesetConfig;
use crate::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Load and validate a ruleset file
pub fn load_ruleset(path: &Path) -> Result<RulesetConfig> {
    let content = fs::read_to_string(path)?;
    let config = RulesetConfig::from_toml_str(&content)?;

    tracing::info!(
        "Loaded ruleset {:?} ({} tier effects)",
        path,
        config.tier_effects.len()
    );
    Ok(config)
}

/// Load a ruleset if the file exists, otherwise fall back to the defaults
pub fn load_ruleset_or_default(path: &Path) -> Result<RulesetConfig> {
    if path.exists() {
        load_ruleset(path)
    } else {
        tracing::warn!("Ruleset {:?} not found - using built-in defaults", path);
        Ok(RulesetConfig::default())
    }
}

/// Get path to the bundled ruleset file
pub fn default_ruleset_path() -> PathBuf {
    PathBuf::from("data").join("ruleset.toml")
}
