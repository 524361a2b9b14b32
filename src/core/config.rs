//! Ruleset configuration
//!
//! Rule tables that vary between campaigns live here and are loaded from
//! TOML. The axis itself is fixed (see `alignment::constants`).

use crate::alignment::{EffectProperties, Tier, TierEffectConfig};
use crate::core::error::{AlignmentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for alignment side effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesetConfig {
    /// Skip tier-change effects entirely
    ///
    /// Characters flagged this way still progress normally but never
    /// surface a tier effect.
    #[serde(default)]
    pub ignore_alignment_effects: bool,

    /// Effects registered per tier
    ///
    /// Odd tiers carry a save DC by default, rising by 2 every two tiers
    /// away from neutral.
    #[serde(default = "default_tier_effects")]
    pub tier_effects: TierEffectConfig,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self {
            ignore_alignment_effects: false,
            tier_effects: default_tier_effects(),
        }
    }
}

/// The standard tier progression: DC 12 at tier 1, +2 per odd tier up to DC 20
pub fn default_tier_effects() -> TierEffectConfig {
    let mut config = TierEffectConfig::new();
    for (depth, dc) in [(1, 12), (3, 14), (5, 16), (7, 18), (9, 20)] {
        for tier in [depth, -depth] {
            if let Some(tier) = Tier::new(tier) {
                config.insert(tier, dc_effect(dc));
            }
        }
    }
    config
}

fn dc_effect(dc: i64) -> EffectProperties {
    let mut props = EffectProperties::new();
    props.insert("dc".to_string(), Value::from(dc));
    props
}

impl RulesetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML ruleset
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RulesetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (tier, props) in self.tier_effects.iter() {
            if let Some(dc) = props.get("dc") {
                if !dc.is_i64() && !dc.is_u64() {
                    return Err(AlignmentError::InvalidRuleset(format!(
                        "tier {} has non-integer dc {}",
                        tier, dc
                    )));
                }
            }
        }
        Ok(())
    }
}
