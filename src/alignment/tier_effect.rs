//! Tier effects - consequences registered for entering a tier

use crate::alignment::scale::Tier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Open-ended effect properties (e.g. `{"dc": 14}`)
pub type EffectProperties = Map<String, Value>;

/// Effects keyed by the tier that triggers them
///
/// In files, tiers are written as string keys (`"-9"`, `"1"`). `null`
/// entries mean nothing is registered for that tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<EffectProperties>>",
    into = "BTreeMap<String, EffectProperties>"
)]
pub struct TierEffectConfig {
    effects: BTreeMap<Tier, EffectProperties>,
}

impl TierEffectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: Tier) -> Option<&EffectProperties> {
        self.effects.get(&tier)
    }

    /// Register an effect, dropping any `tier` key so the resolved tier wins
    pub fn insert(&mut self, tier: Tier, mut properties: EffectProperties) {
        if properties.remove("tier").is_some() {
            tracing::warn!(tier = tier.get(), "ignoring 'tier' key inside tier effect");
        }
        self.effects.insert(tier, properties);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &EffectProperties)> {
        self.effects.iter().map(|(tier, props)| (*tier, props))
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Option<EffectProperties>>> for TierEffectConfig {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Option<EffectProperties>>) -> Result<Self, Self::Error> {
        let mut config = TierEffectConfig::new();
        for (key, properties) in raw {
            let tier = key
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(Tier::new)
                .ok_or_else(|| format!("tier effect key {:?} is not a tier in [-10, 10]", key))?;
            if let Some(properties) = properties {
                config.insert(tier, properties);
            }
        }
        Ok(config)
    }
}

impl From<TierEffectConfig> for BTreeMap<String, EffectProperties> {
    fn from(config: TierEffectConfig) -> Self {
        config
            .effects
            .into_iter()
            .map(|(tier, props)| (tier.to_string(), props))
            .collect()
    }
}

/// Effect surfaced by a tier change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierEffect {
    pub tier: Tier,
    #[serde(flatten)]
    pub properties: EffectProperties,
}

/// Decide whether moving from `current_tier` to `new_tier` surfaces an effect
///
/// Both tiers are required, and `0` counts as present. An absent tier or an
/// integer outside [-10, 10] is a caller bug. It is logged, each with its own
/// message, and treated as no change.
pub fn check_changed_tier_effect(
    current_tier: Option<i64>,
    new_tier: Option<i64>,
    config: &TierEffectConfig,
) -> Option<TierEffect> {
    let (Some(current_raw), Some(new_raw)) = (current_tier, new_tier) else {
        tracing::error!(
            ?current_tier,
            ?new_tier,
            "tier effect check requires both current and new tier"
        );
        return None;
    };

    let (Some(current), Some(new)) = (Tier::new(current_raw), Tier::new(new_raw)) else {
        tracing::error!(
            current_tier = current_raw,
            new_tier = new_raw,
            "tier effect check given a tier outside [-10, 10]"
        );
        return None;
    };

    resolve_tier_change(current, new, config)
}

/// Typed variant of [`check_changed_tier_effect`]
pub fn resolve_tier_change(current: Tier, new: Tier, config: &TierEffectConfig) -> Option<TierEffect> {
    if current == new {
        return None;
    }

    let properties = config.get(new).cloned().unwrap_or_default();
    tracing::debug!(
        from = current.get(),
        to = new.get(),
        registered = !properties.is_empty(),
        "tier changed"
    );

    Some(TierEffect { tier: new, properties })
}
