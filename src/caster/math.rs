//! Casting difficulty and attack arithmetic

use serde::{Deserialize, Serialize};

/// Base difficulty class before proficiency and ability modifier
pub const CASTING_BASE_DC: i32 = 8;

/// The two numbers casting math depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasterStats {
    pub proficiency_bonus: i32,
    pub modifier: i32,
}

/// Save DC and attack bonus as shown for force or tech casting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastingSummary {
    pub dc: i32,
    pub attack_bonus: i32,
}

impl CasterStats {
    pub fn new(proficiency_bonus: i32, modifier: i32) -> Self {
        Self {
            proficiency_bonus,
            modifier,
        }
    }

    pub fn summary(&self) -> CastingSummary {
        CastingSummary {
            dc: casting_dc(self),
            attack_bonus: casting_attack_modifier(self),
        }
    }
}

/// Saturates at the `i32` bounds on absurd stat blocks
pub fn casting_dc(stats: &CasterStats) -> i32 {
    CASTING_BASE_DC.saturating_add(casting_attack_modifier(stats))
}

pub fn casting_attack_modifier(stats: &CasterStats) -> i32 {
    stats.proficiency_bonus.saturating_add(stats.modifier)
}
