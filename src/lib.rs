//! Force Alignment - light/dark alignment progression for tabletop rule sets

pub mod alignment;
pub mod caster;
pub mod core;
pub mod rules;

pub use alignment::{
    check_changed_tier_effect, compute_alignment, compute_power_to_alignment, AlignmentReading,
    AlignmentRequest, AlignmentValue, PowerAlignmentRequest, PowerType, Tier, TierEffect,
    TierEffectConfig,
};
pub use caster::{casting_attack_modifier, casting_dc, CasterStats};
pub use crate::core::{AlignmentError, NumericInput, Result, RulesetConfig};
pub use rules::{load_ruleset, AlignmentShift};
