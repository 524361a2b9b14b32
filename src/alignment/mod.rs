//! Light/dark alignment: scale, progression, engine and tier effects

pub mod constants;
pub mod engine;
pub mod power;
pub mod progression;
pub mod scale;
pub mod tier_effect;

pub use engine::{
    compute_alignment, compute_power_to_alignment, progress_alignment, progress_power,
    AlignmentReading, AlignmentRequest, PowerAlignmentRequest,
};
pub use power::PowerType;
pub use progression::{step, step_detailed, AppliedRule, Step};
pub use scale::{clamp, compute_tier, AlignmentValue, Side, Tier};
pub use tier_effect::{
    check_changed_tier_effect, resolve_tier_change, EffectProperties, TierEffect, TierEffectConfig,
};
