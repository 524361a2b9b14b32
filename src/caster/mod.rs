//! Caster helpers used by character sheets

pub mod math;
pub mod modifiers;

pub use math::{casting_attack_modifier, casting_dc, CasterStats, CastingSummary, CASTING_BASE_DC};
pub use modifiers::{allowed_modifiers, check_power_modifier, Ability, ModifierCheck, PowerKind};
