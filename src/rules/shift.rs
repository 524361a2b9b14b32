//! Alignment shifts - progression plus the tier effect it triggers
//!
//! This is the full round a character sheet performs when an action moves a
//! character's alignment: read the stored value, progress it, and find out
//! whether the new tier surfaces an effect.

use crate::alignment::{
    progress_alignment, progress_power, resolve_tier_change, AlignmentReading, AlignmentRequest,
    PowerAlignmentRequest, Step, Tier, TierEffect,
};
use crate::core::config::RulesetConfig;
use crate::core::error::Result;
use crate::core::types::NumericInput;
use serde::Serialize;

/// Before/after readings and the resulting tier effect, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentShift {
    pub before: AlignmentReading,
    pub after: AlignmentReading,
    /// Progression step that produced `after`; `None` for universal powers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
    pub effect: Option<TierEffect>,
}

impl AlignmentShift {
    pub fn tier_changed(&self) -> bool {
        self.before.tier != self.after.tier
    }
}

impl RulesetConfig {
    /// Effect for a tier change under this ruleset
    pub fn resolve_tier_change(&self, before: Tier, after: Tier) -> Option<TierEffect> {
        if self.ignore_alignment_effects {
            return None;
        }
        resolve_tier_change(before, after, &self.tier_effects)
    }

    /// Shift alignment by a number of points
    pub fn shift_by_points(&self, request: &AlignmentRequest) -> Result<AlignmentShift> {
        let before = reading_of(&request.original_value)?;
        let (after, step) = progress_alignment(request)?;
        Ok(self.finish(before, after, Some(step)))
    }

    /// Shift alignment by using a power
    pub fn shift_by_power(&self, request: &PowerAlignmentRequest) -> Result<AlignmentShift> {
        let before = reading_of(&request.original_value)?;
        let (after, step) = progress_power(request)?;
        Ok(self.finish(before, after, step))
    }

    fn finish(
        &self,
        before: AlignmentReading,
        after: AlignmentReading,
        step: Option<Step>,
    ) -> AlignmentShift {
        let effect = self.resolve_tier_change(before.tier, after.tier);
        if let Some(effect) = &effect {
            tracing::info!(
                "Alignment moved {} -> {} (tier {} -> {})",
                before.value,
                after.value,
                before.tier.label(),
                effect.tier.label()
            );
        }
        AlignmentShift {
            before,
            after,
            step,
            effect,
        }
    }
}

fn reading_of(original: &NumericInput) -> Result<AlignmentReading> {
    Ok(AlignmentReading::from_raw(original.coerce("originalValue")?))
}
