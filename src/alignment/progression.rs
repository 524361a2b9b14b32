//! Momentum-based alignment progression
//!
//! Doubling down gets easier the deeper a character already is; turning back
//! always costs exactly what was asked.
//!
//! - Inside the neutral band the request applies unchanged.
//! - Against the current leaning the request applies unchanged.
//! - With the current leaning the step grows by one point for every three
//!   tiers of depth (counting the current tier).

use crate::alignment::constants::{MOMENTUM_DIVISOR, TIER_WIDTH};
use crate::core::error::{AlignmentError, Result};
use serde::Serialize;

/// Which progression rule produced a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum AppliedRule {
    /// Current value is in the innermost band
    NeutralBand,
    /// Request pushes against the current leaning
    Reversal,
    /// Request reinforces the current leaning
    Reinforcement { momentum: i64 },
}

/// Outcome of a single progression step, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub raw: i64,
    pub applied: i64,
    #[serde(flatten)]
    pub rule: AppliedRule,
}

/// Compute the next raw (unclamped) value
pub fn step(current: i64, modification: Option<i64>) -> Result<i64> {
    step_detailed(current, modification).map(|s| s.raw)
}

/// Like [`step`], also reporting which rule applied
pub fn step_detailed(current: i64, modification: Option<i64>) -> Result<Step> {
    let modification = match modification {
        Some(m) if m != 0 => m,
        _ => return Err(AlignmentError::InvalidModification),
    };

    // Zero counts as the light side
    let current_sign: i64 = if current >= 0 { 1 } else { -1 };
    let mod_sign = modification.signum();
    let depth = current.saturating_abs() / TIER_WIDTH;

    let (applied, rule) = if depth == 0 {
        (modification, AppliedRule::NeutralBand)
    } else if current_sign * mod_sign < 0 {
        (modification, AppliedRule::Reversal)
    } else {
        let momentum = (depth + 1) / MOMENTUM_DIVISOR;
        let applied = if mod_sign > 0 {
            modification.saturating_add(momentum).max(1)
        } else {
            modification.saturating_sub(momentum).min(-1)
        };
        (applied, AppliedRule::Reinforcement { momentum })
    };

    Ok(Step {
        raw: current.saturating_add(applied),
        applied,
        rule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_and_absent() {
        assert!(matches!(step(10, Some(0)), Err(AlignmentError::InvalidModification)));
        assert!(matches!(step(10, None), Err(AlignmentError::InvalidModification)));
        assert!(matches!(step(-70, None), Err(AlignmentError::InvalidModification)));
    }

    #[test]
    fn test_neutral_band_unattenuated() {
        assert_eq!(step(5, Some(3)).unwrap(), 8);
        assert_eq!(step(-9, Some(-4)).unwrap(), -13);
        assert_eq!(step(0, Some(-1)).unwrap(), -1);
        assert_eq!(
            step_detailed(5, Some(3)).unwrap().rule,
            AppliedRule::NeutralBand
        );
    }

    #[test]
    fn test_reversal_unattenuated() {
        assert_eq!(step(50, Some(-3)).unwrap(), 47);
        assert_eq!(step(-90, Some(4)).unwrap(), -86);
        assert_eq!(step_detailed(50, Some(-3)).unwrap().rule, AppliedRule::Reversal);
    }

    #[test]
    fn test_reinforcement_accelerates() {
        // depth 5: (5 + 1) / 3 = 2
        assert_eq!(step(50, Some(3)).unwrap(), 55);
        assert_eq!(step(-50, Some(-3)).unwrap(), -55);

        // depth 1: (1 + 1) / 3 = 0
        assert_eq!(step(10, Some(1)).unwrap(), 11);

        // depth 2: (2 + 1) / 3 = 1
        assert_eq!(step(20, Some(1)).unwrap(), 22);

        // depth 10: (10 + 1) / 3 = 3
        let s = step_detailed(-100, Some(-1)).unwrap();
        assert_eq!(s.raw, -104);
        assert_eq!(s.rule, AppliedRule::Reinforcement { momentum: 3 });
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        assert_eq!(step(i64::MAX, Some(5)).unwrap(), i64::MAX);
        assert_eq!(step(i64::MIN, Some(-5)).unwrap(), i64::MIN);
        assert_eq!(step(0, Some(i64::MIN)).unwrap(), i64::MIN);
    }
}
