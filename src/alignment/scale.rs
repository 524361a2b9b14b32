//! Alignment scale - the bounded light/dark axis and its tiers
//!
//! Values live on [-100, 100]. Tiers bucket the axis into 21 bands:
//! positive values round down, negative values round toward zero, so the
//! bands are symmetric around the neutral tier.

use crate::alignment::constants::{ALIGNMENT_MAX, ALIGNMENT_MIN, TIER_MAX, TIER_MIN, TIER_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the alignment axis, always within bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AlignmentValue(i32);

impl AlignmentValue {
    pub const NEUTRAL: AlignmentValue = AlignmentValue(0);

    /// Clamp a raw value onto the axis
    pub fn clamp(raw: i64) -> Self {
        Self(raw.clamp(ALIGNMENT_MIN, ALIGNMENT_MAX) as i32)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn tier(self) -> Tier {
        compute_tier(self)
    }
}

impl fmt::Display for AlignmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the axis a tier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Dark,
    Neutral,
    Light,
}

/// Discrete alignment band in [-10, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Tier(i8);

impl Tier {
    pub const NEUTRAL: Tier = Tier(0);
    pub const MIN: Tier = Tier(TIER_MIN);
    pub const MAX: Tier = Tier(TIER_MAX);

    /// Checked construction; `None` outside [-10, 10]
    pub fn new(raw: i64) -> Option<Self> {
        if (TIER_MIN as i64..=TIER_MAX as i64).contains(&raw) {
            Some(Self(raw as i8))
        } else {
            None
        }
    }

    pub fn get(self) -> i8 {
        self.0
    }

    pub fn side(self) -> Side {
        match self.0 {
            0 => Side::Neutral,
            t if t > 0 => Side::Light,
            _ => Side::Dark,
        }
    }

    /// Distance from neutral (0..=10)
    pub fn depth(self) -> u8 {
        self.0.unsigned_abs()
    }

    /// Display label, e.g. "Dark 3", "Neutral", "Light 10"
    pub fn label(self) -> String {
        match self.side() {
            Side::Neutral => "Neutral".to_string(),
            Side::Light => format!("Light {}", self.depth()),
            Side::Dark => format!("Dark {}", self.depth()),
        }
    }

    /// All tiers from darkest to lightest
    pub fn all() -> impl Iterator<Item = Tier> {
        (TIER_MIN..=TIER_MAX).map(Tier)
    }
}

impl TryFrom<i64> for Tier {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Tier::new(raw).ok_or_else(|| format!("tier {} outside [{}, {}]", raw, TIER_MIN, TIER_MAX))
    }
}

impl From<Tier> for i64 {
    fn from(tier: Tier) -> i64 {
        tier.0 as i64
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamp a raw value onto [-100, 100]
pub fn clamp(raw: i64) -> AlignmentValue {
    AlignmentValue::clamp(raw)
}

/// Map a value to its tier
///
/// Integer division truncates toward zero, which is `floor` on the light side
/// and `ceil` on the dark side.
pub fn compute_tier(value: AlignmentValue) -> Tier {
    Tier((value.get() as i64 / TIER_WIDTH) as i8)
}
