//! Alignment axis constants - all tunable values in one place

// Axis bounds
pub const ALIGNMENT_MIN: i64 = -100;
pub const ALIGNMENT_MAX: i64 = 100;

// Tier bucketing: 100 points split into 10 bands per side
pub const TIER_WIDTH: i64 = 10;
pub const TIER_MIN: i8 = -10;
pub const TIER_MAX: i8 = 10;

// Every MOMENTUM_DIVISOR tiers of depth add one point to a reinforcing step
pub const MOMENTUM_DIVISOR: i64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_symmetric() {
        assert_eq!(ALIGNMENT_MIN, -ALIGNMENT_MAX);
        assert_eq!(TIER_MIN, -TIER_MAX);
    }

    #[test]
    fn test_tiers_cover_axis() {
        assert_eq!(ALIGNMENT_MAX / TIER_WIDTH, TIER_MAX as i64);
    }
}
