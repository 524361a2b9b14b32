//! Alignment engine integration tests
//!
//! These tests drive the public API end-to-end the way a character sheet
//! would: hand in the stored value, get back the new value and tier, then
//! ask whether the tier change surfaces an effect.

use force_alignment::alignment::{
    check_changed_tier_effect, clamp, compute_alignment, compute_power_to_alignment, compute_tier,
    step, AlignmentRequest, PowerAlignmentRequest, PowerType, Tier, TierEffectConfig,
};
use force_alignment::caster::{casting_attack_modifier, casting_dc, CasterStats};
use force_alignment::AlignmentError;
use serde_json::json;

#[test]
fn test_zero_modification_rejected() {
    for value in [-100, -42, 0, 7, 100] {
        assert!(matches!(step(value, Some(0)), Err(AlignmentError::InvalidModification)));
        assert!(matches!(step(value, None), Err(AlignmentError::InvalidModification)));
    }
}

#[test]
fn test_neutral_band_full_application() {
    let reading = compute_alignment(&AlignmentRequest::new(5, 3)).unwrap();
    assert_eq!(reading.value.get(), 8);
    assert_eq!(reading.tier, Tier::NEUTRAL);
}

#[test]
fn test_reversal_full_application() {
    let reading = compute_alignment(&AlignmentRequest::new(50, -3)).unwrap();
    assert_eq!(reading.value.get(), 47);
    assert_eq!(reading.tier.get(), 4);
}

#[test]
fn test_reinforcement_acceleration() {
    let reading = compute_alignment(&AlignmentRequest::new(50, 3)).unwrap();
    assert_eq!(reading.value.get(), 55);
    assert_eq!(reading.tier.get(), 5);
}

#[test]
fn test_power_type_mapping() {
    let light = compute_power_to_alignment(&PowerAlignmentRequest::new(0, PowerType::Light)).unwrap();
    assert_eq!(light, compute_alignment(&AlignmentRequest::new(0, 1)).unwrap());

    let dark = compute_power_to_alignment(&PowerAlignmentRequest::new(0, PowerType::Dark)).unwrap();
    assert_eq!(dark, compute_alignment(&AlignmentRequest::new(0, -1)).unwrap());

    let universal =
        compute_power_to_alignment(&PowerAlignmentRequest::new(0, PowerType::Universal)).unwrap();
    assert_eq!(universal.value.get(), 0);
    assert_eq!(universal.tier, Tier::NEUTRAL);
}

#[test]
fn test_boundary_saturation() {
    let reading = compute_alignment(&AlignmentRequest::new(99, 50)).unwrap();
    assert_eq!(reading.value.get(), 100);
}

#[test]
fn test_tier_effect_same_tier() {
    let config: TierEffectConfig = serde_json::from_value(json!({"3": {"dc": 14}})).unwrap();
    assert!(check_changed_tier_effect(Some(3), Some(3), &config).is_none());
}

#[test]
fn test_tier_effect_lookup() {
    let config: TierEffectConfig = serde_json::from_value(json!({"1": {"dc": 12}})).unwrap();
    let effect = check_changed_tier_effect(Some(0), Some(1), &config).unwrap();
    assert_eq!(serde_json::to_value(effect).unwrap(), json!({"tier": 1, "dc": 12}));
}

#[test]
fn test_caster_math() {
    let stats = CasterStats::new(2, 3);
    assert_eq!(casting_dc(&stats), 13);
    assert_eq!(casting_attack_modifier(&stats), 5);
}

#[test]
fn test_clamp_and_tier_at_edges() {
    assert_eq!(compute_tier(clamp(-100)), Tier::MIN);
    assert_eq!(compute_tier(clamp(100)), Tier::MAX);
    assert_eq!(compute_tier(clamp(0)), Tier::NEUTRAL);
}

/// A light-sided character repeatedly using dark powers walks back to
/// neutral one point at a time, then keeps falling at an accelerating pace.
#[test]
fn test_long_fall_to_the_dark_side() {
    let mut value: i64 = 25;
    let mut tiers_seen = Vec::new();

    for _ in 0..200 {
        let reading =
            compute_power_to_alignment(&PowerAlignmentRequest::new(value, PowerType::Dark)).unwrap();
        assert!(reading.value.get() < value as i32 || reading.value.get() == -100);
        value = reading.value.get() as i64;
        if tiers_seen.last() != Some(&reading.tier) {
            tiers_seen.push(reading.tier);
        }
    }

    assert_eq!(value, -100);
    assert_eq!(tiers_seen.first().map(|t| t.get()), Some(2));
    assert_eq!(tiers_seen.last(), Some(&Tier::MIN));
    // Tiers are visited in order without skipping on the way through neutral
    assert!(tiers_seen.windows(2).all(|w| w[0].get() - w[1].get() == 1));
}

#[test]
fn test_json_request_round() {
    let request: AlignmentRequest =
        serde_json::from_value(json!({"originalValue": "-60", "modification": "-2"})).unwrap();
    let reading = compute_alignment(&request).unwrap();
    assert_eq!(serde_json::to_value(reading).unwrap(), json!({"value": -64, "tier": -6}));
}
