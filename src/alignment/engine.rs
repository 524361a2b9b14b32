//! Alignment engine - the entry points collaborators call
//!
//! Each call coerces its inputs, runs one progression step, clamps the
//! result onto the axis and derives the new tier.

use crate::alignment::power::PowerType;
use crate::alignment::progression::{self, Step};
use crate::alignment::scale::{clamp, compute_tier, AlignmentValue, Tier};
use crate::core::error::Result;
use crate::core::types::NumericInput;
use serde::{Deserialize, Serialize};

/// Request to move alignment by a number of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRequest {
    pub original_value: NumericInput,
    #[serde(default)]
    pub modification: Option<NumericInput>,
}

impl AlignmentRequest {
    pub fn new(original_value: impl Into<NumericInput>, modification: impl Into<NumericInput>) -> Self {
        Self {
            original_value: original_value.into(),
            modification: Some(modification.into()),
        }
    }
}

/// Request to move alignment by using a power
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerAlignmentRequest {
    pub original_value: NumericInput,
    #[serde(default)]
    pub power_type: Option<PowerType>,
}

impl PowerAlignmentRequest {
    pub fn new(original_value: impl Into<NumericInput>, power_type: PowerType) -> Self {
        Self {
            original_value: original_value.into(),
            power_type: Some(power_type),
        }
    }
}

/// Alignment value with its derived tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignmentReading {
    pub value: AlignmentValue,
    pub tier: Tier,
}

impl AlignmentReading {
    /// Clamp a raw value and derive its tier
    pub fn from_raw(raw: i64) -> Self {
        let value = clamp(raw);
        Self {
            value,
            tier: compute_tier(value),
        }
    }
}

/// Apply a numeric modification
pub fn compute_alignment(request: &AlignmentRequest) -> Result<AlignmentReading> {
    progress_alignment(request).map(|(reading, _)| reading)
}

/// Like [`compute_alignment`], also returning the step that was applied
pub fn progress_alignment(request: &AlignmentRequest) -> Result<(AlignmentReading, Step)> {
    let original = request.original_value.coerce("originalValue")?;
    let modification = request
        .modification
        .as_ref()
        .map(|m| m.coerce("modification"))
        .transpose()?;

    let step = progression::step_detailed(original, modification)?;
    let reading = AlignmentReading::from_raw(step.raw);

    tracing::debug!(
        original,
        applied = step.applied,
        raw = step.raw,
        value = reading.value.get(),
        tier = reading.tier.get(),
        rule = ?step.rule,
        "alignment progressed"
    );

    Ok((reading, step))
}

/// Apply the modifier carried by a power type
///
/// Universal powers carry no direction, so they leave alignment where it is
/// rather than failing as a zero modification would.
pub fn compute_power_to_alignment(request: &PowerAlignmentRequest) -> Result<AlignmentReading> {
    progress_power(request).map(|(reading, _)| reading)
}

/// Like [`compute_power_to_alignment`]; the step is `None` for universal powers
pub fn progress_power(request: &PowerAlignmentRequest) -> Result<(AlignmentReading, Option<Step>)> {
    let power = request.power_type.unwrap_or_default();
    let modifier = power.alignment_modifier();

    if modifier == 0 {
        let original = request.original_value.coerce("originalValue")?;
        tracing::debug!(original, power = %power, "power carries no alignment charge");
        return Ok((AlignmentReading::from_raw(original), None));
    }

    let (reading, step) = progress_alignment(&AlignmentRequest {
        original_value: request.original_value.clone(),
        modification: Some(NumericInput::Integer(modifier)),
    })?;
    Ok((reading, Some(step)))
}
