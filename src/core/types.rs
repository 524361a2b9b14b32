//! Core type definitions used throughout the codebase

use crate::core::error::{AlignmentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest float magnitude that converts to an integer without losing precision
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A numeric-like value handed in by a collaborator
///
/// Character records store alignment as whatever the host gave them, so the
/// engine accepts integers, floats, and numeric text and coerces them itself.
///
/// The alignment axis is integral: only whole numbers coerce. Fractional
/// values (`0.5`, `"12.5"`) are rejected with `InvalidInput` rather than
/// rounded, so a caller never moves alignment by an amount it did not ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericInput {
    /// Coerce to an integer, failing with `InvalidInput` for anything that is
    /// not a whole number (fractions included)
    pub fn coerce(&self, field: &'static str) -> Result<i64> {
        match self {
            NumericInput::Integer(n) => Ok(*n),
            NumericInput::Float(f) => {
                float_to_integer(*f).ok_or_else(|| AlignmentError::invalid_input(field, f))
            }
            NumericInput::Text(text) => {
                let trimmed = text.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Ok(n);
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(float_to_integer)
                    .ok_or_else(|| AlignmentError::invalid_input(field, text))
            }
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Integer(n) => write!(f, "{}", n),
            NumericInput::Float(x) => write!(f, "{}", x),
            NumericInput::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        NumericInput::Integer(n)
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        NumericInput::Integer(n.into())
    }
}

impl From<f64> for NumericInput {
    fn from(f: f64) -> Self {
        NumericInput::Float(f)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}
