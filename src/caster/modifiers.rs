//! Which ability a power must be cast with
//!
//! Tech powers are always Intelligence. Force powers follow their alignment:
//! light uses Wisdom, dark uses Charisma, universal accepts either.

use crate::alignment::PowerType;
use crate::core::error::{AlignmentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "cha")]
    Charisma,
}

impl Ability {
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}

impl FromStr for Ability {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Ability::all()
            .iter()
            .find(|a| a.abbreviation() == wanted || a.name().eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| AlignmentError::invalid_input("ability", s))
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Power families with their own casting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    #[serde(rename = "forcepower", alias = "force")]
    Force,
    #[serde(rename = "techpower", alias = "tech")]
    Tech,
}

impl FromStr for PowerKind {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "force" | "forcepower" => Ok(PowerKind::Force),
            "tech" | "techpower" => Ok(PowerKind::Tech),
            _ => Err(AlignmentError::invalid_input("power_kind", s)),
        }
    }
}

/// Abilities a power of this kind and alignment may be cast with
pub fn allowed_modifiers(kind: PowerKind, alignment: PowerType) -> &'static [Ability] {
    match (kind, alignment) {
        (PowerKind::Tech, PowerType::Universal) => &[Ability::Intelligence],
        (PowerKind::Tech, _) => &[],
        (PowerKind::Force, PowerType::Light) => &[Ability::Wisdom],
        (PowerKind::Force, PowerType::Dark) => &[Ability::Charisma],
        (PowerKind::Force, PowerType::Universal) => &[Ability::Wisdom, Ability::Charisma],
    }
}

/// Result of checking a power's casting ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifierCheck {
    pub is_wrong: bool,
    pub expected: Vec<Ability>,
    pub current: Ability,
}

impl ModifierCheck {
    /// e.g. "expected Wisdom or Charisma, found Strength"
    pub fn message(&self) -> String {
        let expected = if self.expected.is_empty() {
            "no ability".to_string()
        } else {
            self.expected
                .iter()
                .map(Ability::name)
                .collect::<Vec<_>>()
                .join(" or ")
        };
        format!("expected {}, found {}", expected, self.current.name())
    }
}

/// Check whether `current` is a legal casting ability for the power
pub fn check_power_modifier(
    kind: PowerKind,
    alignment: Option<PowerType>,
    current: Ability,
) -> ModifierCheck {
    let expected = allowed_modifiers(kind, alignment.unwrap_or_default());
    ModifierCheck {
        is_wrong: !expected.contains(&current),
        expected: expected.to_vec(),
        current,
    }
}
