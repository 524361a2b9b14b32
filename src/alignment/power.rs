//! Power types and their moral charge

use crate::core::error::{AlignmentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moral charge of a power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PowerType {
    #[serde(rename = "lig", alias = "light")]
    Light,
    #[serde(rename = "dar", alias = "dark")]
    Dark,
    #[default]
    #[serde(rename = "uni", alias = "universal")]
    Universal,
}

impl PowerType {
    pub fn all() -> &'static [PowerType] {
        &[PowerType::Light, PowerType::Dark, PowerType::Universal]
    }

    /// Signed unit modifier applied to alignment when the power is used
    pub fn alignment_modifier(&self) -> i64 {
        match self {
            PowerType::Light => 1,
            PowerType::Dark => -1,
            PowerType::Universal => 0,
        }
    }

    /// Short tag used in character data
    pub fn tag(&self) -> &'static str {
        match self {
            PowerType::Light => "lig",
            PowerType::Dark => "dar",
            PowerType::Universal => "uni",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowerType::Light => "Light",
            PowerType::Dark => "Dark",
            PowerType::Universal => "Universal",
        }
    }
}

impl FromStr for PowerType {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lig" | "light" => Ok(PowerType::Light),
            "dar" | "dark" => Ok(PowerType::Dark),
            "uni" | "universal" => Ok(PowerType::Universal),
            _ => Err(AlignmentError::invalid_input("power_type", s)),
        }
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        assert_eq!(PowerType::Light.alignment_modifier(), 1);
        assert_eq!(PowerType::Dark.alignment_modifier(), -1);
        assert_eq!(PowerType::Universal.alignment_modifier(), 0);
    }

    #[test]
    fn test_parse_tags_and_names() {
        assert_eq!("lig".parse::<PowerType>().unwrap(), PowerType::Light);
        assert_eq!("Dark".parse::<PowerType>().unwrap(), PowerType::Dark);
        assert_eq!(" UNI ".parse::<PowerType>().unwrap(), PowerType::Universal);
        assert!(matches!(
            "grey".parse::<PowerType>(),
            Err(AlignmentError::InvalidInput { field: "power_type", .. })
        ));
    }

    #[test]
    fn test_tag_roundtrip() {
        for power in PowerType::all() {
            assert_eq!(power.tag().parse::<PowerType>().unwrap(), *power);
        }
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&PowerType::Dark).unwrap(), "\"dar\"");
        let parsed: PowerType = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, PowerType::Light);
    }
}
