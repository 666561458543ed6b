//! Control descriptors — what a device lets the user change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A controllable attribute of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// The on/off switch every device has.
    Power,
    /// Brightness of a dimmable light, `0..=100`.
    Intensity,
}

impl Attribute {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Intensity => "intensity",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known attribute.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute {0:?}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "power" => Ok(Self::Power),
            "intensity" => Ok(Self::Intensity),
            other => Err(UnknownAttribute(other.to_string())),
        }
    }
}

/// The widget shape a control asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Toggle { on: bool },
    Slider { min: i64, max: i64, value: i64 },
}

/// A fresh description of one control, regenerated on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub attribute: Attribute,
    pub kind: ControlKind,
    /// Human-readable current value (`ON`, `OFF`, `40`).
    pub label: String,
}

impl Control {
    pub(crate) fn power(on: bool) -> Self {
        Self {
            attribute: Attribute::Power,
            kind: ControlKind::Toggle { on },
            label: if on { "ON" } else { "OFF" }.to_string(),
        }
    }

    pub(crate) fn intensity(value: u8) -> Self {
        Self {
            attribute: Attribute::Intensity,
            kind: ControlKind::Slider {
                min: 0,
                max: 100,
                value: i64::from(value),
            },
            label: value.to_string(),
        }
    }
}
