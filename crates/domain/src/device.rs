//! Device — a switchable thing in a room, optionally dimmable.

mod control;

pub use control::{Attribute, Control, ControlKind, UnknownAttribute};

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, HomeDashError, ValidationError};

/// Light brightness in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Build an intensity, clamping out-of-range values to the nearest bound.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        // the clamp keeps the value within u8 range
        Self(u8::try_from(value.clamp(0, 100)).unwrap_or(100))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(format!("intensity {value} is above 100"));
        }
        Ok(Self(value))
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// What a device can do beyond being switched on and off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Capability {
    /// Power only.
    Basic,
    /// Power plus a brightness slider.
    Light { intensity: Intensity },
}

/// A device placed in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    /// Opaque icon reference, not interpreted.
    pub icon: Option<String>,
    pub on: bool,
    pub capability: Capability,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeDashError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Current intensity, present only for lights.
    #[must_use]
    pub fn intensity(&self) -> Option<Intensity> {
        match self.capability {
            Capability::Basic => None,
            Capability::Light { intensity } => Some(intensity),
        }
    }

    /// Attributes this device exposes, in display order.
    #[must_use]
    pub fn attributes(&self) -> &'static [Attribute] {
        match self.capability {
            Capability::Basic => &[Attribute::Power],
            Capability::Light { .. } => &[Attribute::Power, Attribute::Intensity],
        }
    }

    /// Whether `attribute` belongs to this device's capability set.
    #[must_use]
    pub fn supports(&self, attribute: Attribute) -> bool {
        self.attributes().contains(&attribute)
    }

    /// Describe the controls for this device as it is right now.
    ///
    /// Calling this repeatedly yields equal results until the device changes.
    #[must_use]
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::power(self.on)];
        if let Capability::Light { intensity } = self.capability {
            controls.push(Control::intensity(intensity.get()));
        }
        controls
    }

    /// Apply a control event.
    ///
    /// `Power` flips the switch whatever `value` holds. `Intensity` needs a
    /// value, which is clamped to `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Control`] when the attribute is outside the
    /// capability set or a slider value is missing.
    pub fn apply_control(
        &mut self,
        attribute: Attribute,
        value: Option<i64>,
    ) -> Result<(), HomeDashError> {
        match attribute {
            Attribute::Power => {
                self.toggle_power();
                Ok(())
            }
            Attribute::Intensity => {
                let Capability::Light { intensity } = &mut self.capability else {
                    return Err(ControlError::Unsupported {
                        device: self.name.clone(),
                        attribute,
                    }
                    .into());
                };
                let value = value.ok_or(ControlError::MissingValue { attribute })?;
                *intensity = Intensity::clamped(value);
                Ok(())
            }
        }
    }

    pub fn toggle_power(&mut self) {
        self.on = !self.on;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    name: Option<String>,
    icon: Option<String>,
    on: bool,
    capability: Capability,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self {
            name: None,
            icon: None,
            on: true,
            capability: Capability::Basic,
        }
    }
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Make this device a dimmable light at the given intensity.
    #[must_use]
    pub fn light(mut self, intensity: Intensity) -> Self {
        self.capability = Capability::Light { intensity };
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// Devices start switched on unless told otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Device, HomeDashError> {
        let device = Device {
            name: self.name.unwrap_or_default(),
            icon: self.icon,
            on: self.on,
            capability: self.capability,
        };
        device.validate()?;
        Ok(device)
    }
}
