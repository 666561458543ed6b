//! Room — an ordered list of devices.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::{HomeDashError, ValidationError};
use crate::id::DeviceIndex;

/// Display size of every room tile.
pub const ROOM_SIZE: (u32, u32) = (20, 20);

/// A room on a floor. Device order is display and addressing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub width: u32,
    pub height: u32,
    devices: Vec<Device>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
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

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut Device> {
        self.devices.iter_mut()
    }

    #[must_use]
    pub fn device(&self, index: DeviceIndex) -> Option<&Device> {
        self.devices.get(index.get())
    }

    pub fn device_mut(&mut self, index: DeviceIndex) -> Option<&mut Device> {
        self.devices.get_mut(index.get())
    }

    /// Append a device, returning its index.
    pub fn add_device(&mut self, device: Device) -> DeviceIndex {
        self.devices.push(device);
        DeviceIndex::new(self.devices.len() - 1)
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    name: Option<String>,
    devices: Vec<Device>,
}

impl RoomBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.devices.push(device);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Room, HomeDashError> {
        let room = Room {
            name: self.name.unwrap_or_default(),
            width: ROOM_SIZE.0,
            height: ROOM_SIZE.1,
            devices: self.devices,
        };
        room.validate()?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str) -> Device {
        Device::builder().name(name).build().unwrap()
    }

    #[test]
    fn should_build_room_with_fixed_size() {
        let room = Room::builder().name("Kitchen").build().unwrap();
        assert_eq!((room.width, room.height), ROOM_SIZE);
        assert!(room.devices().is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Room::builder().build();
        assert!(matches!(
            result,
            Err(HomeDashError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_preserve_device_insertion_order() {
        let mut room = Room::builder()
            .name("Hall")
            .device(device("Lamp"))
            .device(device("Fan"))
            .build()
            .unwrap();
        let idx = room.add_device(device("Radio"));

        assert_eq!(idx, DeviceIndex::new(2));
        let names: Vec<_> = room.devices().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Lamp", "Fan", "Radio"]);
    }

    #[test]
    fn should_return_none_when_device_index_out_of_range() {
        let room = Room::builder().name("Hall").build().unwrap();
        assert!(room.device(DeviceIndex::new(0)).is_none());
    }
}
