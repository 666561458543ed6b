//! House — the root of the ownership tree and the activity log.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityLog;
use crate::device::{Device, Intensity};
use crate::error::{HomeDashError, NotFoundError, ValidationError};
use crate::floor::Floor;
use crate::id::{DeviceIndex, FloorIndex, RoomIndex, RoomRef};
use crate::room::Room;
use crate::time::{Timestamp, now};

/// The whole house: floors, the current selection, and the activity log.
///
/// The selection is held as indices into the owned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HouseRepr")]
pub struct House {
    floors: Vec<Floor>,
    selected_floor: FloorIndex,
    selected_room: Option<RoomRef>,
    log: ActivityLog,
}

impl House {
    /// Create a builder for constructing a [`House`].
    #[must_use]
    pub fn builder() -> HouseBuilder {
        HouseBuilder::default()
    }

    /// The demonstration house shown at startup.
    ///
    /// Every floor gets three rooms laid out as `[[0, 1], [-, 2]]`; the first
    /// room of the first floor holds a dimmable light named `TestDevice`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] when `floor_names` is empty or
    /// contains an empty name.
    pub fn demo<S: AsRef<str>>(floor_names: &[S]) -> Result<Self, HomeDashError> {
        let mut builder = Self::builder();
        for (i, name) in floor_names.iter().enumerate() {
            let mut room0 = Room::builder().name("Room 0");
            if i == 0 {
                room0 = room0.device(
                    Device::builder()
                        .name("TestDevice")
                        .light(Intensity::MAX)
                        .build()?,
                );
            }
            let floor = Floor::builder()
                .name(name.as_ref())
                .room(room0.build()?)
                .room(Room::builder().name("Room 1").build()?)
                .room(Room::builder().name("Room 2").build()?)
                .grid(vec![vec![Some(0), Some(1)], vec![None, Some(2)]])
                .build()?;
            builder = builder.floor(floor);
        }
        let mut house = builder.build()?;
        house.log_event("Application started");
        Ok(house)
    }

    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[must_use]
    pub fn floor(&self, index: FloorIndex) -> Option<&Floor> {
        self.floors.get(index.get())
    }

    #[must_use]
    pub fn room(&self, at: RoomRef) -> Option<&Room> {
        self.floor(at.floor)?.room(at.room)
    }

    pub fn room_mut(&mut self, at: RoomRef) -> Option<&mut Room> {
        self.floors.get_mut(at.floor.get())?.room_mut(at.room)
    }

    #[must_use]
    pub fn device(&self, at: RoomRef, index: DeviceIndex) -> Option<&Device> {
        self.room(at)?.device(index)
    }

    pub fn device_mut(&mut self, at: RoomRef, index: DeviceIndex) -> Option<&mut Device> {
        self.room_mut(at)?.device_mut(index)
    }

    /// Total number of devices across all floors and rooms.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.floors
            .iter()
            .flat_map(Floor::rooms)
            .map(|room| room.devices().len())
            .sum()
    }

    #[must_use]
    pub fn selected_floor(&self) -> FloorIndex {
        self.selected_floor
    }

    /// The floor currently shown in the rooms browser.
    #[must_use]
    pub fn current_floor(&self) -> &Floor {
        // selected_floor is only ever set to an index that exists, and a
        // house always has at least one floor
        &self.floors[self.selected_floor.get()]
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<RoomRef> {
        self.selected_room
    }

    /// Select a floor by index.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::NotFound`] when `index` is out of range; the
    /// selection is left unchanged.
    pub fn select_floor(&mut self, index: FloorIndex) -> Result<(), HomeDashError> {
        if self.floor(index).is_none() {
            return Err(NotFoundError {
                entity: "Floor",
                id: index.to_string(),
            }
            .into());
        }
        self.selected_floor = index;
        Ok(())
    }

    /// Select a room of the currently selected floor.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::NotFound`] when the selected floor has no
    /// room at `index`; the selection is left unchanged.
    pub fn select_room(&mut self, index: RoomIndex) -> Result<RoomRef, HomeDashError> {
        let at = RoomRef::new(self.selected_floor, index);
        if self.room(at).is_none() {
            return Err(NotFoundError {
                entity: "Room",
                id: at.to_string(),
            }
            .into());
        }
        self.selected_room = Some(at);
        Ok(at)
    }

    #[must_use]
    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Append an entry stamped with the current time.
    pub fn log_event(&mut self, description: impl Into<String>) {
        self.log_event_at(now(), description);
    }

    pub fn log_event_at(&mut self, timestamp: Timestamp, description: impl Into<String>) {
        self.log.push(timestamp, description);
    }

    /// Switch every device off, floor by floor, room by room, logging one
    /// entry per device in the same order.
    ///
    /// Returns the number of devices visited.
    pub fn turn_off_all(&mut self) -> usize {
        let mut descriptions = Vec::new();
        for floor in &mut self.floors {
            for room in floor.rooms_mut() {
                let room_name = room.name.clone();
                for device in room.devices_mut() {
                    device.turn_off();
                    descriptions.push(format!("Turned off {} in {room_name}", device.name));
                }
            }
        }
        let count = descriptions.len();
        let ts = now();
        for description in descriptions {
            self.log.push(ts, description);
        }
        count
    }
}

/// Serialized form of a [`House`], checked before it becomes one.
#[derive(Deserialize)]
struct HouseRepr {
    floors: Vec<Floor>,
    selected_floor: FloorIndex,
    selected_room: Option<RoomRef>,
    log: ActivityLog,
}

impl TryFrom<HouseRepr> for House {
    type Error = HomeDashError;

    fn try_from(repr: HouseRepr) -> Result<Self, Self::Error> {
        if repr.floors.is_empty() {
            return Err(ValidationError::NoFloors.into());
        }
        let house = Self {
            floors: repr.floors,
            selected_floor: repr.selected_floor,
            selected_room: repr.selected_room,
            log: repr.log,
        };
        if house.floor(house.selected_floor).is_none() {
            return Err(NotFoundError {
                entity: "Floor",
                id: house.selected_floor.to_string(),
            }
            .into());
        }
        if let Some(at) = house.selected_room
            && house.room(at).is_none()
        {
            return Err(NotFoundError {
                entity: "Room",
                id: at.to_string(),
            }
            .into());
        }
        Ok(house)
    }
}

/// Step-by-step builder for [`House`].
#[derive(Debug, Default)]
pub struct HouseBuilder {
    floors: Vec<Floor>,
}

impl HouseBuilder {
    #[must_use]
    pub fn floor(mut self, floor: Floor) -> Self {
        self.floors.push(floor);
        self
    }

    /// Consume the builder and return a [`House`] with the first floor and
    /// its first room (if any) selected and an empty log.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] when no floor was added.
    pub fn build(self) -> Result<House, HomeDashError> {
        let Some(ground) = self.floors.first() else {
            return Err(ValidationError::NoFloors.into());
        };
        let selected_floor = FloorIndex::new(0);
        let selected_room = (!ground.rooms().is_empty())
            .then(|| RoomRef::new(selected_floor, RoomIndex::new(0)));
        Ok(House {
            floors: self.floors,
            selected_floor,
            selected_room,
            log: ActivityLog::default(),
        })
    }
}
