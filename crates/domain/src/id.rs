//! Typed index newtypes.
//!
//! Floors, rooms and devices are addressed by their position in the owning
//! sequence. Wrapping the position keeps a room index from being used where a
//! device index is expected.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_index {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw position.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Access the raw position.
            #[must_use]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_index!(
    /// Position of a [`Floor`](crate::floor::Floor) in its house.
    FloorIndex
);

define_index!(
    /// Position of a [`Room`](crate::room::Room) in its floor.
    RoomIndex
);

define_index!(
    /// Position of a [`Device`](crate::device::Device) in its room.
    DeviceIndex
);

/// Address of a room within a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRef {
    pub floor: FloorIndex,
    pub room: RoomIndex,
}

impl RoomRef {
    #[must_use]
    pub const fn new(floor: FloorIndex, room: RoomIndex) -> Self {
        Self { floor, room }
    }
}

impl fmt::Display for RoomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.floor, self.room)
    }
}
