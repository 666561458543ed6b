//! Typed payloads attached to interactive widgets when they are built.

use homedash_domain::id::{DeviceIndex, RoomIndex};

use crate::widget::ControlKey;

/// Navbar destinations, reachable from every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Rooms,
    Activity,
    AddNew,
}

/// What pressing or moving a widget asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Navigate(Destination),
    TurnOffAll,
    OpenRoom(RoomIndex),
    PreviousFloor,
    NextFloor,
    Back,
    OpenDevice(DeviceIndex),
    Control(ControlKey),
}
