//! Screen — the mutually exclusive views of the dashboard.

use std::fmt;

use homedash_domain::id::RoomRef;

/// The view currently on display.
///
/// `AddDevice` and `AddRoom` have a layout but nothing navigates to them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    AddNew,
    AddDevice,
    AddRoom,
    RoomsList,
    RoomDetail(RoomRef),
    DeviceDetail(RoomRef),
    Activity,
}

impl Screen {
    /// Stable numeric identifier of the view.
    #[must_use]
    pub const fn state_id(self) -> u8 {
        match self {
            Self::Home => 0,
            Self::AddNew => 1,
            Self::AddDevice => 2,
            Self::AddRoom => 3,
            Self::RoomsList => 4,
            Self::RoomDetail(_) => 5,
            Self::DeviceDetail(_) => 6,
            Self::Activity => 7,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AddNew => "Add New",
            Self::AddDevice => "Add Device",
            Self::AddRoom => "Add Room",
            Self::RoomsList => "Rooms",
            Self::RoomDetail(_) => "Room",
            Self::DeviceDetail(_) => "Devices",
            Self::Activity => "Activity",
        }
    }

    /// The room this view is about, if any.
    #[must_use]
    pub const fn room(self) -> Option<RoomRef> {
        match self {
            Self::RoomDetail(at) | Self::DeviceDetail(at) => Some(at),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.room() {
            Some(at) => write!(f, "{} ({at})", self.title()),
            None => f.write_str(self.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_domain::id::{FloorIndex, RoomIndex};

    #[test]
    fn should_default_to_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn should_number_views_in_declaration_order() {
        let at = RoomRef::new(FloorIndex::new(0), RoomIndex::new(0));
        let ids: Vec<_> = [
            Screen::Home,
            Screen::AddNew,
            Screen::AddDevice,
            Screen::AddRoom,
            Screen::RoomsList,
            Screen::RoomDetail(at),
            Screen::DeviceDetail(at),
            Screen::Activity,
        ]
        .iter()
        .map(|s| s.state_id())
        .collect();
        assert_eq!(ids, (0..8).collect::<Vec<u8>>());
    }

    #[test]
    fn should_display_room_address_for_room_views() {
        let at = RoomRef::new(FloorIndex::new(1), RoomIndex::new(2));
        assert_eq!(Screen::RoomDetail(at).to_string(), "Room (1/2)");
        assert_eq!(Screen::Activity.to_string(), "Activity");
    }
}
