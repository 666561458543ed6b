//! Screen layouts — one function turns a screen plus house data into widgets.
//!
//! Coordinates target a 300×600 portrait display. Every screen shares the
//! status bar (clock, battery) and the bottom navbar.

use homedash_domain::device::ControlKind;
use homedash_domain::house::House;
use homedash_domain::id::{DeviceIndex, RoomRef};
use homedash_domain::time::{Timestamp, clock_label, log_label};

use crate::action::{Action, Destination};
use crate::screen::Screen;
use crate::widget::{ControlKey, Rect, Widget, WidgetKind, WidgetRegistry, keys};

/// Display size in pixels.
pub const DISPLAY_SIZE: (i32, i32) = (300, 600);

/// Activity lines that fit between the title and the navbar.
pub const ACTIVITY_ROWS: usize = 15;

const NAVBAR_Y: i32 = 525;
const NAV_BUTTON: i32 = 70;
const NAV_SPACING: i32 = 5;

const ROOM_TILE: i32 = 75;
const ROOM_MARGIN: i32 = 2;
const GRID_ORIGIN: (i32, i32) = (20, 100);

const DEVICE_BLOCK: i32 = 90;

/// Build the widget set for `screen`.
#[must_use]
pub fn render(screen: Screen, house: &House, now: Timestamp) -> WidgetRegistry {
    let mut widgets = WidgetRegistry::default();
    chrome(&mut widgets, now);
    match screen {
        Screen::Home => home(&mut widgets, house),
        Screen::AddNew => placeholder(
            &mut widgets,
            "Add New",
            "Adding rooms and devices is not available yet",
        ),
        Screen::AddDevice => placeholder(&mut widgets, "Add Device", "Choose a room first"),
        Screen::AddRoom => placeholder(&mut widgets, "Add Room", "Choose a floor first"),
        Screen::RoomsList => rooms_list(&mut widgets, house),
        Screen::RoomDetail(at) => room_detail(&mut widgets, house, at),
        Screen::DeviceDetail(at) => device_detail(&mut widgets, house, at),
        Screen::Activity => activity(&mut widgets, house),
    }
    widgets
}

fn chrome(widgets: &mut WidgetRegistry, now: Timestamp) {
    widgets.insert(Widget::label(
        keys::CLOCK,
        clock_label(now),
        Rect::new(0, 0, 100, 50),
    ));
    widgets.insert(Widget::label(
        keys::BATTERY,
        "98%",
        Rect::new(240, 0, 50, 50),
    ));

    let navbar = [
        (keys::HOME, "Home", Destination::Home),
        (keys::ROOMS, "Rooms", Destination::Rooms),
        (keys::ACTIVITY, "Activity", Destination::Activity),
        (keys::ADD_NEW, "Add New", Destination::AddNew),
    ];
    for (slot, (key, text, destination)) in navbar.into_iter().enumerate() {
        widgets.insert(Widget::button(
            key,
            text,
            Rect::new(
                step(NAV_SPACING, NAV_BUTTON, slot),
                NAVBAR_Y,
                NAV_BUTTON,
                NAV_BUTTON,
            ),
            Some(Action::Navigate(destination)),
        ));
    }
}

fn home(widgets: &mut WidgetRegistry, house: &House) {
    widgets.insert(Widget::label(
        keys::WELCOME,
        "Welcome",
        Rect::new(100, 20, 100, 50),
    ));

    widgets.insert(Widget::label(
        keys::QUICK_ACCESS,
        "Quick Access",
        Rect::new(20, 120, 100, 50),
    ));
    widgets.insert(Widget::button(
        keys::VIEW_ROOMS,
        "View Rooms",
        Rect::new(180, 125, 100, 40),
        Some(Action::Navigate(Destination::Rooms)),
    ));
    for n in 1..=3 {
        let name = keys::quick(n);
        widgets.insert(Widget::button(
            name.clone(),
            name,
            Rect::new(step(20, 80, n - 1), 170, 80, 80),
            None,
        ));
    }

    widgets.insert(Widget::label(
        keys::RECENT_ACTIVITY,
        "Recent Activity",
        Rect::new(20, 250, 100, 50),
    ));
    widgets.insert(Widget::button(
        keys::SEE_ALL,
        "See All",
        Rect::new(200, 250, 80, 40),
        Some(Action::Navigate(Destination::Activity)),
    ));
    let recent = house
        .log()
        .latest()
        .map_or_else(String::new, |entry| entry.description.clone());
    widgets.insert(Widget::label(
        keys::RECENT_ENTRY,
        recent,
        Rect::new(20, 300, 260, 40),
    ));

    widgets.insert(Widget::label(
        keys::MASTER_SWITCH,
        "Master Switch",
        Rect::new(20, 350, 100, 50),
    ));
    widgets.insert(Widget::button(
        keys::TURN_OFF_ALL,
        "Turn Off All Devices",
        Rect::new(50, 400, 200, 50),
        Some(Action::TurnOffAll),
    ));
}

fn placeholder(widgets: &mut WidgetRegistry, title: &str, hint: &str) {
    widgets.insert(Widget::label(keys::TITLE, title, Rect::new(20, 60, 260, 40)));
    widgets.insert(Widget::label(keys::HINT, hint, Rect::new(20, 110, 260, 40)));
}

fn rooms_list(widgets: &mut WidgetRegistry, house: &House) {
    let floor = house.current_floor();

    widgets.insert(Widget::button(
        keys::PREV_FLOOR,
        "<",
        Rect::new(20, 50, 40, 40),
        Some(Action::PreviousFloor),
    ));
    widgets.insert(Widget::label(
        keys::FLOOR_NAME,
        floor.name.clone(),
        Rect::new(70, 50, 160, 40),
    ));
    widgets.insert(Widget::button(
        keys::NEXT_FLOOR,
        ">",
        Rect::new(240, 50, 40, 40),
        Some(Action::NextFloor),
    ));

    for (row, col, index) in floor.cells() {
        let Some(room) = floor.room(index) else {
            continue;
        };
        widgets.insert(Widget::button(
            keys::room_button(index),
            room.name.clone(),
            Rect::new(
                step(GRID_ORIGIN.0, ROOM_TILE + ROOM_MARGIN, col),
                step(GRID_ORIGIN.1, ROOM_TILE + ROOM_MARGIN, row),
                ROOM_TILE,
                ROOM_TILE,
            ),
            Some(Action::OpenRoom(index)),
        ));
    }
}

fn room_header(widgets: &mut WidgetRegistry, name: &str) {
    widgets.insert(Widget::button(
        keys::BACK,
        "Back",
        Rect::new(20, 50, 60, 40),
        Some(Action::Back),
    ));
    widgets.insert(Widget::label(
        keys::ROOM_NAME,
        name,
        Rect::new(90, 50, 190, 40),
    ));
}

fn room_detail(widgets: &mut WidgetRegistry, house: &House, at: RoomRef) {
    let Some(room) = house.room(at) else {
        return;
    };
    room_header(widgets, &room.name);

    for (i, device) in room.devices().iter().enumerate() {
        let index = DeviceIndex::new(i);
        widgets.insert(Widget::button(
            keys::device_row(index),
            device.name.clone(),
            Rect::new(20, step(100, 50, i), 260, 45),
            Some(Action::OpenDevice(index)),
        ));
    }
}

fn device_detail(widgets: &mut WidgetRegistry, house: &House, at: RoomRef) {
    let Some(room) = house.room(at) else {
        return;
    };
    room_header(widgets, &room.name);

    for (i, device) in room.devices().iter().enumerate() {
        let index = DeviceIndex::new(i);
        let top = step(100, DEVICE_BLOCK, i);
        widgets.insert(Widget::label(
            keys::device_name(index),
            device.name.clone(),
            Rect::new(20, top, 260, 30),
        ));

        for (line, control) in device.controls().into_iter().enumerate() {
            let y = step(top + 30, 30, line);
            let key = ControlKey::new(index, control.attribute);
            let (kind, text, rect, value_rect) = match control.kind {
                ControlKind::Toggle { .. } => (
                    WidgetKind::Button,
                    "ON/OFF".to_string(),
                    Rect::new(20, y, 60, 25),
                    Rect::new(90, y, 60, 25),
                ),
                ControlKind::Slider { min, max, value } => (
                    WidgetKind::Slider { min, max, value },
                    control.attribute.to_string(),
                    Rect::new(20, y, 200, 25),
                    Rect::new(230, y, 50, 25),
                ),
            };
            widgets.insert(Widget {
                key: key.to_string(),
                kind,
                text,
                rect,
                action: Some(Action::Control(key)),
            });
            widgets.insert(Widget::label(key.value_label(), control.label, value_rect));
        }
    }
}

fn activity(widgets: &mut WidgetRegistry, house: &House) {
    widgets.insert(Widget::label(
        keys::TITLE,
        "Activity Log",
        Rect::new(20, 50, 260, 30),
    ));
    for (n, entry) in house.log().newest_first().take(ACTIVITY_ROWS).enumerate() {
        widgets.insert(Widget::label(
            keys::log_line(n),
            format!("{} {}", log_label(entry.timestamp), entry.description),
            Rect::new(20, step(90, 28, n), 260, 28),
        ));
    }
}

/// `base + stride * n`, saturating.
fn step(base: i32, stride: i32, n: usize) -> i32 {
    let n = i32::try_from(n).unwrap_or(i32::MAX);
    base.saturating_add(stride.saturating_mul(n))
}
