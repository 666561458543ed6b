//! End-to-end scenarios: a scripted user walks the dashboard through the
//! terminal backend and the tick loop, and the house is checked afterwards.

use chrono::{TimeZone, Utc};
use homedash_adapter_terminal::{Input, TerminalBackend};
use homedash_app::dashboard::{Dashboard, Outcome};
use homedash_app::ports::ManualClock;
use homedash_app::runtime;
use homedash_app::screen::Screen;
use homedash_app::widget::keys;
use homedash_domain::device::{Device, Intensity};
use homedash_domain::floor::Floor;
use homedash_domain::house::House;
use homedash_domain::id::{DeviceIndex, FloorIndex, RoomIndex, RoomRef};
use homedash_domain::room::Room;
use tokio::sync::mpsc;

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 11, 21, 18, 30, 0).unwrap())
}

fn floor(name: &str, with_device: bool) -> Floor {
    let mut room0 = Room::builder().name("Room 0");
    if with_device {
        room0 = room0.device(
            Device::builder()
                .name("TestDevice")
                .light(Intensity::MAX)
                .build()
                .unwrap(),
        );
    }
    Floor::builder()
        .name(name)
        .room(room0.build().unwrap())
        .room(Room::builder().name("Room 1").build().unwrap())
        .room(Room::builder().name("Room 2").build().unwrap())
        .grid(vec![vec![Some(0), Some(1)], vec![None, Some(2)]])
        .build()
        .unwrap()
}

fn single_floor_house() -> House {
    House::builder().floor(floor("Ground", true)).build().unwrap()
}

fn two_floor_house() -> House {
    House::builder()
        .floor(floor("Ground", true))
        .floor(floor("Upstairs", false))
        .build()
        .unwrap()
}

fn room0() -> RoomRef {
    RoomRef::new(FloorIndex::new(0), RoomIndex::new(0))
}

fn test_device(dash: &Dashboard<ManualClock>) -> &Device {
    dash.house().device(room0(), DeviceIndex::new(0)).unwrap()
}

/// Feed `lines` to a terminal backend, run the loop until input runs out and
/// return the printed frames.
async fn drive(dash: &mut Dashboard<ManualClock>, lines: &[&str]) -> String {
    let (tx, rx) = mpsc::unbounded_channel();
    for line in lines {
        tx.send(Input::Line((*line).to_string())).unwrap();
    }
    drop(tx);

    let mut backend = TerminalBackend::new(rx, Vec::new());
    runtime::run(dash, &mut backend, 1000).await.unwrap();
    String::from_utf8(backend.output().clone()).unwrap()
}

#[tokio::test]
async fn should_switch_device_off_from_its_detail_screen() {
    let mut dash = Dashboard::new(single_floor_house(), clock());

    let output = drive(
        &mut dash,
        &["rooms", "roombutton0", "devicerow0", "press device0.power"],
    )
    .await;

    assert_eq!(dash.screen(), Screen::DeviceDetail(room0()));
    assert!(!test_device(&dash).on);
    let state = output
        .lines()
        .rfind(|line| line.contains("devicestate0.power"))
        .unwrap();
    assert!(state.trim_end().ends_with("OFF"));
}

#[tokio::test]
async fn should_change_intensity_without_touching_power() {
    let mut dash = Dashboard::new(single_floor_house(), clock());

    drive(
        &mut dash,
        &["rooms", "roombutton0", "devicerow0", "set device0.intensity 40"],
    )
    .await;

    let device = test_device(&dash);
    assert_eq!(device.intensity(), Some(Intensity::clamped(40)));
    assert!(device.on);
}

#[tokio::test]
async fn should_keep_device_off_when_intensity_changes_after_toggle() {
    let mut dash = Dashboard::new(single_floor_house(), clock());

    drive(
        &mut dash,
        &[
            "rooms",
            "roombutton0",
            "devicerow0",
            "press device0.power",
            "set device0.intensity 40",
        ],
    )
    .await;

    let device = test_device(&dash);
    assert!(!device.on);
    assert_eq!(device.intensity(), Some(Intensity::clamped(40)));
}

#[tokio::test]
async fn should_log_once_per_device_when_turning_everything_off() {
    let mut dash = Dashboard::new(single_floor_house(), clock());
    let before = dash.house().log().len();

    drive(&mut dash, &["turnoffall"]).await;

    let log = dash.house().log();
    assert_eq!(log.len(), before + 1);
    assert_eq!(
        log.latest().unwrap().description,
        "Turned off TestDevice in Room 0"
    );
    assert!(!test_device(&dash).on);
    assert_eq!(dash.house().selected_floor(), FloorIndex::new(0));
    assert_eq!(dash.house().selected_room(), Some(room0()));
    assert_eq!(dash.screen(), Screen::Home);
}

#[tokio::test]
async fn should_keep_appending_when_turning_off_repeatedly() {
    let mut dash = Dashboard::new(single_floor_house(), clock());
    let before = dash.house().log().len();

    drive(&mut dash, &["turnoffall", "turnoffall"]).await;

    assert_eq!(dash.house().log().len(), before + 2);
    assert!(!test_device(&dash).on);
}

#[tokio::test]
async fn should_ignore_malformed_and_unknown_input() {
    let mut dash = Dashboard::new(single_floor_house(), clock());

    let output = drive(
        &mut dash,
        &["backbutton", "set device0.intensity", "press", "roombutton7"],
    )
    .await;

    assert_eq!(dash.screen(), Screen::Home);
    assert!(test_device(&dash).on);
    assert!(output.contains("? "));
}

#[tokio::test]
async fn should_walk_floors_within_bounds() {
    let mut dash = Dashboard::new(two_floor_house(), clock());

    dash.press(keys::ROOMS);
    assert_eq!(dash.press(keys::PREV_FLOOR), Outcome::Ignored);
    assert_eq!(
        dash.press(keys::NEXT_FLOOR),
        Outcome::Transitioned(Screen::RoomsList)
    );
    assert_eq!(dash.house().selected_floor(), FloorIndex::new(1));
    assert_eq!(
        dash.widgets().get(keys::FLOOR_NAME).unwrap().text,
        "Upstairs"
    );
    assert_eq!(dash.press(keys::NEXT_FLOOR), Outcome::Ignored);
    assert_eq!(dash.house().selected_floor(), FloorIndex::new(1));

    dash.press(keys::PREV_FLOOR);
    assert_eq!(dash.house().selected_floor(), FloorIndex::new(0));
    assert_eq!(dash.widgets().get(keys::FLOOR_NAME).unwrap().text, "Ground");
}

#[tokio::test]
async fn should_rebuild_home_identically_after_round_trip() {
    let fresh = Dashboard::new(single_floor_house(), clock());
    let mut dash = Dashboard::new(single_floor_house(), clock());

    drive(&mut dash, &["rooms", "home"]).await;

    assert_eq!(dash.screen(), Screen::Home);
    assert_eq!(dash.widgets(), fresh.widgets());
}

#[tokio::test]
async fn should_return_to_rooms_list_from_room_detail() {
    let mut dash = Dashboard::new(single_floor_house(), clock());

    drive(&mut dash, &["rooms", "roombutton2", "backbutton"]).await;

    assert_eq!(dash.screen(), Screen::RoomsList);
    assert_eq!(
        dash.house().selected_room(),
        Some(RoomRef::new(FloorIndex::new(0), RoomIndex::new(2)))
    );
}
