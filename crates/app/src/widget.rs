//! Widget descriptors and the per-screen registry that resolves keys to them.

use std::fmt;
use std::str::FromStr;

use homedash_domain::device::Attribute;
use homedash_domain::id::DeviceIndex;

use crate::action::Action;

/// Stable keys of the widgets the dispatcher and backends refer to.
pub mod keys {
    use homedash_domain::id::{DeviceIndex, RoomIndex};

    pub const CLOCK: &str = "clock";
    pub const BATTERY: &str = "battery";

    pub const HOME: &str = "home";
    pub const ROOMS: &str = "rooms";
    pub const ACTIVITY: &str = "activity";
    pub const ADD_NEW: &str = "addnew";

    pub const WELCOME: &str = "welcome";
    pub const QUICK_ACCESS: &str = "quickaccess";
    pub const RECENT_ACTIVITY: &str = "recentactivity";
    pub const RECENT_ENTRY: &str = "recententry";
    pub const SEE_ALL: &str = "viewall";
    pub const VIEW_ROOMS: &str = "viewroomsbutton";
    pub const MASTER_SWITCH: &str = "masterswitch";
    pub const TURN_OFF_ALL: &str = "turnoffall";

    pub const FLOOR_NAME: &str = "floorname";
    pub const PREV_FLOOR: &str = "prevfloor";
    pub const NEXT_FLOOR: &str = "nextfloor";

    pub const ROOM_NAME: &str = "roomname";
    pub const BACK: &str = "backbutton";

    pub const TITLE: &str = "title";
    pub const HINT: &str = "hint";

    #[must_use]
    pub fn quick(n: usize) -> String {
        format!("quick{n}")
    }

    #[must_use]
    pub fn room_button(index: RoomIndex) -> String {
        format!("roombutton{index}")
    }

    #[must_use]
    pub fn device_row(index: DeviceIndex) -> String {
        format!("devicerow{index}")
    }

    #[must_use]
    pub fn device_name(index: DeviceIndex) -> String {
        format!("devicename{index}")
    }

    #[must_use]
    pub fn log_line(n: usize) -> String {
        format!("log{n}")
    }
}

/// Position and size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The shape of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    Button,
    Slider { min: i64, max: i64, value: i64 },
}

/// One renderable widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub key: String,
    pub kind: WidgetKind,
    pub text: String,
    pub rect: Rect,
    /// `None` for purely decorative widgets.
    pub action: Option<Action>,
}

impl Widget {
    #[must_use]
    pub fn label(key: impl Into<String>, text: impl Into<String>, rect: Rect) -> Self {
        Self {
            key: key.into(),
            kind: WidgetKind::Label,
            text: text.into(),
            rect,
            action: None,
        }
    }

    #[must_use]
    pub fn button(
        key: impl Into<String>,
        text: impl Into<String>,
        rect: Rect,
        action: Option<Action>,
    ) -> Self {
        Self {
            key: key.into(),
            kind: WidgetKind::Button,
            text: text.into(),
            rect,
            action,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }
}

/// The widgets of one screen, in draw order, addressable by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetRegistry {
    widgets: Vec<Widget>,
}

impl WidgetRegistry {
    /// Add a widget. A widget already registered under the same key is
    /// replaced in place.
    pub fn insert(&mut self, widget: Widget) {
        match self.widgets.iter_mut().find(|w| w.key == widget.key) {
            Some(slot) => *slot = widget,
            None => self.widgets.push(widget),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Widget> {
        self.widgets.iter()
    }

    /// Keys of widgets that carry an action.
    pub fn interactive_keys(&self) -> impl Iterator<Item = &str> {
        self.widgets
            .iter()
            .filter(|w| w.is_interactive())
            .map(|w| w.key.as_str())
    }
}

impl<'a> IntoIterator for &'a WidgetRegistry {
    type Item = &'a Widget;
    type IntoIter = std::slice::Iter<'a, Widget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Key of a device control widget, rendered as `device{index}.{attribute}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlKey {
    pub device: DeviceIndex,
    pub attribute: Attribute,
}

const CONTROL_PREFIX: &str = "device";

impl ControlKey {
    #[must_use]
    pub const fn new(device: DeviceIndex, attribute: Attribute) -> Self {
        Self { device, attribute }
    }

    /// Key of the label showing this control's current value.
    #[must_use]
    pub fn value_label(self) -> String {
        format!("devicestate{}.{}", self.device, self.attribute)
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTROL_PREFIX}{}.{}", self.device, self.attribute)
    }
}

/// Why a string is not a control key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControlKeyError {
    #[error("control key {0:?} has no '.' separator")]
    MissingSeparator(String),
    #[error("control key {0:?} does not start with \"device\" and an index")]
    BadIndex(String),
    #[error("control key {0:?} names an unknown attribute")]
    UnknownAttribute(String),
}

impl FromStr for ControlKey {
    type Err = ControlKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (device, attribute) = s
            .split_once('.')
            .ok_or_else(|| ControlKeyError::MissingSeparator(s.to_string()))?;
        let device = device
            .strip_prefix(CONTROL_PREFIX)
            .and_then(|digits| digits.parse::<DeviceIndex>().ok())
            .ok_or_else(|| ControlKeyError::BadIndex(s.to_string()))?;
        let attribute = attribute
            .parse::<Attribute>()
            .map_err(|_| ControlKeyError::UnknownAttribute(s.to_string()))?;
        Ok(Self { device, attribute })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(0, 0, 10, 10)
    }

    #[test]
    fn should_replace_widget_registered_under_same_key() {
        let mut registry = WidgetRegistry::default();
        registry.insert(Widget::label("a", "first", rect()));
        registry.insert(Widget::label("b", "other", rect()));
        registry.insert(Widget::label("a", "second", rect()));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().text, "second");
        let order: Vec<_> = registry.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn should_return_none_for_unknown_key() {
        let registry = WidgetRegistry::default();
        assert!(registry.get("nope").is_none());
        assert!(!registry.contains("nope"));
    }

    #[test]
    fn should_list_only_interactive_keys() {
        let mut registry = WidgetRegistry::default();
        registry.insert(Widget::label("title", "Hi", rect()));
        registry.insert(Widget::button("back", "Back", rect(), Some(Action::Back)));
        registry.insert(Widget::button("quick1", "quick1", rect(), None));

        assert_eq!(registry.interactive_keys().collect::<Vec<_>>(), vec!["back"]);
    }

    #[test]
    fn should_format_control_key_with_index_and_attribute() {
        let key = ControlKey::new(DeviceIndex::new(3), Attribute::Intensity);
        assert_eq!(key.to_string(), "device3.intensity");
        assert_eq!(key.value_label(), "devicestate3.intensity");
    }

    #[test]
    fn should_parse_well_formed_control_key() {
        let key: ControlKey = "device12.power".parse().unwrap();
        assert_eq!(key, ControlKey::new(DeviceIndex::new(12), Attribute::Power));
    }

    #[test]
    fn should_reject_control_key_without_separator() {
        assert_eq!(
            "device0power".parse::<ControlKey>(),
            Err(ControlKeyError::MissingSeparator("device0power".to_string()))
        );
    }

    #[test]
    fn should_reject_control_key_with_non_numeric_index() {
        assert!(matches!(
            "deviceX.power".parse::<ControlKey>(),
            Err(ControlKeyError::BadIndex(_))
        ));
        assert!(matches!(
            "Light0.power".parse::<ControlKey>(),
            Err(ControlKeyError::BadIndex(_))
        ));
        assert!(matches!(
            "devicestate0.power".parse::<ControlKey>(),
            Err(ControlKeyError::BadIndex(_))
        ));
    }

    #[test]
    fn should_reject_control_key_with_unknown_attribute() {
        assert!(matches!(
            "device0.colour".parse::<ControlKey>(),
            Err(ControlKeyError::UnknownAttribute(_))
        ));
    }
}
