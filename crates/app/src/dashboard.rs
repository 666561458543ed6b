//! Dashboard — the navigation state machine.
//!
//! The dashboard owns the [`House`], the active [`Screen`] and that screen's
//! [`WidgetRegistry`]. Every interaction is resolved against the registry:
//! a key that is not registered, a decorative widget, an interaction of the
//! wrong kind, or an index that no longer resolves leaves the state untouched.

use homedash_domain::device::Attribute;
use homedash_domain::house::House;
use homedash_domain::id::FloorIndex;
use homedash_domain::time::clock_label;

use crate::action::{Action, Destination};
use crate::interaction::{Interaction, InteractionKind};
use crate::layout;
use crate::ports::{Clock, SystemClock};
use crate::screen::Screen;
use crate::widget::{ControlKey, WidgetRegistry, keys};

/// Result of handling one interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// Same screen, updated values.
    Refreshed,
    /// A new screen was entered (possibly the same one, re-rendered).
    Transitioned(Screen),
}

/// How much of the screen the backend needs to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// The widget set changed.
    Full,
    /// Only texts and slider values changed.
    Labels,
}

/// Navigation state machine over a house.
pub struct Dashboard<C = SystemClock> {
    house: House,
    screen: Screen,
    widgets: WidgetRegistry,
    clock: C,
    redraw: Option<Redraw>,
}

impl<C: Clock> Dashboard<C> {
    /// Start on the home screen.
    pub fn new(house: House, clock: C) -> Self {
        let mut dashboard = Self {
            house,
            screen: Screen::Home,
            widgets: WidgetRegistry::default(),
            clock,
            redraw: None,
        };
        dashboard.enter(Screen::Home);
        dashboard
    }

    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Widgets of the active screen.
    #[must_use]
    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    /// Pending redraw request, cleared by this call.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    /// Update the status-bar clock when the displayed minute changed.
    pub fn tick(&mut self) {
        let text = clock_label(self.clock.now());
        if let Some(clock) = self.widgets.get_mut(keys::CLOCK)
            && clock.text != text
        {
            clock.text = text;
            self.mark(Redraw::Labels);
        }
    }

    /// Convenience for a press interaction.
    pub fn press(&mut self, key: &str) -> Outcome {
        self.handle(&Interaction::press(key))
    }

    /// Convenience for a value-changed interaction.
    pub fn change(&mut self, key: &str, value: i64) -> Outcome {
        self.handle(&Interaction::value_changed(key, value))
    }

    /// Resolve an interaction against the active screen and apply it.
    #[tracing::instrument(skip(self, interaction), fields(screen = %self.screen, key = %interaction.key))]
    pub fn handle(&mut self, interaction: &Interaction) -> Outcome {
        let Some(widget) = self.widgets.get(&interaction.key) else {
            tracing::debug!("no widget registered under this key");
            return Outcome::Ignored;
        };
        let Some(action) = widget.action else {
            tracing::trace!("widget has no action");
            return Outcome::Ignored;
        };

        match action {
            Action::Control(control) => self.apply_control(control, interaction),
            _ if interaction.kind != InteractionKind::Press => {
                tracing::debug!(kind = ?interaction.kind, "button expects a press");
                Outcome::Ignored
            }
            Action::Navigate(destination) => self.transition(match destination {
                Destination::Home => Screen::Home,
                Destination::Rooms => Screen::RoomsList,
                Destination::Activity => Screen::Activity,
                Destination::AddNew => Screen::AddNew,
            }),
            Action::TurnOffAll => {
                let count = self.house.turn_off_all();
                tracing::info!(devices = count, "turned off all devices");
                self.refresh()
            }
            Action::OpenRoom(index) => match self.house.select_room(index) {
                Ok(at) => self.transition(Screen::RoomDetail(at)),
                Err(err) => {
                    tracing::debug!(%err, %index, "room button does not resolve");
                    Outcome::Ignored
                }
            },
            Action::PreviousFloor => self.step_floor(false),
            Action::NextFloor => self.step_floor(true),
            Action::Back => match self.screen {
                Screen::RoomDetail(_) => self.transition(Screen::RoomsList),
                Screen::DeviceDetail(at) => self.transition(Screen::RoomDetail(at)),
                _ => Outcome::Ignored,
            },
            Action::OpenDevice(index) => match self.screen {
                Screen::RoomDetail(at) if self.house.device(at, index).is_some() => {
                    self.transition(Screen::DeviceDetail(at))
                }
                _ => {
                    tracing::debug!(%index, "device row does not resolve");
                    Outcome::Ignored
                }
            },
        }
    }

    fn apply_control(&mut self, control: ControlKey, interaction: &Interaction) -> Outcome {
        let Screen::DeviceDetail(at) = self.screen else {
            return Outcome::Ignored;
        };
        let expected = match control.attribute {
            Attribute::Power => InteractionKind::Press,
            Attribute::Intensity => InteractionKind::ValueChanged,
        };
        if interaction.kind != expected {
            tracing::debug!(kind = ?interaction.kind, %control, "unexpected interaction for control");
            return Outcome::Ignored;
        }
        let Some(device) = self.house.device_mut(at, control.device) else {
            tracing::debug!(%control, "control does not resolve to a device");
            return Outcome::Ignored;
        };
        match device.apply_control(control.attribute, interaction.value) {
            Ok(()) => {
                tracing::debug!(device = %device.name, %control, on = device.on, "control applied");
                self.refresh()
            }
            Err(err) => {
                tracing::debug!(%err, %control, "control rejected");
                Outcome::Ignored
            }
        }
    }

    fn step_floor(&mut self, forward: bool) -> Outcome {
        let current = self.house.selected_floor().get();
        let target = if forward {
            current.checked_add(1)
        } else {
            current.checked_sub(1)
        };
        let Some(target) = target else {
            return Outcome::Ignored;
        };
        match self.house.select_floor(FloorIndex::new(target)) {
            Ok(()) => self.transition(Screen::RoomsList),
            Err(err) => {
                tracing::debug!(%err, "no floor in that direction");
                Outcome::Ignored
            }
        }
    }

    fn transition(&mut self, screen: Screen) -> Outcome {
        self.enter(screen);
        Outcome::Transitioned(screen)
    }

    fn refresh(&mut self) -> Outcome {
        self.widgets = layout::render(self.screen, &self.house, self.clock.now());
        self.mark(Redraw::Labels);
        Outcome::Refreshed
    }

    fn enter(&mut self, screen: Screen) {
        tracing::debug!(from = %self.screen, to = %screen, "entering screen");
        self.screen = screen;
        self.widgets = layout::render(screen, &self.house, self.clock.now());
        self.mark(Redraw::Full);
    }

    fn mark(&mut self, redraw: Redraw) {
        self.redraw = match (self.redraw, redraw) {
            (Some(Redraw::Full), _) | (_, Redraw::Full) => Some(Redraw::Full),
            _ => Some(Redraw::Labels),
        };
    }
}
