//! Port definitions — traits the outside world implements.
//!
//! The dashboard core never draws pixels or reads input itself. A backend
//! (terminal, GUI toolkit, test double) reports interactions and draws the
//! widget sets it is handed; a clock supplies the time shown in the status bar.

pub mod backend;
pub mod clock;

pub use backend::{Backend, BackendEvent};
pub use clock::{Clock, ManualClock, SystemClock};
