//! # homedash-app
//!
//! Application layer — the navigation state machine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **screens** of the dashboard as one tagged union
//! - Build each screen's **widget registry** from house data (`layout`)
//! - Attach a typed **action** to every interactive widget when it is built
//! - Resolve backend **interactions** against the active registry and apply
//!   transitions and domain mutations (`dashboard`)
//! - Define **port traits** the outside world implements (`Backend`, `Clock`)
//! - Drive the single-threaded tick loop (`runtime`)
//!
//! ## Dependency rule
//! Depends on `homedash-domain` only (plus `tokio::time` for the tick).
//! Never imports backend crates. Backends depend on *this* crate, not the reverse.

pub mod action;
pub mod dashboard;
pub mod interaction;
pub mod layout;
pub mod ports;
pub mod runtime;
pub mod screen;
pub mod widget;
