//! # homedash-domain
//!
//! Pure domain model for the homedash smart-home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed indices, error conventions, timestamps
//! - Define **Devices** and their capability variants (basic power switch, dimmable light)
//! - Define **Rooms** (ordered device lists) and **Floors** (rooms plus a layout grid)
//! - Define the **House** (floors, current selection, activity log)
//! - Contain all invariant enforcement and domain logic (`turn_off_all`, control mutations)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The rendering and input boundary is expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod activity;
pub mod device;
pub mod floor;
pub mod house;
pub mod room;
