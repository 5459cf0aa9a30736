//! Core UI building blocks for Clinidash.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components translate key events into [`Action`]s. The app shell passes
//! every action through each component's `update` and applies whatever is
//! left to the to-do session.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, FocusPane};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
