//! Terminal front end.
//!
//! [`app_component::AppComponent`] composes the patient panel, the to-do
//! sidebar, the task list and the dialog layer; [`renderer::run_app`] owns
//! the terminal and the event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
