//! Utility modules for the Clinidash application.
//!
//! - [`datetime`] - due date checks and human-readable date formatting
//! - [`color`] - hex colour conversion for project and label swatches

pub mod color;
pub mod datetime;
