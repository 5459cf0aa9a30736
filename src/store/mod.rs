//! In-memory task store and section navigation
//!
//! - [`TaskStore`] owns the task collection and derives per-section views
//! - [`Section`] maps a section identifier to a predicate and a title
//! - [`Navigator`] enumerates sidebar entries with live counts

pub mod navigator;
pub mod section;
pub mod task_store;

pub use navigator::{EntryKind, NavEntry, Navigator};
pub use section::{empty_message, Section};
pub use task_store::TaskStore;

/// Errors raised when building or growing a task store
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate task id: {0}")]
    DuplicateId(String),
}
