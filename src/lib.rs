//! Clinidash - a terminal clinical dashboard
//!
//! A patient directory with search and a per-patient summary, next to a
//! to-do panel whose tasks are filtered by section (inbox, due today, due
//! this week, per patient, per label). One task at a time can be expanded
//! to show its notes and subtasks.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`seed`] - Built-in caseload and JSON fixtures
//! * [`store`] - Task store, sections and sidebar enumeration
//! * [`session`] - Selected section and expanded task kept in step with the store
//! * [`directory`] - Patient search and detail selection
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and color helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Patient directory
pub mod directory;

/// Data models for tasks, projects, labels and patients
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// In-memory log buffer and file logging setup
pub mod logger;

/// Seed data for a session
pub mod seed;

/// To-do session controller
pub mod session;

/// Task store and section filtering
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::{Label, Patient, Priority, Project, Subtask, Task};
