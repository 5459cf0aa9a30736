//! Constants used throughout the application
//!
//! This module centralizes section identifiers, UI text, and other constant
//! values to improve maintainability and consistency.

// Section identifiers
pub const SECTION_ID_INBOX: &str = "inbox";
pub const SECTION_ID_TODAY: &str = "today";
pub const SECTION_ID_UPCOMING: &str = "upcoming";
pub const SECTION_ID_PROJECTS: &str = "projects";
pub const SECTION_ID_LABELS: &str = "labels";
pub const PROJECT_SECTION_PREFIX: &str = "project-";
pub const LABEL_SECTION_PREFIX: &str = "label-";

// Section titles
pub const TITLE_INBOX: &str = "Inbox";
pub const TITLE_TODAY: &str = "Due Today";
pub const TITLE_UPCOMING: &str = "Due This Week";
pub const TITLE_ALL_PATIENTS: &str = "All Patients";
pub const TITLE_PATIENTS: &str = "Patients";
pub const TITLE_LABELS: &str = "Labels";
pub const TITLE_FALLBACK: &str = "Tasks";

// Empty states
pub const EMPTY_TASKS_HEADER: &str = "No tasks found";
pub const EMPTY_INBOX_MESSAGE: &str = "All caught up! Your inbox is empty.";
pub const EMPTY_PATIENTS_MESSAGE: &str = "No patients match the search.";

// Success Messages
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "✅ Task reopened";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";

// Error Messages
pub const ERROR_TASK_CREATE_FAILED: &str = "❌ Failed to create task";
pub const ERROR_TASK_NOT_FOUND: &str = "❌ Task not found";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const APP_TITLE: &str = "Clinidash";

// Task defaults
/// Days after now that still count as "upcoming"
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 7;
/// Maximum number of in-memory log lines kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Minimum patient panel width in columns
pub const PATIENT_PANEL_MIN_WIDTH: u16 = 20;
/// Maximum patient panel width in columns
pub const PATIENT_PANEL_MAX_WIDTH: u16 = 60;
/// Default patient panel width in columns
pub const PATIENT_PANEL_DEFAULT_WIDTH: u16 = 34;
