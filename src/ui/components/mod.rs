//! Reusable UI components

pub mod badge;
pub mod scrollbar_helper;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod patient_panel_component;
pub mod sidebar_component;
pub mod sidebar_item_component;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use patient_panel_component::PatientPanelComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
