//! Domain records shared by the task store, the navigator and the UI.

pub mod label;
pub mod patient;
pub mod project;
pub mod task;

pub use label::Label;
pub use patient::Patient;
pub use project::Project;
pub use task::{Priority, Subtask, Task};
