use crate::store::Section;

/// Which half of the screen receives key events first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    Patients,
    #[default]
    Todo,
}

impl FocusPane {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPane::Patients => FocusPane::Todo,
            FocusPane::Todo => FocusPane::Patients,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NavigateToSection(Section),
    NextTask,
    PreviousTask,
    FocusPane(FocusPane),
    ToggleFocus,

    // Expansion
    ToggleExpand(String),
    CollapseTask,

    // Task operations
    CompleteTask(String),
    DeleteTask(String),
    CyclePriority(String),
    ToggleSubtask {
        task_id: String,
        index: usize,
    },
    CreateTask {
        title: String,
        project_id: Option<String>,
    },
    EditTask {
        id: String,
        title: String,
    },

    // Patient directory
    SelectPatient(String),
    PatientBack,
    /// Jump from a patient to the tasks of the linked project
    OpenPatientTasks(String),

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TaskCreation { default_project_id: Option<String> },
    TaskEdit { task_id: String, title: String },
    DeleteConfirmation { task_id: String, title: String },
    Error(String),
    Info(String),
    Help,
    Logs,
}
