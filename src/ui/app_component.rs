use crate::config::{Config, DisplayConfig, UiConfig};
use crate::constants::{
    ERROR_TASK_CREATE_FAILED, ERROR_TASK_NOT_FOUND, SUCCESS_TASK_COMPLETED, SUCCESS_TASK_CREATED,
    SUCCESS_TASK_DELETED, SUCCESS_TASK_REOPENED, SUCCESS_TASK_UPDATED,
};
use crate::directory::PatientDirectory;
use crate::entities::Task;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::session::TodoSession;
use crate::store::Section;
use crate::ui::components::{
    patient_panel_component::LinkedProject, task_list_component::TaskListView, DialogComponent,
    PatientPanelComponent, SidebarComponent, StatusBar, TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, FocusPane},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::local_now;
use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use uuid::Uuid;

pub struct AppComponent {
    // Component composition
    patients: PatientPanelComponent,
    sidebar: SidebarComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    session: TodoSession,
    focus: FocusPane,
    icons: IconService,
    ui_config: UiConfig,
    status_message: Option<String>,
    /// Fixed clock for tests; `None` reads the local time
    clock: Option<NaiveDateTime>,
    synced_on: NaiveDate,

    logger: Logger,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(mut session: TodoSession, directory: PatientDirectory, config: &Config, logger: Logger) -> Self {
        session.select_section(Section::parse(&config.ui.default_section));
        let icons = IconService::new(config.ui.icon_theme);

        let mut task_list = TaskListComponent::new();
        task_list.display_config = config.display.clone();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            patients: PatientPanelComponent::new(directory),
            sidebar: SidebarComponent::new(),
            task_list,
            dialog,
            session,
            focus: FocusPane::Todo,
            icons,
            ui_config: config.ui.clone(),
            status_message: None,
            clock: None,
            synced_on: NaiveDate::default(),
            logger,
            should_quit: false,
        };
        app.logger.log(format!(
            "AppComponent: started in section '{}'",
            app.session.selected_section().id()
        ));
        app.apply_focus();
        app.sync_component_data();
        app
    }

    /// Freeze "now" so date sections do not depend on the wall clock
    pub fn with_clock(mut self, now: NaiveDateTime) -> Self {
        self.clock = Some(now);
        self.sync_component_data();
        self
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.unwrap_or_else(local_now)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &TodoSession {
        &self.session
    }

    pub fn focus(&self) -> FocusPane {
        self.focus
    }

    pub fn directory(&self) -> &PatientDirectory {
        &self.patients.directory
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.task_list.display_config
    }

    fn apply_focus(&mut self) {
        self.patients.focused = self.focus == FocusPane::Patients;
        self.sidebar.focused = self.focus == FocusPane::Todo;
        self.task_list.focused = self.focus == FocusPane::Todo;
    }

    /// Refresh when the calendar day changed since the last sync; true if it did
    pub fn on_tick(&mut self) -> bool {
        if self.now().date() == self.synced_on {
            return false;
        }
        self.sync_component_data();
        true
    }

    /// Push the session's current state into every component
    fn sync_component_data(&mut self) {
        let now = self.now();
        self.synced_on = now.date();

        self.sidebar
            .update_data(self.session.nav_entries(now), self.session.selected_section().clone());

        self.task_list.update_data(TaskListView {
            tasks: self.session.visible_tasks(now),
            section: self.session.selected_section().clone(),
            title: self.session.section_title(),
            empty_message: self.session.empty_message(),
            expanded_task_id: self.session.expanded_task_id().map(str::to_string),
            projects: self.session.projects().to_vec(),
            labels: self.session.labels().to_vec(),
            today: now.date(),
        });

        let linked = self
            .session
            .projects()
            .iter()
            .filter_map(|project| {
                project.patient_id.as_ref().map(|patient_id| LinkedProject {
                    patient_id: patient_id.clone(),
                    project_id: project.id.clone(),
                    open_tasks: self.session.store().open_project_task_count(&project.id),
                })
            })
            .collect();
        self.patients.update_data(linked);

        self.dialog.update_data(self.session.projects().to_vec());

        self.patients.icons = self.icons.clone();
        self.sidebar.icons = self.icons.clone();
        self.task_list.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Keys no component claimed
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    Action::HideDialog
                } else {
                    self.logger.log("Global key: Esc - quitting application".to_string());
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.focus {
            FocusPane::Patients => {
                let searching = self.patients.captures_input();
                let action = self.patients.handle_key_events(key);
                if searching || !matches!(action, Action::None) {
                    // The search box swallows every key, 'q' included
                    action
                } else {
                    self.handle_global_key(key)
                }
            }
            FocusPane::Todo => {
                let sidebar_action = self.sidebar.handle_key_events(key);
                if !matches!(sidebar_action, Action::None) {
                    return sidebar_action;
                }
                let task_list_action = self.task_list.handle_key_events(key);
                if !matches!(task_list_action, Action::None) {
                    return task_list_action;
                }
                self.handle_global_key(key)
            }
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.ui_config.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }
        let action = self.sidebar.handle_mouse(mouse);
        let action = if matches!(action, Action::None) {
            self.task_list.handle_mouse(mouse)
        } else {
            action
        };
        if !matches!(action, Action::None) && self.focus != FocusPane::Todo {
            self.focus = FocusPane::Todo;
            self.apply_focus();
        }
        action
    }

    /// Process one terminal event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.status_message = None;
                self.route_key(key)
            }
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Run an action through the components, then the session
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        let followup = self.handle_app_action(action);
        if !matches!(followup, Action::None) {
            self.dialog.update(followup);
        }
        self.sync_component_data();
    }

    fn finish(&mut self, message: &str) -> Action {
        self.logger.log(message.to_string());
        self.status_message = Some(message.to_string());
        Action::None
    }

    fn not_found(&mut self, id: &str) -> Action {
        self.logger.log(format!("Task: {} not found", id));
        Action::ShowDialog(DialogType::Error(ERROR_TASK_NOT_FOUND.to_string()))
    }

    /// Apply app-level actions to the session; may return a dialog to show
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.apply_focus();
                Action::None
            }
            Action::FocusPane(pane) => {
                self.focus = pane;
                self.apply_focus();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("Icons: switched to {:?} theme", self.icons.theme()));
                Action::None
            }
            Action::NavigateToSection(section) => {
                self.logger
                    .log(format!("Navigation: section changed to '{}'", section.id()));
                self.session.select_section(section);
                Action::None
            }
            Action::ToggleExpand(task_id) => {
                self.session.click_task(&task_id);
                Action::None
            }
            Action::CollapseTask => {
                self.session.collapse();
                Action::None
            }
            Action::CompleteTask(task_id) => {
                if !self.session.toggle_completed(&task_id) {
                    return self.not_found(&task_id);
                }
                let completed = self.session.store().get(&task_id).is_some_and(|t| t.completed);
                self.finish(if completed {
                    SUCCESS_TASK_COMPLETED
                } else {
                    SUCCESS_TASK_REOPENED
                })
            }
            Action::DeleteTask(task_id) => {
                if self.session.delete_task(&task_id) {
                    self.finish(SUCCESS_TASK_DELETED)
                } else {
                    self.not_found(&task_id)
                }
            }
            Action::CyclePriority(task_id) => {
                if self.session.cycle_priority(&task_id) {
                    self.finish(SUCCESS_TASK_UPDATED)
                } else {
                    self.not_found(&task_id)
                }
            }
            Action::ToggleSubtask { task_id, index } => {
                if self.session.toggle_subtask(&task_id, index) {
                    Action::None
                } else {
                    self.not_found(&task_id)
                }
            }
            Action::EditTask { id, title } => {
                if self.session.rename_task(&id, &title) {
                    self.finish(SUCCESS_TASK_UPDATED)
                } else {
                    self.not_found(&id)
                }
            }
            Action::CreateTask { title, project_id } => {
                let mut task = Task::new(Uuid::new_v4().to_string(), title);
                if let Some(project_id) = project_id {
                    task = task.with_project(project_id);
                }
                match self.session.add_task(task) {
                    Ok(()) => self.finish(SUCCESS_TASK_CREATED),
                    Err(e) => {
                        self.logger.log(format!("Task: create failed: {}", e));
                        Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_TASK_CREATE_FAILED, e)))
                    }
                }
            }
            Action::OpenPatientTasks(patient_id) => {
                let project_id = self.session.project_for_patient(&patient_id).map(|p| p.id.clone());
                match project_id {
                    Some(project_id) => {
                        self.session.select_section(Section::Project(project_id));
                        self.focus = FocusPane::Todo;
                        self.apply_focus();
                        Action::None
                    }
                    None => Action::ShowDialog(DialogType::Info("No task list is linked to this patient".to_string())),
                }
            }
            Action::SelectPatient(ref id) => {
                self.logger.log(format!("Patients: opened {}", id));
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.patients.update(action);
        let action = self.sidebar.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas =
            LayoutManager::dashboard_layout(rect, self.ui_config.patient_panel_width, self.ui_config.sidebar_width);

        self.patients.render(f, areas.patients);
        self.sidebar.render(f, areas.sidebar);
        self.task_list.render(f, areas.tasks);
        StatusBar::render(
            f,
            areas.status,
            self.focus,
            self.patients.captures_input(),
            self.status_message.as_deref(),
        );

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
