//! Patient directory panel: a searchable list and a per-patient summary.
//!
//! `/` starts editing the search query, Enter opens the highlighted patient,
//! Esc or Backspace returns to the list. In the detail view `t` jumps to the
//! tasks of the patient's linked project.

use crate::constants::EMPTY_PATIENTS_MESSAGE;
use crate::directory::{count_label, PatientDirectory};
use crate::entities::Patient;
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime::format_ymd;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Task summary for the project linked to a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedProject {
    pub patient_id: String,
    pub project_id: String,
    pub open_tasks: usize,
}

pub struct PatientPanelComponent {
    pub directory: PatientDirectory,
    pub icons: IconService,
    pub focused: bool,
    pub searching: bool,
    linked: Vec<LinkedProject>,
    selected_index: usize,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
}

impl PatientPanelComponent {
    pub fn new(directory: PatientDirectory) -> Self {
        Self {
            directory,
            icons: IconService::default(),
            focused: false,
            searching: false,
            linked: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, linked: Vec<LinkedProject>) {
        self.linked = linked;
    }

    /// True while keystrokes go to the search box
    pub fn captures_input(&self) -> bool {
        self.searching
    }

    fn highlighted(&self) -> Option<&Patient> {
        self.directory.filtered().get(self.selected_index).copied()
    }

    fn linked_for(&self, patient_id: &str) -> Option<&LinkedProject> {
        self.linked.iter().find(|l| l.patient_id == patient_id)
    }

    fn clamp_selection(&mut self) {
        let len = self.directory.filtered().len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.searching = false;
            }
            KeyCode::Backspace => {
                self.directory.pop_query_char();
                self.selected_index = 0;
            }
            KeyCode::Char(c) => {
                self.directory.push_query_char(c);
                self.selected_index = 0;
            }
            _ => {}
        }
        self.clamp_selection();
        Action::None
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        let len = self.directory.filtered().len();
        match key.code {
            KeyCode::Char('/') => {
                self.searching = true;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                self.selected_index = (self.selected_index + 1) % len;
                self.clamp_selection();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                self.selected_index = (self.selected_index + len - 1) % len;
                self.clamp_selection();
                Action::None
            }
            KeyCode::Enter => self
                .highlighted()
                .map_or(Action::None, |p| Action::SelectPatient(p.id.clone())),
            KeyCode::Backspace if !self.directory.query().is_empty() => {
                self.directory.set_query("");
                self.clamp_selection();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Action::PatientBack,
            KeyCode::Char('t') => self
                .directory
                .selected()
                .map_or(Action::None, |p| Action::OpenPatientTasks(p.id.clone())),
            _ => Action::None,
        }
    }

    fn block(&self, title: String) -> Block<'static> {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color))
    }

    fn render_list(&mut self, f: &mut Frame, rect: Rect) {
        let outer = self.block(format!("{} Patients", self.icons.patients_title()));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let [search_area, count_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let query = self.directory.query();
        let (search_text, search_style) = if query.is_empty() && !self.searching {
            ("Search name or MRN".to_string(), Style::default().fg(Color::DarkGray))
        } else if self.searching {
            (format!("{query}█"), Style::default().fg(Color::White))
        } else {
            (query.to_string(), Style::default().fg(Color::White))
        };
        let search_border = if self.searching { Color::Yellow } else { Color::DarkGray };
        let search = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.icons.search()), Style::default().fg(Color::Gray)),
            Span::styled(search_text, search_style),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(search_border)),
        );
        f.render_widget(search, search_area);

        let patients = self.directory.filtered();
        f.render_widget(
            Paragraph::new(Span::styled(count_label(patients.len()), Style::default().fg(Color::Gray))),
            count_area,
        );

        if patients.is_empty() {
            f.render_widget(
                Paragraph::new(Span::styled(EMPTY_PATIENTS_MESSAGE, Style::default().fg(Color::Gray)))
                    .wrap(Wrap { trim: true }),
                list_area,
            );
            return;
        }

        let rows: Vec<ListItem> = patients
            .iter()
            .map(|patient| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("[{}] ", patient.initials()),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(patient.name.clone(), Style::default().fg(Color::White)),
                    ]),
                    Line::from(Span::styled(
                        format!("     {} years • {} • {}", patient.age, patient.gender, patient.mrn),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let total = patients.len();
        let visible_rows = (list_area.height / 2) as usize;
        let scrollbar_area = ScrollbarHelper::needs_scrollbar(total, visible_rows).then(|| Rect {
            x: list_area.x + list_area.width.saturating_sub(1),
            width: 1,
            ..list_area
        });
        self.scrollbar_helper
            .update_state(total, self.selected_index, Some(visible_rows));
        self.clamp_selection();

        let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn render_detail(&self, f: &mut Frame, rect: Rect, patient: &Patient) {
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White);
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("← Back to all patients", Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("[{}] ", patient.initials()), heading),
                Span::styled(patient.name.clone(), value.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(format!("{} years • {}", patient.age, patient.gender), label)),
            Line::from(""),
            Line::from(Span::styled("Patient Summary", heading)),
        ];
        for (name, text) in [
            ("MRN", patient.mrn.clone()),
            ("Date of Birth", format_ymd(patient.date_of_birth)),
            ("Insurance", patient.insurance_provider.clone()),
            ("Policy", patient.insurance_policy_number.clone()),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{name}: "), label),
                Span::styled(text, value),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Primary Conditions", heading)));
        for condition in &patient.primary_conditions {
            lines.push(Line::from(vec![Span::styled("• ", label), Span::styled(condition.clone(), value)]));
        }

        lines.push(Line::from(""));
        match self.linked_for(&patient.id) {
            Some(linked) => {
                lines.push(Line::from(vec![
                    Span::styled("Open tasks: ", label),
                    Span::styled(linked.open_tasks.to_string(), Style::default().fg(Color::Yellow)),
                ]));
                lines.push(Line::from(Span::styled("Press 't' to view tasks", Style::default().fg(Color::DarkGray))));
            }
            None => lines.push(Line::from(Span::styled("No linked task list", label))),
        }

        let block = self.block(format!("{} {}", self.icons.patient(), patient.name));
        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), rect);
    }
}

impl Component for PatientPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.directory.selected().is_some() {
            self.handle_detail_key(key)
        } else if self.searching {
            self.handle_search_key(key)
        } else {
            self.handle_list_key(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectPatient(ref id) => {
                self.directory.select(id);
                action
            }
            Action::PatientBack => {
                self.directory.back();
                self.clamp_selection();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.directory.selected().cloned() {
            Some(patient) => self.render_detail(f, rect, &patient),
            None => self.render_list(f, rect),
        }
    }
}
