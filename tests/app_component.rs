use chrono::{Duration, NaiveDate, NaiveDateTime};
use clinidash::config::Config;
use clinidash::logger::Logger;
use clinidash::seed::SeedData;
use clinidash::store::Section;
use clinidash::ui::core::actions::{DialogType, FocusPane};
use clinidash::ui::core::event_handler::EventType;
use clinidash::ui::core::Component;
use clinidash::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn app_in(section: &str) -> AppComponent {
    let mut config = Config::default();
    config.ui.default_section = section.to_string();
    let (session, directory) = SeedData::builtin(now().date())
        .into_session(Duration::days(7))
        .unwrap();
    AppComponent::new(session, directory, &config, Logger::new()).with_clock(now())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_str(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render_to_string(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn visible_ids(app: &AppComponent) -> Vec<String> {
    app.session().visible_tasks(now()).into_iter().map(|t| t.id).collect()
}

#[test]
fn test_starts_in_configured_section() {
    let app = app_in("project-john-doe");
    assert_eq!(
        app.session().selected_section(),
        &Section::Project("john-doe".to_string())
    );
    assert_eq!(app.focus(), FocusPane::Todo);
    assert_eq!(app.task_list().tasks.len(), 3);
}

#[test]
fn test_q_quits_from_task_list() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_tab_toggles_focus() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusPane::Patients);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusPane::Todo);
}

#[test]
fn test_space_completes_selected_task_and_sets_status() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Char(' '));

    assert!(app.session().store().get("1").unwrap().completed);
    assert_eq!(app.status_message(), Some("✅ Task completed"));
    assert_eq!(visible_ids(&app), vec!["2", "3", "1"]);

    // Next key clears the message
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.status_message(), None);
}

#[test]
fn test_selection_follows_task_after_completion() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.task_list().get_selected_task().map(|t| t.id.as_str()), Some("1"));

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.status_message(), Some("✅ Task reopened"));
    assert_eq!(visible_ids(&app), vec!["1", "2", "3"]);
}

#[test]
fn test_enter_expands_and_digits_toggle_subtasks() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().expanded_task_id(), Some("1"));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.session().store().get("1").unwrap().subtask_progress(), (1, 3));

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.session().store().get("1").unwrap().subtask_progress(), (1, 3));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.session().expanded_task_id(), None);
    assert!(!app.should_quit());
}

#[test]
fn test_delete_asks_for_confirmation() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(
        app.dialog_type(),
        Some(DialogType::DeleteConfirmation { task_id, .. }) if task_id == "1"
    ));

    press(&mut app, KeyCode::Enter);
    assert!(!app.is_dialog_visible());
    assert!(app.session().store().get("1").is_none());
    assert_eq!(app.status_message(), Some("✅ Task deleted"));
    assert_eq!(visible_ids(&app), vec!["2", "3"]);
}

#[test]
fn test_escape_cancels_delete() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
    assert!(app.session().store().get("1").is_some());
    assert!(!app.should_quit());
}

#[test]
fn test_create_task_in_viewed_project() {
    let mut app = app_in("project-emily-chen");
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "  Refill inhaler ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.status_message(), Some("✅ Task created"));
    assert_eq!(app.session().store().len(), 9);
    let created = app.session().store().tasks().last().unwrap();
    assert_eq!(created.title, "Refill inhaler");
    assert_eq!(created.project_id.as_deref(), Some("emily-chen"));
    assert_eq!(app.task_list().tasks.len(), 3);
}

#[test]
fn test_empty_title_keeps_creation_dialog_open() {
    let mut app = app_in("inbox");
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert!(app.is_dialog_visible());
    assert_eq!(app.session().store().len(), 8);
}

#[test]
fn test_edit_renames_task() {
    let mut app = app_in("project-robert-johnson");
    let length = app.session().store().get("4").unwrap().title.chars().count();
    press(&mut app, KeyCode::Char('e'));
    for _ in 0..length {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "Order HbA1c");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session().store().get("4").unwrap().title, "Order HbA1c");
    assert_eq!(app.status_message(), Some("✅ Task updated"));
}

#[test]
fn test_priority_cycles_on_p() {
    let mut app = app_in("project-robert-johnson");
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(
        app.session().store().get("4").unwrap().priority,
        clinidash::Priority::Normal
    );
}

#[test]
fn test_shift_j_moves_to_next_section() {
    let mut app = app_in("inbox");
    press(&mut app, KeyCode::Char('J'));
    assert_eq!(app.session().selected_section(), &Section::Today);
    press(&mut app, KeyCode::Char('K'));
    assert_eq!(app.session().selected_section(), &Section::Inbox);
}

#[test]
fn test_expansion_kept_across_sections() {
    let mut app = app_in("project-john-doe");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('J'));
    assert_eq!(
        app.session().selected_section(),
        &Section::Project("robert-johnson".to_string())
    );
    assert_eq!(app.session().expanded_task_id(), Some("1"));
}

#[test]
fn test_search_swallows_quit_key() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "q");

    assert!(!app.should_quit());
    assert_eq!(app.directory().query(), "q");

    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_patient_detail_opens_linked_tasks() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "chen");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.directory().selected().map(|p| p.id.as_str()), Some("p2"));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(
        app.session().selected_section(),
        &Section::Project("emily-chen".to_string())
    );
    assert_eq!(app.focus(), FocusPane::Todo);
    assert_eq!(visible_ids(&app), vec!["7", "8"]);
}

#[test]
fn test_patient_without_task_list_shows_info() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.directory().selected().map(|p| p.id.as_str()), Some("p4"));

    press(&mut app, KeyCode::Char('t'));
    assert!(matches!(app.dialog_type(), Some(DialogType::Info(_))));

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.is_dialog_visible());
    press(&mut app, KeyCode::Backspace);
    assert!(app.directory().selected().is_none());
}

#[test]
fn test_help_and_icon_theme_keys() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());

    let before = app.icons().theme();
    press(&mut app, KeyCode::Char('i'));
    assert_ne!(app.icons().theme(), before);
}

#[test]
fn test_frozen_clock_does_not_resync() {
    let mut app = app_in("today");
    assert!(!app.on_tick());
}

#[test]
fn test_render_empty_section() {
    let mut app = app_in("today");
    let screen = render_to_string(&mut app);
    assert!(screen.contains("No tasks found"));
    assert!(screen.contains("No tasks in due today."));
    assert!(screen.contains("0 tasks"));
    assert!(screen.contains("Search name or MRN"));
    assert!(screen.contains("4 patients"));
}

#[test]
fn test_render_project_section() {
    let mut app = app_in("project-john-doe");
    let screen = render_to_string(&mut app);
    assert!(screen.contains("John Michael Doe"));
    assert!(screen.contains("3 tasks"));
    assert!(screen.contains("Review renal function and repeat labs"));
}

#[test]
fn test_render_patient_detail() {
    let mut app = app_in("today");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    let screen = render_to_string(&mut app);
    assert!(screen.contains("← Back to all patients"));
    assert!(screen.contains("MRN-001458"));
    assert!(screen.contains("Open tasks: 3"));
}
