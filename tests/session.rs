use chrono::{Duration, NaiveDate, NaiveDateTime};
use clinidash::seed::SeedData;
use clinidash::session::TodoSession;
use clinidash::store::{EntryKind, Section};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn now() -> NaiveDateTime {
    today().and_hms_opt(10, 0, 0).unwrap()
}

fn builtin_session() -> TodoSession {
    let (session, _) = SeedData::builtin(today()).into_session(Duration::days(7)).unwrap();
    session
}

fn visible_ids(session: &TodoSession) -> Vec<String> {
    session.visible_tasks(now()).into_iter().map(|t| t.id).collect()
}

#[test]
fn test_default_section_is_today() {
    let session = builtin_session();
    assert_eq!(session.selected_section(), &Section::Today);
    assert!(visible_ids(&session).is_empty());
    assert_eq!(session.empty_message(), "No tasks in due today.");
}

#[test]
fn test_section_views_of_builtin_caseload() {
    let mut session = builtin_session();

    session.select_section(Section::Upcoming);
    assert_eq!(visible_ids(&session), vec!["3", "4", "7"]);
    assert_eq!(session.section_title(), "Due This Week");

    session.select_section(Section::Project("robert-johnson".to_string()));
    assert_eq!(visible_ids(&session), vec!["4", "5", "6"]);
    assert_eq!(session.section_title(), "Robert Johnson");

    session.select_section(Section::Label("monitoring".to_string()));
    assert_eq!(visible_ids(&session), vec!["1", "3", "6", "7"]);

    session.select_section(Section::Inbox);
    assert!(visible_ids(&session).is_empty());
    assert_eq!(session.empty_message(), "All caught up! Your inbox is empty.");

    session.select_section(Section::parse("project-ghost"));
    assert!(visible_ids(&session).is_empty());
    assert_eq!(session.section_title(), "Tasks");
}

#[test]
fn test_only_one_task_expanded() {
    let mut session = builtin_session();
    session.click_task("1");
    assert_eq!(session.expanded_task_id(), Some("1"));

    session.click_task("2");
    assert_eq!(session.expanded_task_id(), Some("2"));
    assert!(!session.is_expanded("1"));

    session.click_task("2");
    assert_eq!(session.expanded_task_id(), None);
}

#[test]
fn test_expansion_survives_section_change() {
    let mut session = builtin_session();
    session.click_task("4");
    session.select_section(Section::Inbox);
    assert_eq!(session.expanded_task_id(), Some("4"));
    assert_eq!(session.expanded_task().map(|t| t.id.as_str()), Some("4"));
}

#[test]
fn test_delete_clears_expansion_only_for_that_task() {
    let mut session = builtin_session();
    session.click_task("5");
    assert!(session.delete_task("6"));
    assert_eq!(session.expanded_task_id(), Some("5"));

    assert!(session.delete_task("5"));
    assert_eq!(session.expanded_task_id(), None);
    assert!(session.expanded_task().is_none());
    assert!(!session.delete_task("5"));
}

#[test]
fn test_update_keeps_expansion() {
    let mut session = builtin_session();
    session.click_task("7");
    let mut task = session.store().get("7").unwrap().clone();
    task.title = "Reassess inhaler technique".to_string();
    assert!(session.update_task(task));
    assert_eq!(session.expanded_task().unwrap().title, "Reassess inhaler technique");
}

#[test]
fn test_nav_entries_order_and_counts() {
    let mut session = builtin_session();
    let entries = session.nav_entries(now());
    let titles: Vec<&str> = entries.iter().take(8).map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Inbox",
            "Due Today",
            "Due This Week",
            "Patients",
            "John Michael Doe",
            "Robert Johnson",
            "Emily Chen",
            "Labels"
        ]
    );
    assert_eq!(entries.len(), 18);
    assert_eq!(entries[2].count, 3);
    assert_eq!(entries[3].kind, EntryKind::Group);
    assert_eq!(entries[3].count, 3);
    assert_eq!(entries[4].count, 3);
    assert_eq!(entries[4].depth(), 1);

    let monitoring = entries.iter().find(|e| e.section == Section::Label("monitoring".to_string())).unwrap();
    assert_eq!(monitoring.count, 4);

    session.delete_task("1");
    let entries = session.nav_entries(now());
    assert_eq!(entries[4].count, 2);
}

#[test]
fn test_project_for_patient() {
    let session = builtin_session();
    assert_eq!(session.project_for_patient("p2").map(|p| p.id.as_str()), Some("emily-chen"));
    assert!(session.project_for_patient("p4").is_none());
}
