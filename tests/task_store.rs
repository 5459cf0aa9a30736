use chrono::{Duration, NaiveDate, NaiveDateTime};
use clinidash::constants::DEFAULT_UPCOMING_WINDOW_DAYS;
use clinidash::entities::{Priority, Subtask, Task};
use clinidash::store::{Section, StoreError, TaskStore};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn now() -> NaiveDateTime {
    today().and_hms_opt(10, 0, 0).unwrap()
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

fn sample_store() -> TaskStore {
    TaskStore::new(vec![
        Task::new("a", "Due today").with_project("p").with_due_date(today()),
        Task::new("b", "Due in three days").with_project("p").with_due_date(today() + Duration::days(3)),
        Task::new("c", "Inbox open"),
        Task::new("d", "Inbox done").completed(true),
        Task::new("e", "Labelled").with_labels(["labs"]).with_due_date(today() + Duration::days(8)),
    ])
    .unwrap()
}

#[test]
fn test_new_rejects_duplicate_ids() {
    let result = TaskStore::new(vec![Task::new("x", "one"), Task::new("x", "two")]);
    assert_eq!(result.unwrap_err(), StoreError::DuplicateId("x".to_string()));
}

#[test]
fn test_add_rejects_duplicate_ids() {
    let mut store = sample_store();
    assert!(store.add(Task::new("a", "again")).is_err());
    assert!(store.add(Task::new("f", "fresh")).is_ok());
    assert_eq!(store.len(), 6);
}

#[test]
fn test_today_and_upcoming_are_disjoint_for_noon_clock() {
    let store = sample_store();
    assert_eq!(ids(&store.filter_by_section(&Section::Today, now())), vec!["a"]);
    assert_eq!(ids(&store.filter_by_section(&Section::Upcoming, now())), vec!["b"]);
}

#[test]
fn test_upcoming_respects_window() {
    let store = sample_store().with_upcoming_window(Duration::days(14));
    assert_eq!(ids(&store.filter_by_section(&Section::Upcoming, now())), vec!["b", "e"]);
}

#[test]
fn test_unbounded_window_lists_nothing_instead_of_panicking() {
    let store = sample_store().with_upcoming_window(Duration::MAX);
    assert!(store.filter_by_section(&Section::Upcoming, now()).is_empty());
}

#[test]
fn test_inbox_excludes_completed_and_project_tasks() {
    let store = sample_store();
    // a and b have a project, d is completed
    assert_eq!(ids(&store.filter_by_section(&Section::Inbox, now())), vec!["c", "e"]);
}

#[test]
fn test_completed_tasks_sort_last_but_stay_listed() {
    let mut store = sample_store();
    store.toggle_completed("a");
    let listed = store.filter_by_section(&Section::Project("p".to_string()), now());
    assert_eq!(ids(&listed), vec!["b", "a"]);
    assert!(listed[1].completed);
}

#[test]
fn test_unknown_section_lists_everything() {
    let store = sample_store();
    let all = store.filter_by_section(&Section::parse("nonsense"), now());
    assert_eq!(ids(&all), vec!["a", "b", "c", "e", "d"]);
}

#[test]
fn test_label_and_project_sections() {
    let store = sample_store();
    assert_eq!(ids(&store.filter_by_section(&Section::Labels, now())), vec!["e"]);
    assert_eq!(ids(&store.filter_by_section(&Section::Label("labs".to_string()), now())), vec!["e"]);
    assert_eq!(ids(&store.filter_by_section(&Section::Projects, now())), vec!["a", "b"]);
    assert!(store.filter_by_section(&Section::Label("missing".to_string()), now()).is_empty());
}

#[test]
fn test_update_replaces_in_place() {
    let mut store = sample_store();
    let replacement = Task::new("b", "Renamed").with_priority(Priority::High);
    assert!(store.update(replacement));
    let task = store.get("b").unwrap();
    assert_eq!(task.title, "Renamed");
    assert_eq!(task.project_id, None);
    assert_eq!(store.tasks()[1].id, "b");
}

#[test]
fn test_writes_on_unknown_ids_are_noops() {
    let mut store = sample_store();
    assert!(!store.update(Task::new("zz", "ghost")));
    assert!(!store.delete("zz"));
    assert!(!store.toggle_completed("zz"));
    assert!(!store.cycle_priority("zz"));
    assert!(!store.rename("zz", "x"));
    assert_eq!(store.len(), 5);
}

#[test]
fn test_cycle_priority_wraps() {
    let mut store = sample_store();
    let seen: Vec<Priority> = (0..3)
        .map(|_| {
            store.cycle_priority("c");
            store.get("c").unwrap().priority
        })
        .collect();
    assert_eq!(seen, vec![Priority::Low, Priority::High, Priority::Normal]);
}

#[test]
fn test_toggle_subtask_checks_range() {
    let mut store = TaskStore::new(vec![
        Task::new("t", "With steps").with_subtasks(vec![Subtask::new("s1", "one"), Subtask::new("s2", "two")])
    ])
    .unwrap();
    assert!(store.toggle_subtask("t", 1));
    assert!(!store.toggle_subtask("t", 2));
    assert_eq!(store.get("t").unwrap().subtask_progress(), (1, 2));
}

#[test]
fn test_counts_are_live() {
    let mut store = sample_store();
    assert_eq!(store.project_task_count("p"), 2);
    assert_eq!(store.open_project_task_count("p"), 2);
    store.toggle_completed("a");
    assert_eq!(store.project_task_count("p"), 2);
    assert_eq!(store.open_project_task_count("p"), 1);
    store.delete("b");
    assert_eq!(store.project_task_count("p"), 1);
    assert_eq!(store.count_in_section(&Section::Today, now()), 1);
}

fn mixed_store() -> TaskStore {
    TaskStore::new(vec![
        Task::new("m1", "Done with project").with_project("x").with_due_date(today()).completed(true),
        Task::new("m2", "Open with project").with_project("x").with_labels(["labs"]),
        Task::new("m3", "Done inbox").with_labels(["labs"]).with_due_date(today() + Duration::days(2)).completed(true),
        Task::new("m4", "Open inbox").with_due_date(today()),
        Task::new("m5", "Done other project").with_project("y").with_labels(["labs"]).completed(true),
        Task::new("m6", "Open due soon").with_project("y").with_due_date(today() + Duration::days(2)),
    ])
    .unwrap()
}

fn all_sections() -> Vec<Section> {
    ["inbox", "today", "upcoming", "projects", "project-x", "labels", "label-labs", "unknown"]
        .into_iter()
        .map(Section::parse)
        .collect()
}

#[test]
fn test_every_section_is_stable_partition_of_matches() {
    let store = mixed_store();
    let window = Duration::days(DEFAULT_UPCOMING_WINDOW_DAYS);
    for section in all_sections() {
        let matching: Vec<&Task> = store
            .tasks()
            .iter()
            .filter(|t| section.matches(t, now(), window))
            .collect();
        let expected: Vec<&str> = matching
            .iter()
            .filter(|t| !t.completed)
            .chain(matching.iter().filter(|t| t.completed))
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids(&store.filter_by_section(&section, now())), expected, "section {}", section.id());
    }

    let everything = store.filter_by_section(&Section::parse("unknown"), now());
    assert_eq!(ids(&everything), vec!["m2", "m4", "m6", "m1", "m3", "m5"]);
}

#[test]
fn test_deleted_task_leaves_every_section() {
    let mut store = mixed_store();
    assert!(store.delete("m3"));
    assert!(store.delete("m6"));
    for section in all_sections() {
        let listed = store.filter_by_section(&section, now());
        assert!(!listed.iter().any(|t| t.id == "m3" || t.id == "m6"), "section {}", section.id());
    }
}
