use chrono::NaiveDate;
use clinidash::directory::{count_label, PatientDirectory};
use clinidash::seed::SeedData;
use pretty_assertions::assert_eq;

fn directory() -> PatientDirectory {
    let seed = SeedData::builtin(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    PatientDirectory::new(seed.patients)
}

fn names(directory: &PatientDirectory) -> Vec<&str> {
    directory.filtered().into_iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_empty_query_lists_everyone_in_order() {
    let directory = directory();
    assert_eq!(
        names(&directory),
        vec!["Robert Johnson", "John Michael Doe", "Emily Chen", "Sarah Williams"]
    );
}

#[test]
fn test_search_by_name_ignores_case() {
    let mut directory = directory();
    directory.set_query("chen");
    assert_eq!(names(&directory), vec!["Emily Chen"]);

    directory.set_query("JOHN");
    assert_eq!(names(&directory), vec!["Robert Johnson", "John Michael Doe"]);
}

#[test]
fn test_search_by_mrn() {
    let mut directory = directory();
    directory.set_query("MRN-002341");
    assert_eq!(names(&directory), vec!["Emily Chen"]);
    directory.set_query("mrn-002341");
    assert_eq!(names(&directory), vec!["Emily Chen"]);
}

#[test]
fn test_query_editing() {
    let mut directory = directory();
    for c in "zzz".chars() {
        directory.push_query_char(c);
    }
    assert!(directory.filtered().is_empty());
    directory.pop_query_char();
    assert_eq!(directory.query(), "zz");
}

#[test]
fn test_select_and_back() {
    let mut directory = directory();
    directory.select("p2");
    assert_eq!(directory.selected().map(|p| p.mrn.as_str()), Some("MRN-002341"));

    directory.select("nobody");
    assert_eq!(directory.selected().map(|p| p.id.as_str()), Some("p2"));

    directory.back();
    assert!(directory.selected().is_none());
}

#[test]
fn test_initials() {
    let directory = directory();
    let initials: Vec<String> = directory.patients().iter().map(|p| p.initials()).collect();
    assert_eq!(initials, vec!["RJ", "JMD", "EC", "SW"]);
}

#[test]
fn test_count_label() {
    assert_eq!(count_label(0), "0 patients");
    assert_eq!(count_label(1), "1 patient");
    assert_eq!(count_label(4), "4 patients");
}
