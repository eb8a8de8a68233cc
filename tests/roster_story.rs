//! End-to-end roster story: a session from startup load to shutdown save
//!
//! Walks through the flow a registrar's front end drives: open the store,
//! seed the registry, add/modify/remove enrollments, query, and persist.

use course_roster::{Record, Registry, Store, StoreConfig};

fn enrollment(
    student_id: &str,
    name: &str,
    course_id: &str,
    semester: &str,
    hours: i32,
    credit: f64,
) -> Record {
    Record::new(student_id, name, course_id, "intro to cs", semester, hours, credit, "exam")
}

#[test]
fn story_add_query_and_reject() {
    let mut registry = Registry::new();

    assert!(registry.add(enrollment("123456", "john smith", "ABC123", "2024-F", 3, 3.0)));
    assert_eq!(registry.all()[0].student_name(), "John Smith");

    // Same identity, different hours.
    assert!(!registry.add(enrollment("123456", "john smith", "ABC123", "2024-F", 5, 3.0)));
    assert_eq!(registry.len(), 1);

    assert_eq!(registry.count_by_semester("2024-f"), 1);

    assert!(registry.add(enrollment("654321", "ann lee", "XYZ789", "2024-F", 2, 1.5)));
    let credits: Vec<f64> = registry.sorted_by_credit().iter().map(Record::credit).collect();
    assert_eq!(credits, vec![1.5, 3.0]);
}

#[test]
fn story_full_session() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = StoreConfig::in_dir(dir.path());

    // First session: empty start, add, save.
    {
        let store = Store::open(config.clone()).expect("open store");
        let mut registry = Registry::from_records(store.load());
        assert!(registry.is_empty());

        assert!(registry.add(enrollment("123456", "john smith", "ABC123", "2024-F", 3, 3.0)));
        assert!(registry.add(enrollment("123456", "john smith", "DEF456", "2024-S", 2, 2.0)));
        assert!(registry.add(enrollment("654321", "ann lee", "ABC123", "2024-F", 3, 3.0)));
        assert!(store.save(registry.records()));
    }

    // Second session: reload, modify, remove, save.
    {
        let store = Store::open(config.clone()).expect("open store");
        let mut registry = Registry::from_records(store.load());
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.find_by_student_id("123456").len(), 2);
        assert_eq!(registry.search("ann").len(), 1);

        let moved = enrollment("654321", "ann lee", "ABC123", "2025-S", 3, 4.0);
        assert!(registry.modify("654321", "abc123", "2024-f", moved));
        assert_eq!(registry.all()[2].semester(), "2025-S");

        assert!(registry.remove("123456", "DEF456", "2024-S"));
        assert!(store.save(registry.records()));
    }

    // Third session: state survived, backup mirrors it.
    let store = Store::open(config).expect("open store");
    let registry = Registry::from_records(store.load());
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.count_by_semester("2025-S"), 1);
    assert_eq!(store.import_from(store.backup_file()), registry.all());
}
