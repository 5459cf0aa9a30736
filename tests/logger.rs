use clinidash::logger::Logger;

#[test]
fn test_logs_are_returned_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("] second"));
    assert!(logs[1].ends_with("] first"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_capacity_drops_oldest() {
    let logger = Logger::with_capacity(3);
    for i in 0..5 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logger.len(), 3);
    assert!(logs[0].ends_with("entry 4"));
    assert!(logs[2].ends_with("entry 2"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let other = logger.clone();
    other.log("from clone".to_string());
    assert_eq!(logger.len(), 1);

    logger.clear();
    assert!(other.is_empty());
    assert!(other.get_logs().is_empty());
}
