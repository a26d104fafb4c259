mod common;

use common::{setup_test_env, setup_test_env_at, tracker_for, NOW};
use expense_tracker::{
    core::services::{DeleteOutcome, SummaryScope},
    ledger::Month,
};

#[test]
fn first_add_on_empty_ledger_gets_id_one() {
    let env = setup_test_env();
    let id = env.tracker.add("Lunch", 12.50).expect("add");
    assert_eq!(id, 1);

    let expenses = env.tracker.list();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].description, "Lunch");
    assert_eq!(expenses[0].amount, 12.50);
    assert_eq!(expenses[0].date.to_rfc3339(), "2025-03-14T09:30:00+01:00");
}

#[test]
fn ids_increase_across_invocations() {
    let env = setup_test_env();
    let mut ids = Vec::new();
    for n in 0..5 {
        // fresh tracker per add, like separate process runs
        let tracker = tracker_for(&env.data_file, NOW);
        ids.push(tracker.add(&format!("item {n}"), 1.0).unwrap());
    }
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let env = setup_test_env();
    for (desc, amount) in [("Lunch", 12.5), ("Taxi", 8.0), ("Books", 30.0), ("Coffee", 3.0)] {
        env.tracker.add(desc, amount).unwrap();
    }
    let before = env.tracker.list();

    let outcome = env.tracker.delete(2).unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(ref e) if e.description == "Taxi"));

    let after = env.tracker.list();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|e| e.id != 2));
    let ids: Vec<_> = after.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn deleting_twice_reports_not_found() {
    let env = setup_test_env();
    env.tracker.add("Lunch", 12.5).unwrap();
    env.tracker.add("Taxi", 8.0).unwrap();

    assert!(matches!(env.tracker.delete(1).unwrap(), DeleteOutcome::Deleted(_)));
    assert_eq!(env.tracker.delete(1).unwrap(), DeleteOutcome::NotFound);

    let remaining = env.tracker.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].description, "Taxi");
}

#[test]
fn delete_on_empty_ledger_reports_empty() {
    let env = setup_test_env();
    assert_eq!(env.tracker.delete(1).unwrap(), DeleteOutcome::Empty);
}

#[test]
fn next_id_follows_last_record_after_deleting_the_tail() {
    let env = setup_test_env();
    env.tracker.add("a", 1.0).unwrap();
    env.tracker.add("b", 1.0).unwrap();
    env.tracker.delete(2).unwrap();
    assert_eq!(env.tracker.add("c", 1.0).unwrap(), 2);
}

#[test]
fn monthly_summary_is_scoped_to_the_current_year() {
    let env = setup_test_env_at("2025-03-10T12:00:00+00:00");
    env.tracker.add("March groceries", 10.0).unwrap();
    tracker_for(&env.data_file, "2025-06-10T12:00:00+00:00")
        .add("June rent", 20.0)
        .unwrap();
    tracker_for(&env.data_file, "2024-03-10T12:00:00+00:00")
        .add("Last year's March", 99.0)
        .unwrap();

    let tracker = tracker_for(&env.data_file, "2025-10-19T08:00:00+00:00");
    let march = tracker.summarize(Some(Month::March));
    assert_eq!(march.total, 10.0);
    assert_eq!(
        march.scope,
        SummaryScope::Month {
            year: 2025,
            month: Month::March
        }
    );
    assert_eq!(tracker.summarize(None).total, 129.0);
    assert_eq!(tracker.summarize(Some(Month::June)).total, 20.0);
    assert_eq!(tracker.summarize(Some(Month::January)).total, 0.0);
}

#[test]
fn add_after_largest_id_fails_and_keeps_file() {
    let env = setup_test_env();
    let existing = format!(
        r#"[{{"id": {}, "description": "Last", "amount": 1, "date": "2025-03-01T10:00:00+00:00"}}]"#,
        i64::MAX
    );
    std::fs::write(&env.data_file, &existing).unwrap();

    assert!(env.tracker.add("Next", 2.0).is_err());
    assert_eq!(std::fs::read_to_string(&env.data_file).unwrap(), existing);
}

#[test]
fn list_is_idempotent() {
    let env = setup_test_env();
    env.tracker.add("Lunch", 12.5).unwrap();
    env.tracker.add("Taxi", 8.0).unwrap();
    assert_eq!(env.tracker.list(), env.tracker.list());
}

#[test]
fn negative_and_zero_amounts_are_accepted() {
    let env = setup_test_env();
    env.tracker.add("Refund", -5.0).unwrap();
    env.tracker.add("", 0.0).unwrap();
    assert_eq!(env.tracker.summarize(None).total, -5.0);
}
