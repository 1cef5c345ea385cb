// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pefi::App;

fn setup() -> (App, i64) {
    let mut app = App::open_in_memory().unwrap();
    let a = app.create_account("Checking", "bank").unwrap().id;
    app.add_category("expense", "Food").unwrap();
    app.add_category("expense", "Rent").unwrap();
    app.add_category("income", "Salary").unwrap();
    for (name, cat) in [("Lunch", "Food"), ("Groceries", "Food"), ("Dinner", "Food"), ("May", "Rent")] {
        app.create_transaction(a, "2025-05-01", name, -1000, cat, "")
            .unwrap();
    }
    (app, a)
}

fn count_with(app: &App, category: &str) -> usize {
    app.all_transactions()
        .unwrap()
        .iter()
        .filter(|t| t.category == category)
        .count()
}

#[test]
fn rename_cascades_to_referencing_transactions() {
    let (mut app, _) = setup();
    let moved = app.rename_category("expense", "Food", "Dining").unwrap();
    assert_eq!(moved, 3);

    assert_eq!(count_with(&app, "Dining"), 3);
    assert_eq!(count_with(&app, "Food"), 0);
    assert_eq!(count_with(&app, "Rent"), 1);

    assert!(app.category("expense", "Food").unwrap_err().is_not_found());
    let dining = app.category("expense", "Dining").unwrap();
    assert_eq!(dining.name, "Dining");
    assert_eq!(app.categories("expense").unwrap(), ["Dining", "Rent"]);
}

#[test]
fn rename_missing_category_is_not_found_and_touches_nothing() {
    let (mut app, _) = setup();
    let err = app.rename_category("income", "Food", "Dining").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_aborted());
    assert_eq!(count_with(&app, "Food"), 3);
    assert_eq!(count_with(&app, "Dining"), 0);
}

#[test]
fn rename_onto_existing_name_conflicts_and_rolls_back() {
    let (mut app, _) = setup();
    let err = app.rename_category("expense", "Food", "Rent").unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err:?}");
    assert_eq!(app.categories("expense").unwrap(), ["Food", "Rent"]);
    assert_eq!(count_with(&app, "Food"), 3);
    assert_eq!(count_with(&app, "Rent"), 1);
}

#[test]
fn cascade_failure_restores_category_row() {
    let (mut app, _) = setup();
    app.connection()
        .execute_batch(
            "CREATE TRIGGER block_cascade BEFORE UPDATE OF category ON transactions
             BEGIN SELECT RAISE(ABORT, 'injected fault'); END;",
        )
        .unwrap();

    let err = app.rename_category("expense", "Food", "Dining").unwrap_err();
    assert!(err.is_aborted());
    assert!(app.category("expense", "Food").is_ok());
    assert!(app.category("expense", "Dining").unwrap_err().is_not_found());
    assert_eq!(count_with(&app, "Food"), 3);
}

#[test]
fn same_name_allowed_across_types() {
    let (app, _) = setup();
    app.add_category("income", "Food").unwrap();
    let err = app.add_category("expense", "Food").unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn delete_category_leaves_transaction_text() {
    let (app, _) = setup();
    app.delete_category("expense", "Rent").unwrap();
    assert_eq!(count_with(&app, "Rent"), 1);
    assert!(app.delete_category("expense", "Rent").unwrap_err().is_not_found());
}
