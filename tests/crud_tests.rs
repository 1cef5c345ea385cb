// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pefi::App;
use pefi::models::{Bill, Installment};

#[test]
fn account_update_keeps_derived_balance() {
    let mut app = App::open_in_memory().unwrap();
    let id = app.create_account("Checking", "bank").unwrap().id;
    app.create_transaction(id, "2025-01-01", "x", 700, "", "")
        .unwrap();

    app.update_account(id, "Main", "debt").unwrap();
    let acct = app.account(id).unwrap();
    assert_eq!(acct.name, "Main");
    assert_eq!(acct.r#type, "debt");
    assert_eq!(acct.balance, 700);
}

#[test]
fn account_missing_ids_are_not_found() {
    let app = App::open_in_memory().unwrap();
    assert!(app.update_account(5, "a", "b").unwrap_err().is_not_found());
    assert!(app.delete_account(5).unwrap_err().is_not_found());
    assert!(app.account(5).unwrap_err().is_not_found());
}

#[test]
fn accounts_list_sorted_by_name() {
    let app = App::open_in_memory().unwrap();
    app.create_account("Savings", "bank").unwrap();
    app.create_account("Card", "debt").unwrap();
    let names: Vec<String> = app.accounts().unwrap().into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["Card", "Savings"]);
}

#[test]
fn bill_lifecycle() {
    let app = App::open_in_memory().unwrap();
    let rent = app.create_bill("Rent", 120_000, 1).unwrap();
    let power = app.create_bill("Power", 8_000, 15).unwrap();
    assert_eq!(app.bills().unwrap(), vec![rent.clone(), power.clone()]);

    app.update_bill(power.id, "Electricity", 9_500, 20).unwrap();
    assert_eq!(
        app.bill(power.id).unwrap(),
        Bill {
            id: power.id,
            name: "Electricity".into(),
            amount: 9_500,
            due_day: 20,
        }
    );

    app.delete_bill(rent.id).unwrap();
    assert_eq!(app.bills().unwrap().len(), 1);
    assert!(app.delete_bill(rent.id).unwrap_err().is_not_found());
    assert!(app.update_bill(rent.id, "x", 1, 1).unwrap_err().is_not_found());
}

#[test]
fn json_shapes_use_camel_case() {
    let mut app = App::open_in_memory().unwrap();
    let a = app.create_account("Checking", "bank").unwrap();
    let t = app
        .create_transaction(a.id, "2025-01-01", "x", 1, "", "")
        .unwrap();
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(v["accountId"], a.id);

    let acct = serde_json::to_value(app.account(a.id).unwrap()).unwrap();
    assert_eq!(acct["type"], "bank");

    let bill = serde_json::to_value(app.create_bill("Rent", 1, 3).unwrap()).unwrap();
    assert_eq!(bill["dueDay"], 3);

    let id = app.create_debt("Loan").unwrap().id;
    let schedule = vec![Installment {
        due_date: "2025-03-01".into(),
        amount: 5,
        status: "paid".into(),
        paid_date: "2025-02-27".into(),
    }];
    app.update_debt(id, "Loan", 5, "", &schedule).unwrap();
    let debt = serde_json::to_value(app.debt(id).unwrap()).unwrap();
    let first = &debt["installments"][0];
    assert_eq!(first["dueDate"], "2025-03-01");
    assert_eq!(first["paidDate"], "2025-02-27");
    assert!(first.get("due_date").is_none());

    let parsed: Installment =
        serde_json::from_str(r#"{"dueDate":"2025-04-01","amount":7,"status":"upcoming"}"#)
            .unwrap();
    assert_eq!(parsed.paid_date, "");
}
