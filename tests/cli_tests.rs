// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pefi::{App, cli, commands};

fn sub(args: &[&str]) -> (String, clap::ArgMatches) {
    let matches = cli::build_cli().get_matches_from(args);
    let (name, m) = matches.subcommand().expect("subcommand");
    (name.to_string(), m.clone())
}

#[test]
fn tx_add_parses_decimal_amount_and_updates_balance() {
    let mut app = App::open_in_memory().unwrap();
    let a = app.create_account("Checking", "bank").unwrap().id;
    let acct = a.to_string();

    let (name, m) = sub(&[
        "pefi", "tx", "add", "--account", acct.as_str(), "--date", "2025-01-09", "--name", "Coffee",
        "--amount", "-4.50", "--category", "Dining",
    ]);
    assert_eq!(name, "tx");
    commands::transactions::handle(&mut app, &m).unwrap();

    let txs = app.transactions(a).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, -450);
    assert_eq!(txs[0].category, "Dining");
    assert_eq!(txs[0].notes, "");
    assert_eq!(app.account(a).unwrap().balance, -450);
}

#[test]
fn category_rename_via_cli() {
    let mut app = App::open_in_memory().unwrap();
    app.add_category("expense", "Food").unwrap();

    let (_, m) = sub(&[
        "pefi", "category", "rename", "--type", "expense", "--from", "Food", "--to", "Dining",
    ]);
    commands::categories::handle(&mut app, &m).unwrap();
    assert_eq!(app.categories("expense").unwrap(), ["Dining"]);
}

#[test]
fn debt_update_replaces_schedule_via_cli() {
    let mut app = App::open_in_memory().unwrap();
    let id = app.create_debt("Laptop").unwrap().id.to_string();

    let (_, m) = sub(&[
        "pefi", "debt", "update", "--id", id.as_str(), "--name", "Laptop", "--amount", "1200",
        "--installment", "2025-01-15:600:paid:2025-01-14",
        "--installment", "2025-02-15:600:upcoming",
    ]);
    commands::debts::handle(&mut app, &m).unwrap();

    let debt = app.debt(id.parse().unwrap()).unwrap();
    assert_eq!(debt.amount, 120_000);
    assert_eq!(debt.installments.len(), 2);
    assert_eq!(debt.installments[0].paid_date, "2025-01-14");
    assert_eq!(debt.remaining(), 60_000);
}

#[test]
fn debt_update_rejects_malformed_installment_before_writing() {
    let mut app = App::open_in_memory().unwrap();
    let id = app.create_debt("Laptop").unwrap().id;
    let id_s = id.to_string();

    let (_, m) = sub(&[
        "pefi", "debt", "update", "--id", id_s.as_str(), "--name", "Changed", "--amount", "5",
        "--installment", "2025-01-15",
    ]);
    let err = commands::debts::handle(&mut app, &m).unwrap_err();
    assert!(err.to_string().contains("Invalid installment"));
    assert_eq!(app.debt(id).unwrap().name, "Laptop");
}

#[test]
fn missing_account_surfaces_not_found() {
    let mut app = App::open_in_memory().unwrap();
    let (_, m) = sub(&[
        "pefi", "tx", "add", "--account", "3", "--date", "2025-01-01", "--name", "x",
        "--amount", "1",
    ]);
    let err = commands::transactions::handle(&mut app, &m).unwrap_err();
    let root = err.downcast_ref::<pefi::Error>().unwrap();
    assert!(root.is_not_found());
}

#[test]
fn bill_add_via_cli() {
    let app = App::open_in_memory().unwrap();
    let (_, m) = sub(&[
        "pefi", "bill", "add", "--name", "Rent", "--amount", "1200.00", "--due-day", "1",
    ]);
    commands::bills::handle(&app, &m).unwrap();
    let bills = app.bills().unwrap();
    assert_eq!(bills[0].amount, 120_000);
    assert_eq!(bills[0].due_day, 1);
}

#[test]
fn negative_bill_and_debt_amounts_via_cli() {
    let mut app = App::open_in_memory().unwrap();
    let (_, m) = sub(&[
        "pefi", "bill", "add", "--name", "Refund", "--amount", "-15.25", "--due-day", "5",
    ]);
    commands::bills::handle(&app, &m).unwrap();
    assert_eq!(app.bills().unwrap()[0].amount, -1525);

    let id = app.create_debt("Credit").unwrap().id;
    let id_s = id.to_string();
    let (_, m) = sub(&[
        "pefi", "debt", "update", "--id", id_s.as_str(), "--name", "Credit", "--amount", "-20",
    ]);
    commands::debts::handle(&mut app, &m).unwrap();
    assert_eq!(app.debt(id).unwrap().amount, -2000);
}

#[test]
fn out_of_range_amount_is_rejected_without_writing() {
    let mut app = App::open_in_memory().unwrap();
    let a = app.create_account("Checking", "bank").unwrap().id;
    let acct = a.to_string();
    let (_, m) = sub(&[
        "pefi", "tx", "add", "--account", acct.as_str(), "--date", "2025-01-01", "--name", "x",
        "--amount", "79228162514264337593543950335",
    ]);
    let err = commands::transactions::handle(&mut app, &m).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(app.transactions(a).unwrap().is_empty());
}
