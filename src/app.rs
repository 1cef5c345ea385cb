// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application facade: one method per repository or consistency operation,
//! all sharing the single connection this value owns.

use crate::db;
use crate::error::Result;
use crate::models::{
    Account, Bill, Category, Debt, Installment, Issue, NewTransaction, Transaction,
};
use crate::store::{accounts, bills, categories, debts, integrity, transactions};
use rusqlite::Connection;
use std::path::Path;

pub struct App {
    conn: Connection,
}

impl App {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_connection(db::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(db::open_in_memory()?))
    }

    /// Wrap an already configured and migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // Accounts

    pub fn accounts(&self) -> Result<Vec<Account>> {
        accounts::all(&self.conn)
    }

    pub fn account(&self, id: i64) -> Result<Account> {
        accounts::get(&self.conn, id)
    }

    pub fn create_account(&self, name: &str, typ: &str) -> Result<Account> {
        accounts::create(&self.conn, name, typ)
    }

    pub fn update_account(&self, id: i64, name: &str, typ: &str) -> Result<()> {
        accounts::update(&self.conn, id, name, typ)
    }

    pub fn delete_account(&self, id: i64) -> Result<()> {
        accounts::delete(&self.conn, id)
    }

    // Transactions

    pub fn all_transactions(&self) -> Result<Vec<Transaction>> {
        transactions::all(&self.conn)
    }

    pub fn transactions(&self, account_id: i64) -> Result<Vec<Transaction>> {
        transactions::for_account(&self.conn, account_id)
    }

    pub fn transaction(&self, id: i64) -> Result<Transaction> {
        transactions::get(&self.conn, id)
    }

    pub fn create_transaction(
        &mut self,
        account_id: i64,
        date: &str,
        name: &str,
        amount: i64,
        category: &str,
        notes: &str,
    ) -> Result<Transaction> {
        let new = NewTransaction {
            account_id,
            date: date.to_string(),
            name: name.to_string(),
            amount,
            category: category.to_string(),
            notes: notes.to_string(),
        };
        transactions::create(&mut self.conn, &new)
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<()> {
        transactions::delete(&mut self.conn, id)
    }

    // Categories

    pub fn categories(&self, typ: &str) -> Result<Vec<String>> {
        categories::by_type(&self.conn, typ)
    }

    pub fn category(&self, typ: &str, name: &str) -> Result<Category> {
        categories::get(&self.conn, typ, name)
    }

    pub fn add_category(&self, typ: &str, name: &str) -> Result<()> {
        categories::add(&self.conn, typ, name)
    }

    /// Returns how many transactions were moved to the new name.
    pub fn rename_category(&mut self, typ: &str, old_name: &str, new_name: &str) -> Result<usize> {
        categories::rename(&mut self.conn, typ, old_name, new_name)
    }

    pub fn delete_category(&self, typ: &str, name: &str) -> Result<()> {
        categories::delete(&self.conn, typ, name)
    }

    // Bills

    pub fn bills(&self) -> Result<Vec<Bill>> {
        bills::all(&self.conn)
    }

    pub fn bill(&self, id: i64) -> Result<Bill> {
        bills::get(&self.conn, id)
    }

    pub fn create_bill(&self, name: &str, amount: i64, due_day: i64) -> Result<Bill> {
        bills::create(&self.conn, name, amount, due_day)
    }

    pub fn update_bill(&self, id: i64, name: &str, amount: i64, due_day: i64) -> Result<()> {
        bills::update(&self.conn, id, name, amount, due_day)
    }

    pub fn delete_bill(&self, id: i64) -> Result<()> {
        bills::delete(&self.conn, id)
    }

    // Debts

    pub fn debts(&self) -> Result<Vec<Debt>> {
        debts::all(&self.conn)
    }

    pub fn debt(&self, id: i64) -> Result<Debt> {
        debts::get(&self.conn, id)
    }

    pub fn create_debt(&self, name: &str) -> Result<Debt> {
        debts::create(&self.conn, name)
    }

    pub fn update_debt(
        &mut self,
        id: i64,
        name: &str,
        amount: i64,
        notes: &str,
        installments: &[Installment],
    ) -> Result<()> {
        debts::update(&mut self.conn, id, name, amount, notes, installments)
    }

    pub fn delete_debt(&self, id: i64) -> Result<()> {
        debts::delete(&self.conn, id)
    }

    // Integrity

    pub fn check_consistency(&self) -> Result<Vec<Issue>> {
        integrity::check(&self.conn)
    }

    pub fn recalculate_all_balances(&mut self) -> Result<usize> {
        integrity::repair_balances(&mut self.conn)
    }
}
