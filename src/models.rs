// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// Amounts are integer minor currency units throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    /// Always the sum of the account's transaction amounts.
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub date: String,
    pub name: String,
    pub amount: i64,
    pub category: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: i64,
    pub date: String,
    pub name: String,
    pub amount: i64,
    pub category: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub r#type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub due_day: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    pub notes: String,
    pub installments: Vec<Installment>,
}

impl Debt {
    pub fn paid(&self) -> i64 {
        self.installments
            .iter()
            .filter(|i| i.status == "paid")
            .fold(0i64, |acc, i| acc.saturating_add(i.amount))
    }

    /// Saturates at the `i64` bounds; storage does not range-check amounts.
    pub fn remaining(&self) -> i64 {
        self.amount.saturating_sub(self.paid())
    }
}

/// Owned by its debt; identified only by position in the debt's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub due_date: String,
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub paid_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    BalanceDrift,
    UnknownCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub detail: String,
}
