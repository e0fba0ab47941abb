// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    // Signed: negative for expenses, positive for income. Stored as a plain
    // JSON number so older ledger payloads keep loading.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub r#type: TransactionType,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Expense,
    Income,
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "expense" => Ok(Filter::Expense),
            "income" => Ok(Filter::Income),
            _ => Err(format!("Unknown filter: {} (use all|expense|income)", s)),
        }
    }
}

/// One calendar day of the trailing-week expense trend.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub key: String,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: String,
}
