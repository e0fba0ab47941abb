// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::error::{LedgerError, Result};
use crate::models::{Filter, Transaction, TransactionType};
use crate::registry;

const SLOT_KEY: &str = "transactions";
const PAYLOAD_VERSION: u32 = 1;

// Envelope written on save. Loads also accept the bare array older builds
// persisted.
#[derive(Deserialize)]
struct Payload {
    #[allow(dead_code)]
    version: u32,
    transactions: Vec<Transaction>,
}

/// Demonstration dataset used when the storage slot is missing or unreadable.
const SEED: &str = r#"[
    { "id": 1, "amount": -45.50, "description": "Grocery Store", "category": "food", "type": "expense", "date": "2025-12-14T10:30:00Z", "timestamp": 1734181800000 },
    { "id": 2, "amount": -25.00, "description": "Gas Station", "category": "transport", "type": "expense", "date": "2025-12-14T08:15:00Z", "timestamp": 1734173700000 },
    { "id": 3, "amount": 3200.00, "description": "Salary", "category": "other", "type": "income", "date": "2025-12-13T09:00:00Z", "timestamp": 1734086400000 },
    { "id": 4, "amount": -89.99, "description": "Online Shopping", "category": "shopping", "type": "expense", "date": "2025-12-13T14:20:00Z", "timestamp": 1734104400000 },
    { "id": 5, "amount": -15.50, "description": "Coffee Shop", "category": "food", "type": "expense", "date": "2025-12-12T16:45:00Z", "timestamp": 1734021900000 },
    { "id": 6, "amount": -120.00, "description": "Electric Bill", "category": "utilities", "type": "expense", "date": "2025-12-12T11:00:00Z", "timestamp": 1734009600000 },
    { "id": 7, "amount": -35.00, "description": "Movie Theater", "category": "entertainment", "type": "expense", "date": "2025-12-11T19:30:00Z", "timestamp": 1733940600000 },
    { "id": 8, "amount": 200.00, "description": "Freelance Payment", "category": "other", "type": "income", "date": "2025-12-11T15:00:00Z", "timestamp": 1733929200000 },
    { "id": 9, "amount": -67.80, "description": "Restaurant", "category": "food", "type": "expense", "date": "2025-12-10T20:15:00Z", "timestamp": 1733854500000 },
    { "id": 10, "amount": -42.30, "description": "Pharmacy", "category": "health", "type": "expense", "date": "2025-12-10T13:30:00Z", "timestamp": 1733837400000 }
]"#;

/// The authoritative transaction collection, newest first, persisted to a
/// single key-value slot after every mutation.
pub struct Ledger {
    conn: Connection,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn open(conn: Connection) -> Result<Self> {
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM storage WHERE key=?1",
                params![SLOT_KEY],
                |r| r.get(0),
            )
            .optional()?;
        let (transactions, fresh) = match raw {
            Some(text) => match parse_slot(&text) {
                Some(txs) => (txs, false),
                None => {
                    eprintln!(
                        "pocketbook: stored ledger is unreadable, starting from the demo dataset"
                    );
                    (seed_transactions()?, true)
                }
            },
            None => (seed_transactions()?, true),
        };
        let ledger = Ledger { conn, transactions };
        if fresh {
            ledger.save()?;
        }
        Ok(ledger)
    }

    /// Records a transaction. `amount` is a positive magnitude; the sign is
    /// derived from `r#type` (expenses are stored negative).
    pub fn add(
        &mut self,
        amount: Decimal,
        description: &str,
        category: &str,
        r#type: TransactionType,
    ) -> Result<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                amount
            )));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if !registry::contains(category) {
            return Err(LedgerError::Validation(format!(
                "unknown category '{}'",
                category
            )));
        }

        let date = Utc::now();
        let timestamp = date.timestamp_millis();
        let tx = Transaction {
            id: self.next_id(timestamp),
            amount: match r#type {
                TransactionType::Expense => -amount,
                TransactionType::Income => amount,
            },
            description: description.to_string(),
            category: category.to_string(),
            r#type,
            date,
            timestamp,
        };
        self.transactions.insert(0, tx.clone());
        self.save()?;
        Ok(tx)
    }

    // Ids come from the wall clock in milliseconds; bump past the largest
    // known id when the clock has not advanced since the previous insert.
    fn next_id(&self, now_ms: i64) -> i64 {
        match self.transactions.iter().map(|t| t.id).max() {
            Some(max) if now_ms <= max => max + 1,
            _ => now_ms,
        }
    }

    /// Removes the transaction with the given id. An absent id is a no-op,
    /// not an error; the return value says whether anything was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        self.save()?;
        Ok(removed)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| match filter {
                Filter::All => true,
                Filter::Expense => t.r#type == TransactionType::Expense,
                Filter::Income => t.r#type == TransactionType::Income,
            })
            .collect()
    }

    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string(&json!({
            "version": PAYLOAD_VERSION,
            "transactions": &self.transactions,
        }))?;
        self.conn.execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![SLOT_KEY, text],
        )?;
        Ok(())
    }
}

fn parse_slot(text: &str) -> Option<Vec<Transaction>> {
    if let Ok(payload) = serde_json::from_str::<Payload>(text) {
        return Some(payload.transactions);
    }
    serde_json::from_str::<Vec<Transaction>>(text).ok()
}

fn seed_transactions() -> Result<Vec<Transaction>> {
    Ok(serde_json::from_str(SEED)?)
}
