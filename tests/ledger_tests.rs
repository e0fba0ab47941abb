// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::db;
use pocketbook::error::LedgerError;
use pocketbook::ledger::Ledger;
use pocketbook::models::{Filter, TransactionType};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn fresh_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

// A ledger with an explicitly empty slot, so tests start without the seed.
fn empty_ledger() -> Ledger {
    let conn = fresh_conn();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES('transactions', '[]')",
        [],
    )
    .unwrap();
    Ledger::open(conn).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn first_run_seeds_demo_dataset() {
    let ledger = Ledger::open(fresh_conn()).unwrap();
    let txs = ledger.all();
    assert_eq!(txs.len(), 10);
    // Newest first, ids 1 through 10 in stored order
    assert_eq!(txs[0].id, 1);
    assert_eq!(txs[0].description, "Grocery Store");
    assert_eq!(txs[9].id, 10);
    assert_eq!(txs[9].description, "Pharmacy");
}

#[test]
fn corrupt_slot_falls_back_to_seed() {
    let conn = fresh_conn();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES('transactions', 'definitely {not json')",
        [],
    )
    .unwrap();
    let ledger = Ledger::open(conn).unwrap();
    assert_eq!(ledger.all().len(), 10);
}

#[test]
fn add_sign_corrects_amount_and_prepends() {
    let mut ledger = empty_ledger();
    let expense = ledger
        .add(dec("45.50"), "Coffee", "food", TransactionType::Expense)
        .unwrap();
    assert_eq!(expense.amount, dec("-45.50"));

    let income = ledger
        .add(dec("3200.00"), "Salary", "other", TransactionType::Income)
        .unwrap();
    assert_eq!(income.amount, dec("3200.00"));

    // Most recent insert sits at the front
    assert_eq!(ledger.all().len(), 2);
    assert_eq!(ledger.all()[0].id, income.id);
    assert_eq!(ledger.all()[1].id, expense.id);
}

#[test]
fn add_rejects_invalid_input_and_leaves_ledger_unchanged() {
    let mut ledger = empty_ledger();

    let cases = [
        ledger.add(dec("-10"), "Coffee", "food", TransactionType::Expense),
        ledger.add(dec("0"), "Coffee", "food", TransactionType::Expense),
        ledger.add(dec("10"), "   ", "food", TransactionType::Expense),
        ledger.add(dec("10"), "Coffee", "caffeine", TransactionType::Expense),
    ];
    for result in cases {
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }
    assert!(ledger.all().is_empty());
}

#[test]
fn delete_is_idempotent() {
    let mut ledger = empty_ledger();
    let tx = ledger
        .add(dec("12.00"), "Snacks", "food", TransactionType::Expense)
        .unwrap();
    ledger
        .add(dec("20.00"), "Bus pass", "transport", TransactionType::Expense)
        .unwrap();

    assert!(ledger.delete(tx.id).unwrap());
    assert_eq!(ledger.all().len(), 1);
    // Second delete of the same id is a no-op, not an error
    assert!(!ledger.delete(tx.id).unwrap());
    assert_eq!(ledger.all().len(), 1);
}

#[test]
fn ids_stay_unique_for_rapid_adds() {
    let mut ledger = empty_ledger();
    for i in 0..5 {
        ledger
            .add(
                dec("1.00"),
                &format!("tick {}", i),
                "other",
                TransactionType::Expense,
            )
            .unwrap();
    }
    // Newest first, so ids decrease along the collection
    let ids: Vec<i64> = ledger.all().iter().map(|t| t.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn filtered_preserves_order_within_type() {
    let ledger = Ledger::open(fresh_conn()).unwrap();
    let income: Vec<i64> = ledger
        .filtered(Filter::Income)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(income, vec![3, 8]);
    assert_eq!(ledger.filtered(Filter::Expense).len(), 8);
    assert_eq!(ledger.filtered(Filter::All).len(), 10);
}

#[test]
fn round_trip_reproduces_ordered_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pocketbook.sqlite");

    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    let mut ledger = Ledger::open(conn).unwrap();
    ledger
        .add(dec("9.99"), "Paperback", "education", TransactionType::Expense)
        .unwrap();
    let before: Vec<(i64, Decimal, String)> = ledger
        .all()
        .iter()
        .map(|t| (t.id, t.amount, t.description.clone()))
        .collect();
    drop(ledger);

    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    let reloaded = Ledger::open(conn).unwrap();
    let after: Vec<(i64, Decimal, String)> = reloaded
        .all()
        .iter()
        .map(|t| (t.id, t.amount, t.description.clone()))
        .collect();

    assert_eq!(before.len(), 11);
    assert_eq!(before, after);
}

#[test]
fn legacy_bare_array_loads_and_saves_versioned() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pocketbook.sqlite");

    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES('transactions', ?1)",
        [r#"[{ "id": 7, "amount": -35.00, "description": "Movie Theater", "category": "entertainment", "type": "expense", "date": "2025-12-11T19:30:00Z", "timestamp": 1733940600000 }]"#],
    )
    .unwrap();
    let ledger = Ledger::open(conn).unwrap();
    assert_eq!(ledger.all().len(), 1);
    assert_eq!(ledger.all()[0].id, 7);
    ledger.save().unwrap();
    drop(ledger);

    let conn = Connection::open(&path).unwrap();
    let value: String = conn
        .query_row(
            "SELECT value FROM storage WHERE key='transactions'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert!(value.starts_with(r#"{"transactions""#) || value.contains(r#""version":1"#));

    db::init_schema(&conn).unwrap();
    let reloaded = Ledger::open(conn).unwrap();
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.all()[0].description, "Movie Theater");
}
