// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{CategoryTotal, Transaction, TrendPoint};
use crate::registry;

// Every function here re-scans the full collection; the ledger is small and
// recompute-on-demand keeps the store free of cache invalidation.

// Calendar comparisons use the local-time day, not a rolling 24h window.
fn local_day(t: &Transaction) -> NaiveDate {
    t.date.with_timezone(&Local).date_naive()
}

pub fn current_balance(txs: &[Transaction]) -> Decimal {
    txs.iter().map(|t| t.amount).sum()
}

pub fn monthly_income(txs: &[Transaction], reference: DateTime<Local>) -> Decimal {
    monthly_sum(txs, reference, true)
}

pub fn monthly_expenses(txs: &[Transaction], reference: DateTime<Local>) -> Decimal {
    monthly_sum(txs, reference, false).abs()
}

fn monthly_sum(txs: &[Transaction], reference: DateTime<Local>, income: bool) -> Decimal {
    txs.iter()
        .filter(|t| {
            if income {
                t.amount > Decimal::ZERO
            } else {
                t.amount < Decimal::ZERO
            }
        })
        .filter(|t| {
            let day = local_day(t);
            day.year() == reference.year() && day.month() == reference.month()
        })
        .map(|t| t.amount)
        .sum()
}

/// Expense totals for the seven calendar days ending at `reference`, oldest
/// first. Always exactly seven entries; days without expenses contribute 0.
pub fn seven_day_trend(txs: &[Transaction], reference: DateTime<Local>) -> Vec<TrendPoint> {
    let today = reference.date_naive();
    (0..7i64)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let total = txs
                .iter()
                .filter(|t| t.amount < Decimal::ZERO && local_day(t) == day)
                .map(|t| t.amount.abs())
                .sum();
            TrendPoint {
                label: day.format("%a").to_string(),
                total,
            }
        })
        .collect()
}

/// Absolute expense totals per category, in first-encounter order. Categories
/// without any expense transaction are omitted.
pub fn category_totals(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in txs.iter().filter(|t| t.amount < Decimal::ZERO) {
        let meta = registry::lookup_or_other(&t.category);
        match totals.iter_mut().find(|c| c.key == meta.key) {
            Some(entry) => entry.total += t.amount.abs(),
            None => totals.push(CategoryTotal {
                key: meta.key.to_string(),
                name: meta.name,
                total: t.amount.abs(),
                color: meta.color,
            }),
        }
    }
    totals
}

/// The category with the largest expense total; ties keep the one
/// encountered first.
pub fn top_category(txs: &[Transaction]) -> Option<CategoryTotal> {
    let mut best: Option<CategoryTotal> = None;
    for cur in category_totals(txs) {
        match &best {
            Some(b) if cur.total <= b.total => {}
            _ => best = Some(cur),
        }
    }
    best
}
