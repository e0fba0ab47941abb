// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine;
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("trend", sub)) => trend(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary {
    balance: String,
    monthly_income: String,
    monthly_expenses: String,
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = Local::now();
    let txs = ledger.all();
    let data = Summary {
        balance: fmt_money(&engine::current_balance(txs)),
        monthly_income: fmt_money(&engine::monthly_income(txs, now)),
        monthly_expenses: fmt_money(&engine::monthly_expenses(txs, now)),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = vec![
            vec!["Balance".to_string(), data.balance],
            vec!["Monthly income".to_string(), data.monthly_income],
            vec!["Monthly expenses".to_string(), data.monthly_expenses],
        ];
        println!("{}", pretty_table(&["Metric", "Amount"], rows));
    }
    Ok(())
}

fn trend(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = engine::seven_day_trend(ledger.all(), Local::now());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|p| vec![p.label.clone(), format!("{:.2}", p.total)])
            .collect();
        println!("{}", pretty_table(&["Day", "Spent"], rows));
    }
    Ok(())
}

fn categories(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = engine::category_totals(ledger.all());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|c| {
                vec![
                    c.key.clone(),
                    c.name.to_string(),
                    format!("{:.2}", c.total),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Key", "Category", "Spent"], rows));
    }
    Ok(())
}
