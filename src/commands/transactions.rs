// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{Filter, TransactionType};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::Local;
use regex::Regex;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    let r#type = sub
        .get_one::<String>("type")
        .unwrap()
        .parse::<TransactionType>()
        .map_err(anyhow::Error::msg)?;

    let tx = ledger.add(amount, description, category, r#type)?;
    println!(
        "Recorded {} {} '{}' in {} (id: {})",
        tx.r#type,
        fmt_money(&tx.amount.abs()),
        tx.description,
        tx.category,
        tx.id
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if ledger.delete(id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Type", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub r#type: String,
    pub amount: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = sub
        .get_one::<String>("filter")
        .unwrap()
        .parse::<Filter>()
        .map_err(anyhow::Error::msg)?;
    let pattern = match sub.get_one::<String>("match") {
        Some(p) => Some(Regex::new(p).with_context(|| format!("Invalid pattern '{}'", p))?),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for t in ledger.filtered(filter) {
        if let Some(re) = &pattern {
            if !re.is_match(&t.description) {
                continue;
            }
        }
        data.push(TransactionRow {
            id: t.id,
            date: t.date.with_timezone(&Local).format("%b %d, %H:%M").to_string(),
            description: t.description.clone(),
            category: t.category.clone(),
            r#type: t.r#type.to_string(),
            amount: format!("{:.2}", t.amount),
        });
        if Some(data.len()) == limit {
            break;
        }
    }
    Ok(data)
}
