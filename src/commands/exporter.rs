// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{bail, Result};
use serde_json::json;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Oldest first, the usual order for archival files.
    let txs = ledger.all().iter().rev();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "description",
                "category",
                "type",
                "amount",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_rfc3339(),
                    t.description.clone(),
                    t.category.clone(),
                    t.r#type.to_string(),
                    format!("{:.2}", t.amount),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in txs {
                items.push(json!({
                    "id": t.id,
                    "date": t.date.to_rfc3339(),
                    "description": t.description,
                    "category": t.category,
                    "type": t.r#type.to_string(),
                    "amount": format!("{:.2}", t.amount),
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
