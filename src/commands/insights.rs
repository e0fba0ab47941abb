// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insights;
use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Local;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let data = insights::generate(ledger.all(), Local::now());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No insights yet - record a few transactions first.");
        } else {
            let rows = data
                .iter()
                .map(|i| {
                    vec![
                        i.icon.to_string(),
                        i.title.to_string(),
                        i.description.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["", "Insight", "Detail"], rows));
        }
    }
    Ok(())
}
