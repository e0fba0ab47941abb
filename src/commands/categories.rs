// Copyright (c) Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::registry;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let rows = registry::CATEGORIES
                .iter()
                .map(|c| {
                    vec![
                        c.key.to_string(),
                        c.name.to_string(),
                        c.icon.to_string(),
                        c.color.to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Key", "Name", "Icon", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
