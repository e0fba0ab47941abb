// Copyright (c) 2025 Pocketbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::{cli, commands::exporter, db, ledger::Ledger};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> Ledger {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    Ledger::open(conn).unwrap()
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("export", export_m)) = matches.subcommand() {
        return export_m.clone();
    }
    panic!("no export subcommand");
}

#[test]
fn export_json_writes_oldest_first() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "pocketbook",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    exporter::handle(&ledger, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], 10);
    assert_eq!(items[0]["description"], "Pharmacy");
    assert_eq!(items[9]["id"], 1);
    assert_eq!(items[9]["amount"], "-45.50");
}

#[test]
fn export_csv_writes_header_and_rows() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "pocketbook",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    exporter::handle(&ledger, &export_m).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    assert_eq!(
        rdr.headers().unwrap(),
        &csv::StringRecord::from(vec![
            "id",
            "date",
            "description",
            "category",
            "type",
            "amount"
        ])
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[0][2], "Pharmacy");
}

#[test]
fn export_rejects_unknown_format() {
    let ledger = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "pocketbook",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    assert!(exporter::handle(&ledger, &export_m).is_err());
    assert!(!out_path.exists());
}
