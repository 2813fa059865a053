// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::tempdir;

use rielbook::export::{export_filename, write_csv};
use rielbook::filter::ExpenseFilter;
use rielbook::ledger::Ledger;
use rielbook::{cli, commands::exporter};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn cash_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_wallet("Cash", dec!(500), "USD").unwrap();
    ledger
}

#[test]
fn description_quotes_are_doubled() {
    let mut ledger = cash_ledger();
    ledger
        .add_expense(
            day(15),
            "Cash",
            "Food & Dining",
            dec!(45.5),
            r#"Lunch "deluxe""#,
        )
        .unwrap();

    let mut out = Vec::new();
    let refs: Vec<_> = ledger.expenses.iter().collect();
    write_csv(&refs, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Category,Description,Wallet,Amount,Currency"
    );
    assert_eq!(
        lines.next().unwrap(),
        r#"2024-01-15,Food & Dining,"Lunch ""deluxe""",Cash,45.5,USD"#
    );
}

#[test]
fn fields_with_commas_are_quoted_too() {
    let mut ledger = cash_ledger();
    ledger
        .add_expense(day(3), "Cash", "Bills & Utilities", dec!(9.99), "Water, gas")
        .unwrap();

    let mut out = Vec::new();
    let refs: Vec<_> = ledger.expenses.iter().collect();
    write_csv(&refs, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(r#""Water, gas""#));
}

#[test]
fn filename_carries_the_date_suffix() {
    assert_eq!(
        export_filename("expenses", day(15)),
        "expenses_2024-01-15.csv"
    );
}

#[test]
fn filtered_basename_derives_from_active_filters() {
    let all = ExpenseFilter::default();
    assert_eq!(all.export_basename(), "expenses");

    let category = ExpenseFilter {
        category: Some("Food & Dining".into()),
        ..Default::default()
    };
    assert_eq!(category.export_basename(), "expenses_food_&_dining");

    let both = ExpenseFilter {
        category: Some("Food & Dining".into()),
        wallet: Some("Cash (Dollar)".into()),
        search: Some("lunch".into()),
    };
    assert_eq!(
        both.export_basename(),
        "expenses_food_&_dining_cash_(dollar)_filtered"
    );
}

#[test]
fn filter_matches_substring_and_exact_fields() {
    let mut ledger = cash_ledger();
    ledger.add_wallet("Bank", dec!(1000), "USD").unwrap();
    ledger
        .add_expense(day(15), "Cash", "Food & Dining", dec!(45.5), "Lunch downtown")
        .unwrap();
    ledger
        .add_expense(day(14), "Bank", "Transportation", dec!(12), "Bus card")
        .unwrap();

    let search = ExpenseFilter {
        search: Some("LUNCH".into()),
        ..Default::default()
    };
    assert_eq!(search.apply(&ledger.expenses).len(), 1);

    // Search also hits the category field.
    let category_term = ExpenseFilter {
        search: Some("transport".into()),
        ..Default::default()
    };
    assert_eq!(category_term.apply(&ledger.expenses).len(), 1);

    let wallet = ExpenseFilter {
        wallet: Some("Cash".into()),
        ..Default::default()
    };
    assert_eq!(wallet.apply(&ledger.expenses).len(), 1);

    // Exact fields do not substring-match.
    let partial_wallet = ExpenseFilter {
        wallet: Some("Cas".into()),
        ..Default::default()
    };
    assert!(partial_wallet.apply(&ledger.expenses).is_empty());
}

#[test]
fn export_command_writes_a_dated_file_into_a_directory() {
    let mut ledger = cash_ledger();
    ledger
        .add_expense(day(15), "Cash", "Food & Dining", dec!(45.5), "Lunch")
        .unwrap();

    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["rielbook", "export", "--out", &dir_str]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("expenses_"));
    assert!(entries[0].ends_with(".csv"));

    let contents = std::fs::read_to_string(dir.path().join(&entries[0])).unwrap();
    assert!(contents.starts_with("Date,Category,Description,Wallet,Amount,Currency"));
    assert!(contents.contains("Lunch"));
}

#[test]
fn export_command_applies_the_filter() {
    let mut ledger = cash_ledger();
    ledger
        .add_expense(day(15), "Cash", "Food & Dining", dec!(45.5), "Lunch")
        .unwrap();
    ledger
        .add_expense(day(14), "Cash", "Transportation", dec!(12), "Bus")
        .unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("food.csv");
    let out_str = out.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "rielbook",
        "export",
        "--category",
        "Food & Dining",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&ledger, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Lunch"));
    assert!(!contents.contains("Bus"));
}
