// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rielbook::ledger::Ledger;
use rielbook::{cli, commands::expenses, commands::wallets};

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    let Some(("expense", expense_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = expense_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_shows_the_sample_set_newest_first() {
    let ledger = Ledger::sample();
    let rows = expenses::query_rows(&ledger, &list_matches(&["rielbook", "expense", "list"]));
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].date, "2024-01-15");
    assert_eq!(rows[0].description, "Lunch at Italian restaurant");
    // Amounts render in the wallet currency's convention.
    assert_eq!(rows[0].amount, "$45.50");
    assert_eq!(rows[1].amount, "៛492,000");
}

#[test]
fn list_filters_by_search_term() {
    let ledger = Ledger::sample();
    let rows = expenses::query_rows(
        &ledger,
        &list_matches(&["rielbook", "expense", "list", "--search", "shoes"]),
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "New shoes");
}

#[test]
fn list_filters_by_category_and_wallet_exactly() {
    let ledger = Ledger::sample();
    let rows = expenses::query_rows(
        &ledger,
        &list_matches(&[
            "rielbook",
            "expense",
            "list",
            "--category",
            "Food & Dining",
            "--wallet",
            "Cash (Dollar)",
        ]),
    );
    assert_eq!(rows.len(), 1);

    let none = expenses::query_rows(
        &ledger,
        &list_matches(&[
            "rielbook",
            "expense",
            "list",
            "--category",
            "Food & Dining",
            "--wallet",
            "Cash (Riel)",
        ]),
    );
    assert!(none.is_empty());
}

#[test]
fn wallet_rows_carry_spending_positions() {
    let ledger = Ledger::sample();
    let rows = wallets::wallet_rows(&ledger);
    assert_eq!(rows.len(), 5);
    let cash_dollar = rows.iter().find(|r| r.name == "Cash (Dollar)").unwrap();
    assert_eq!(cash_dollar.expenses, 1);
    assert_eq!(cash_dollar.initial, "$500.00");
    assert_eq!(cash_dollar.spent, "$45.50");
    assert_eq!(cash_dollar.current, "$454.50");
}

#[test]
fn add_through_the_cli_touches_the_ledger() {
    let mut ledger = Ledger::sample();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "rielbook",
        "expense",
        "add",
        "--date",
        "2024-01-20",
        "--wallet",
        "Cash (Dollar)",
        "--category",
        "Travel",
        "--amount",
        "19.99",
        "--description",
        "Bus ticket",
    ]);
    if let Some(("expense", expense_m)) = matches.subcommand() {
        expenses::handle(&mut ledger, expense_m).unwrap();
    } else {
        panic!("no expense subcommand");
    }
    assert_eq!(ledger.expenses.len(), 6);
    assert_eq!(ledger.expenses[0].description, "Bus ticket");
    assert_eq!(ledger.expenses[0].currency, "USD");
}

#[test]
fn rejected_add_leaves_the_ledger_alone() {
    let mut ledger = Ledger::sample();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "rielbook",
        "expense",
        "add",
        "--wallet",
        "No Such Wallet",
        "--category",
        "Travel",
        "--amount",
        "1",
    ]);
    if let Some(("expense", expense_m)) = matches.subcommand() {
        assert!(expenses::handle(&mut ledger, expense_m).is_err());
    } else {
        panic!("no expense subcommand");
    }
    assert_eq!(ledger.expenses.len(), 5);
}
