// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::currency::format_currency;
use crate::filter::ExpenseFilter;
use crate::ledger::{ExpenseUpdate, Ledger};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let wallet = sub.get_one::<String>("wallet").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();

    let id = ledger.add_expense(date, wallet, category, amount, description)?;
    if let Some(expense) = ledger.expense(id) {
        println!(
            "Recorded #{}: {} on {} ({}, wallet: {})",
            id,
            format_currency(expense.amount, &expense.currency),
            date,
            category,
            wallet
        );
    }
    Ok(())
}

fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = ExpenseUpdate {
        date: sub.get_one::<String>("date").map(|s| parse_date(s)).transpose()?,
        wallet: sub.get_one::<String>("wallet").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        description: sub.get_one::<String>("description").cloned(),
    };
    ledger.update_expense(id, patch)?;
    println!("Updated expense #{}", id);
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger.remove_expense(id)?;
    println!("Removed expense #{}", id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.wallet.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Description", "Wallet", "Amount", "CCY"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub wallet: String,
    pub amount: String,
    pub currency: String,
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> ExpenseFilter {
    ExpenseFilter {
        search: sub.get_one::<String>("search").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        wallet: sub.get_one::<String>("wallet").cloned(),
    }
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Vec<ExpenseRow> {
    let filter = filter_from_args(sub);
    filter
        .apply(&ledger.expenses)
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category.clone(),
            description: e.description.clone(),
            wallet: e.wallet.clone(),
            amount: format_currency(e.amount, &e.currency),
            currency: e.currency.clone(),
        })
        .collect()
}
