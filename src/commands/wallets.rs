// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::currency::format_currency;
use crate::ledger::{Adjustment, Ledger, WalletUpdate, wallet_balance};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table, today};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("adjust", sub)) => adjust(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
    let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();
    ledger.add_wallet(name, balance, &currency)?;
    println!(
        "Added wallet '{}' ({}, {})",
        name,
        format_currency(balance, &currency),
        currency
    );
    Ok(())
}

fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let wallet = sub.get_one::<String>("wallet").unwrap();
    let patch = WalletUpdate {
        name: sub.get_one::<String>("name").cloned(),
        balance: sub
            .get_one::<String>("balance")
            .map(|s| parse_decimal(s))
            .transpose()?,
        currency: sub.get_one::<String>("currency").map(|s| s.to_uppercase()),
    };
    ledger.update_wallet(wallet, patch)?;
    println!("Updated wallet '{}'", wallet);
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let wallet = sub.get_one::<String>("wallet").unwrap();
    ledger.remove_wallet(wallet)?;
    println!("Removed wallet '{}'", wallet);
    Ok(())
}

fn adjust(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let wallet = sub.get_one::<String>("wallet").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind = if sub.get_flag("add") {
        Adjustment::Deposit
    } else {
        Adjustment::Withdrawal
    };
    let reason = sub.get_one::<String>("reason").map(|s| s.as_str());
    ledger.adjust_balance(wallet, amount, kind, reason, today())?;
    let verb = match kind {
        Adjustment::Deposit => "Deposited",
        Adjustment::Withdrawal => "Withdrew",
    };
    if let Some(w) = ledger.wallet(wallet) {
        println!(
            "{} {}, '{}' now at {}",
            verb,
            format_currency(amount, &w.currency),
            wallet,
            format_currency(w.balance, &w.currency)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct WalletRow {
    pub name: String,
    pub currency: String,
    pub initial: String,
    pub spent: String,
    pub current: String,
    pub expenses: usize,
}

pub fn wallet_rows(ledger: &Ledger) -> Vec<WalletRow> {
    ledger
        .wallets
        .iter()
        .map(|w| {
            let position = wallet_balance(w, &ledger.expenses);
            WalletRow {
                name: w.name.clone(),
                currency: w.currency.clone(),
                initial: format_currency(w.balance, &w.currency),
                spent: format_currency(position.spent, &w.currency),
                current: format_currency(position.current, &w.currency),
                expenses: position.count,
            }
        })
        .collect()
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = wallet_rows(ledger);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.currency.clone(),
                    r.initial.clone(),
                    r.spent.clone(),
                    r.current.clone(),
                    r.expenses.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Wallet", "CCY", "Initial", "Spent", "Current", "Expenses"],
                rows,
            )
        );
        for code in ["USD", "KHR"] {
            let count = ledger.wallets.iter().filter(|w| w.currency == code).count();
            println!("{} wallets: {}", code, count);
        }
    }
    Ok(())
}
