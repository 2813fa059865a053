// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::aggregate::{export_stats, summarize};
use crate::currency::{BASE_CURRENCY, convert, format_currency};
use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        Some(("by-currency", sub)) => by_currency(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let agg = summarize(&ledger.expenses)?;
    let stats = export_stats(&ledger.expenses);

    if json_flag {
        let payload = json!({
            "total_in_base": agg.total_in_base,
            "base_currency": BASE_CURRENCY,
            "by_currency": agg.by_currency,
            "records": stats.records,
            "categories": stats.categories,
            "wallets": stats.wallets,
            "earliest": stats.earliest,
            "latest": stats.latest,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Total ({}): {}  [all currencies]",
        BASE_CURRENCY,
        format_currency(agg.total_in_base, BASE_CURRENCY)
    );
    for (code, total) in &agg.by_currency {
        // Cross-quote in the other table currency, as the dashboard cards do.
        let other = if code == "USD" { "KHR" } else { "USD" };
        let quote = convert(*total, code, other)?;
        println!(
            "Total {}: {}  (≈ {})",
            code,
            format_currency(*total, code),
            format_currency(quote, other)
        );
    }
    println!(
        "{} record(s), {} categorie(s), {} wallet(s)",
        stats.records, stats.categories, stats.wallets
    );
    if let (Some(earliest), Some(latest)) = (stats.earliest, stats.latest) {
        println!("Date range: {} - {}", earliest, latest);
    }
    Ok(())
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let agg = summarize(&ledger.expenses)?;
    if !maybe_print_json(json_flag, jsonl_flag, &agg.by_category)? {
        let rows: Vec<Vec<String>> = agg
            .by_category
            .iter()
            .map(|c| {
                vec![
                    c.icon.clone(),
                    c.name.clone(),
                    format_currency(c.total, BASE_CURRENCY),
                    format!("{:.1}%", c.percentage),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["", "Category", "Total (USD)", "Share"], rows)
        );
    }
    Ok(())
}

fn by_currency(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let agg = summarize(&ledger.expenses)?;
    if !maybe_print_json(json_flag, jsonl_flag, &agg.by_currency)? {
        let mut rows = Vec::new();
        for (code, total) in &agg.by_currency {
            let other = if code == "USD" { "KHR" } else { "USD" };
            let quote = convert(*total, code, other)?;
            rows.push(vec![
                code.clone(),
                format_currency(*total, code),
                format_currency(quote, other),
            ]);
        }
        println!("{}", pretty_table(&["CCY", "Total", "≈ Other"], rows));
    }
    Ok(())
}
