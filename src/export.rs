// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::Expense;
use crate::utils::{parse_date, parse_decimal};

pub const CSV_HEADERS: [&str; 6] = [
    "Date",
    "Category",
    "Description",
    "Wallet",
    "Amount",
    "Currency",
];

/// Write expenses as CSV. Fields are quote-escaped by the writer whenever
/// they need it, so a description like `Lunch "deluxe"` comes out as
/// `"Lunch ""deluxe"""`.
pub fn write_csv<W: Write>(expenses: &[&Expense], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADERS)?;
    for e in expenses {
        wtr.write_record([
            e.date.format("%Y-%m-%d").to_string(),
            e.category.clone(),
            e.description.clone(),
            e.wallet.clone(),
            e.amount.to_string(),
            e.currency.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `<base>_<YYYY-MM-DD>.csv`
pub fn export_filename(base: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", base, date.format("%Y-%m-%d"))
}

/// Resolve the destination: a directory gets the derived filename inside it,
/// anything else is taken as the exact file path.
pub fn resolve_out_path(out: &Path, base: &str, date: NaiveDate) -> PathBuf {
    if out.is_dir() {
        out.join(export_filename(base, date))
    } else {
        out.to_path_buf()
    }
}

pub fn export_to_path(expenses: &[&Expense], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Create export file {}", path.display()))?;
    write_csv(expenses, file)
}

/// Load expenses from a CSV in the export column layout into the session
/// ledger. Wallet references must resolve, categories must be known, and a
/// row currency that disagrees with its wallet's currency is an error.
pub fn read_csv(path: &str, ledger: &mut Ledger) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut rows: Vec<(NaiveDate, String, String, Decimal, String)> = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim().to_string();
        let category = rec.get(1).context("category missing")?.trim().to_string();
        let description = rec.get(2).unwrap_or("").trim().to_string();
        let wallet = rec.get(3).context("wallet missing")?.trim().to_string();
        let amount_raw = rec.get(4).context("amount missing")?.trim().to_string();
        let csv_currency = rec.get(5).unwrap_or("").trim().to_string();

        let date =
            parse_date(&date_raw).with_context(|| format!("Invalid expense date '{}'", date_raw))?;
        let amount = parse_decimal(&amount_raw)
            .with_context(|| format!("Invalid amount '{}' for '{}'", amount_raw, description))?;

        let wallet_currency = ledger
            .wallet(&wallet)
            .map(|w| w.currency.clone())
            .ok_or_else(|| LedgerError::WalletNotFound(wallet.clone()))?;
        if !csv_currency.is_empty() && !csv_currency.eq_ignore_ascii_case(&wallet_currency) {
            return Err(LedgerError::CurrencyMismatch {
                found: csv_currency,
                wallet,
                expected: wallet_currency,
            }
            .into());
        }
        rows.push((date, wallet, category, amount, description));
    }

    // The file reads newest-first like the session list; add_expense
    // prepends, so feed it back-to-front to keep that order.
    let count = rows.len();
    for (date, wallet, category, amount, description) in rows.into_iter().rev() {
        ledger
            .add_expense(date, &wallet, &category, amount, &description)
            .with_context(|| format!("Row for wallet '{}'", wallet))?;
    }
    Ok(count)
}
