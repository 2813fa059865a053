// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::aggregate::export_stats;
use crate::commands::expenses::filter_from_args;
use crate::export::{export_to_path, resolve_out_path};
use crate::ledger::Ledger;
use crate::utils::today;

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let filter = filter_from_args(sub);
    let expenses = filter.apply(&ledger.expenses);

    if sub.get_flag("summary") {
        let owned: Vec<_> = expenses.iter().map(|e| (*e).clone()).collect();
        let stats = export_stats(&owned);
        println!(
            "{} record(s), {} categorie(s), {} wallet(s), raw total {}",
            stats.records, stats.categories, stats.wallets, stats.total_amount
        );
        if let (Some(earliest), Some(latest)) = (stats.earliest, stats.latest) {
            println!("Date range: {} - {}", earliest, latest);
        }
    }

    let out = sub.get_one::<String>("out").map(String::as_str).unwrap_or(".");
    let path = resolve_out_path(Path::new(out), &filter.export_basename(), today());
    export_to_path(&expenses, &path)?;
    println!("Exported {} expense(s) to {}", expenses.len(), path.display());
    Ok(())
}
