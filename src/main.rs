// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use once_cell::sync::Lazy;

use rielbook::{cli, commands, export, health, ledger::Ledger};

fn main() -> Result<()> {
    Lazy::force(&health::STARTED);
    let matches = cli::build_cli().get_matches();

    // One process is one session: state starts from the sample dataset (or a
    // CSV) and is gone at exit, like the dashboard this replaces.
    let mut ledger = match matches.get_one::<String>("input") {
        Some(path) => {
            let mut ledger = Ledger::with_default_wallets();
            export::read_csv(path, &mut ledger)?;
            ledger
        }
        None => Ledger::sample(),
    };

    match matches.subcommand() {
        Some(("expense", sub)) => commands::expenses::handle(&mut ledger, sub)?,
        Some(("wallet", sub)) => commands::wallets::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("convert", sub)) => commands::convert::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("health", sub)) => commands::health::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
