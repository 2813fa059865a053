// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::health;
use crate::ledger::Ledger;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("ping", _)) => {
            println!("{}", serde_json::to_string_pretty(&health::ping())?);
        }
        Some(("detailed", _)) => {
            let report = health::detailed(ledger);
            println!("{}", serde_json::to_string_pretty(&report)?);
            let code = report.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
        }
        _ => {}
    }
    Ok(())
}
