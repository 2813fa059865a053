// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::data::CATEGORIES;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            if !maybe_print_json(json_flag, false, &*CATEGORIES)? {
                let rows: Vec<Vec<String>> = CATEGORIES
                    .iter()
                    .map(|c| {
                        vec![
                            c.icon.to_string(),
                            c.name.to_string(),
                            c.color.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["", "Category", "Color"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
