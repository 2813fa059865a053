// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::currency::{convert, format_currency};
use crate::utils::parse_decimal;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let from = sub.get_one::<String>("from").unwrap().to_uppercase();
    let to = sub.get_one::<String>("to").unwrap().to_uppercase();

    let result = convert(amount, &from, &to)?;
    println!(
        "{} = {}",
        format_currency(amount, &from),
        format_currency(result, &to)
    );
    let unit_rate = convert(Decimal::ONE, &from, &to)?;
    println!("Exchange rate: 1 {} = {} {}", from, unit_rate, to);
    Ok(())
}
