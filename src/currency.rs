// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::LedgerError;
use crate::models::Currency;

/// All conversions are routed through the dollar hub.
pub const BASE_CURRENCY: &str = "USD";

pub static CURRENCIES: Lazy<Vec<Currency>> = Lazy::new(|| {
    vec![
        Currency {
            code: "KHR",
            symbol: "៛",
            name: "Cambodian Riel",
            rate: dec!(4100), // 1 USD = 4100 KHR
        },
        Currency {
            code: "USD",
            symbol: "$",
            name: "US Dollar",
            rate: dec!(1),
        },
    ]
});

pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

fn rate_for(code: &str) -> Result<Decimal, LedgerError> {
    currency_by_code(code)
        .map(|c| c.rate)
        .ok_or_else(|| LedgerError::UnknownCurrency(code.to_string()))
}

/// Convert an amount between table currencies via the base hub.
///
/// Unknown codes are an error rather than an identity rate; display rounding
/// is left to [`format_currency`].
pub fn convert(amount: Decimal, from: &str, to: &str) -> Result<Decimal, LedgerError> {
    if from == to {
        rate_for(from)?;
        return Ok(amount);
    }
    let from_rate = rate_for(from)?;
    let to_rate = rate_for(to)?;
    Ok(amount / from_rate * to_rate)
}

/// Render an amount in a currency's display convention: symbol prefix,
/// thousands grouping, 0 fraction digits for riel and 2 otherwise.
/// Unknown codes fall back to the bare decimal string.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let Some(ccy) = currency_by_code(code) else {
        return amount.to_string();
    };
    let places = if ccy.code == "KHR" { 0 } else { 2 };
    format!("{}{}", ccy.symbol, group_thousands(amount.round_dp(places), places))
}

fn group_thousands(amount: Decimal, places: u32) -> String {
    let fixed = format!("{:.*}", places as usize, amount);
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (fixed, None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
