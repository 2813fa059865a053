// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summaries over the expense list: raw per-currency totals, the unified
//! base-currency total, and the category breakdown used by the reports.
//!
//! Category shares are computed on base-converted amounts. Summing raw
//! amounts across currencies would let the riel's numerically large values
//! swamp the split, so every amount goes through the hub first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::currency::{convert, BASE_CURRENCY};
use crate::data;
use crate::error::LedgerError;
use crate::models::Expense;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub color: String,
    pub icon: String,
    /// Total in the base currency.
    pub total: Decimal,
    /// Share of the converted grand total, 0-100.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Raw sums per currency code, no conversion.
    pub by_currency: BTreeMap<String, Decimal>,
    /// Fixed-table categories with nonzero totals, descending by total.
    pub by_category: Vec<CategoryTotal>,
    /// Everything converted to the base currency.
    pub total_in_base: Decimal,
}

pub fn summarize(expenses: &[Expense]) -> Result<Summary, LedgerError> {
    let mut by_currency: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut converted_by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut total_in_base = Decimal::ZERO;

    for expense in expenses {
        *by_currency
            .entry(expense.currency.clone())
            .or_insert(Decimal::ZERO) += expense.amount;
        let in_base = convert(expense.amount, &expense.currency, BASE_CURRENCY)?;
        total_in_base += in_base;
        *converted_by_category
            .entry(expense.category.as_str())
            .or_insert(Decimal::ZERO) += in_base;
    }

    let mut by_category: Vec<CategoryTotal> = data::CATEGORIES
        .iter()
        .filter_map(|category| {
            let total = converted_by_category
                .get(category.name)
                .copied()
                .unwrap_or(Decimal::ZERO);
            if total <= Decimal::ZERO {
                return None;
            }
            let percentage = if total_in_base > Decimal::ZERO {
                total / total_in_base * dec!(100)
            } else {
                Decimal::ZERO
            };
            Some(CategoryTotal {
                name: category.name.to_string(),
                color: category.color.to_string(),
                icon: category.icon.to_string(),
                total,
                percentage,
            })
        })
        .collect();
    by_category.sort_by(|a, b| b.total.cmp(&a.total));

    Ok(Summary {
        by_currency,
        by_category,
        total_in_base,
    })
}

/// Record-level statistics shown alongside an export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportStats {
    pub records: usize,
    /// Raw sum across all records, mixed currency by design.
    pub total_amount: Decimal,
    pub categories: usize,
    pub wallets: usize,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

pub fn export_stats(expenses: &[Expense]) -> ExportStats {
    let mut categories: Vec<&str> = expenses.iter().map(|e| e.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();
    let mut wallets: Vec<&str> = expenses.iter().map(|e| e.wallet.as_str()).collect();
    wallets.sort_unstable();
    wallets.dedup();
    ExportStats {
        records: expenses.len(),
        total_amount: expenses.iter().map(|e| e.amount).sum(),
        categories: categories.len(),
        wallets: wallets.len(),
        earliest: expenses.iter().map(|e| e.date).min(),
        latest: expenses.iter().map(|e| e.date).max(),
    }
}
