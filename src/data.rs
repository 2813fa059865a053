// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed category table and the built-in sample dataset.
//!
//! Every session starts from this data (or from a `--input` CSV); there is no
//! persistence, so the sample set plays the role the mock data played in the
//! dashboard this tool grew out of.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::models::{Category, Expense, Wallet};

/// Categories are a fixed table, not user-extensible.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category { id: 1, name: "Food & Dining", color: "#ef4444", icon: "🍽️" },
        Category { id: 2, name: "Transportation", color: "#3b82f6", icon: "🚗" },
        Category { id: 3, name: "Shopping", color: "#8b5cf6", icon: "🛍️" },
        Category { id: 4, name: "Entertainment", color: "#f59e0b", icon: "🎬" },
        Category { id: 5, name: "Bills & Utilities", color: "#10b981", icon: "💡" },
        Category { id: 6, name: "Healthcare", color: "#ec4899", icon: "🏥" },
        Category { id: 7, name: "Education", color: "#06b6d4", icon: "📚" },
        Category { id: 8, name: "Travel", color: "#84cc16", icon: "✈️" },
    ]
});

/// Balance withdrawals are recorded under this label, outside the fixed table.
pub const WITHDRAWAL_CATEGORY: &str = "Fees/Withdrawal";

pub fn category_by_name(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

pub fn default_wallets() -> Vec<Wallet> {
    vec![
        Wallet {
            id: 1,
            name: "Cash (Riel)".into(),
            balance: dec!(6150000),
            currency: "KHR".into(),
            exchange_rate: dec!(4100),
        },
        Wallet {
            id: 2,
            name: "Cash (Dollar)".into(),
            balance: dec!(500),
            currency: "USD".into(),
            exchange_rate: dec!(1),
        },
        Wallet {
            id: 3,
            name: "ABA Bank (USD)".into(),
            balance: dec!(2500),
            currency: "USD".into(),
            exchange_rate: dec!(1),
        },
        Wallet {
            id: 4,
            name: "ACLEDA Bank (KHR)".into(),
            balance: dec!(12300000),
            currency: "KHR".into(),
            exchange_rate: dec!(4100),
        },
        Wallet {
            id: 5,
            name: "Credit Card (USD)".into(),
            balance: dec!(1800),
            currency: "USD".into(),
            exchange_rate: dec!(1),
        },
    ]
}

pub fn sample_expenses() -> Vec<Expense> {
    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default()
    }
    vec![
        Expense {
            id: 1,
            date: d(2024, 1, 15),
            wallet: "Cash (Dollar)".into(),
            category: "Food & Dining".into(),
            description: "Lunch at Italian restaurant".into(),
            amount: dec!(45.5),
            currency: "USD".into(),
        },
        Expense {
            id: 2,
            date: d(2024, 1, 14),
            wallet: "Cash (Riel)".into(),
            category: "Transportation".into(),
            description: "Gas for car".into(),
            amount: dec!(492000),
            currency: "KHR".into(),
        },
        Expense {
            id: 3,
            date: d(2024, 1, 13),
            wallet: "Credit Card (USD)".into(),
            category: "Shopping".into(),
            description: "New shoes".into(),
            amount: dec!(89.99),
            currency: "USD".into(),
        },
        Expense {
            id: 4,
            date: d(2024, 1, 12),
            wallet: "ACLEDA Bank (KHR)".into(),
            category: "Entertainment".into(),
            description: "Movie tickets".into(),
            amount: dec!(102500),
            currency: "KHR".into(),
        },
        Expense {
            id: 5,
            date: d(2024, 1, 11),
            wallet: "ABA Bank (USD)".into(),
            category: "Bills & Utilities".into(),
            description: "Electricity bill".into(),
            amount: dec!(150.00),
            currency: "USD".into(),
        },
    ]
}
