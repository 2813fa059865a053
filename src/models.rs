// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub wallet: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Wallet {
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
    pub currency: String,
    /// Units per base currency, cached from the currency table at creation.
    pub exchange_rate: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Units per base currency (the base itself carries 1).
    pub rate: Decimal,
}

/// Spending position of one wallet against the expense list.
#[derive(Debug, Clone, Serialize)]
pub struct WalletBalance {
    pub spent: Decimal,
    pub current: Decimal,
    pub count: usize,
}
