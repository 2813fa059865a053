// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Domain errors surfaced by the ledger and currency core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Wallet '{0}' not found")]
    WalletNotFound(String),
    #[error("Wallet '{0}' already exists")]
    DuplicateWallet(String),
    #[error("Expense #{0} not found")]
    ExpenseNotFound(i64),
    #[error("Wallet '{name}' still has {count} expense(s) recorded against it")]
    WalletInUse { name: String, count: usize },
    #[error("Currency '{found}' does not match wallet '{wallet}' currency '{expected}'")]
    CurrencyMismatch {
        found: String,
        wallet: String,
        expected: String,
    },
}
