// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The in-memory session ledger.
//!
//! All state lives here for the lifetime of one process and is mutated only
//! through the update functions below, each of which builds the replacement
//! collection and swaps it in. Wallets are referenced from expenses by name;
//! the only guarded operation is wallet deletion.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::currency_by_code;
use crate::data::{self, WITHDRAWAL_CATEGORY};
use crate::error::LedgerError;
use crate::models::{Expense, Wallet, WalletBalance};

#[derive(Debug, Clone)]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    pub wallets: Vec<Wallet>,
    next_id: i64,
}

/// Field-wise patch for `update_expense`; `None` leaves the field alone.
#[derive(Debug, Default, Clone)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub wallet: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

/// Field-wise patch for `update_wallet`.
#[derive(Debug, Default, Clone)]
pub struct WalletUpdate {
    pub name: Option<String>,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Deposit,
    Withdrawal,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            expenses: Vec::new(),
            wallets: Vec::new(),
            next_id: 1,
        }
    }

    /// The default wallet set with no expenses; the starting point for
    /// `--input` sessions.
    pub fn with_default_wallets() -> Self {
        let wallets = data::default_wallets();
        let next_id = wallets.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        Ledger {
            expenses: Vec::new(),
            wallets,
            next_id,
        }
    }

    /// The built-in sample dataset: default wallets plus seed expenses.
    pub fn sample() -> Self {
        let mut ledger = Self::with_default_wallets();
        let expenses = data::sample_expenses();
        let max_expense = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        ledger.next_id = ledger.next_id.max(max_expense + 1);
        ledger.expenses = expenses;
        ledger
    }

    fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn wallet(&self, name: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.name == name)
    }

    pub fn expense(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    fn check_category(category: &str) -> Result<(), LedgerError> {
        if data::category_by_name(category).is_none() && category != WITHDRAWAL_CATEGORY {
            return Err(LedgerError::UnknownCategory(category.to_string()));
        }
        Ok(())
    }

    /// Record a new expense against a wallet. The currency is inherited from
    /// the wallet; the category must be in the fixed table (or the
    /// system-generated withdrawal label). Newest entries sit first, as they
    /// did on the dashboard.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        wallet: &str,
        category: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<i64, LedgerError> {
        Self::check_category(category)?;
        let currency = self
            .wallet(wallet)
            .map(|w| w.currency.clone())
            .ok_or_else(|| LedgerError::WalletNotFound(wallet.to_string()))?;
        let expense = Expense {
            id: self.alloc_id(),
            date,
            wallet: wallet.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            amount,
            currency,
        };
        let id = expense.id;
        let mut next = Vec::with_capacity(self.expenses.len() + 1);
        next.push(expense);
        next.extend(self.expenses.iter().cloned());
        self.expenses = next;
        Ok(id)
    }

    pub fn update_expense(&mut self, id: i64, patch: ExpenseUpdate) -> Result<(), LedgerError> {
        if self.expense(id).is_none() {
            return Err(LedgerError::ExpenseNotFound(id));
        }
        if let Some(ref category) = patch.category {
            Self::check_category(category)?;
        }
        // Moving an expense to another wallet re-inherits that wallet's currency.
        let wallet_fields = match patch.wallet {
            Some(ref name) => {
                let w = self
                    .wallet(name)
                    .ok_or_else(|| LedgerError::WalletNotFound(name.clone()))?;
                Some((w.name.clone(), w.currency.clone()))
            }
            None => None,
        };
        let next = self
            .expenses
            .iter()
            .map(|e| {
                if e.id != id {
                    return e.clone();
                }
                let mut e = e.clone();
                if let Some(date) = patch.date {
                    e.date = date;
                }
                if let Some((ref name, ref currency)) = wallet_fields {
                    e.wallet = name.clone();
                    e.currency = currency.clone();
                }
                if let Some(ref category) = patch.category {
                    e.category = category.clone();
                }
                if let Some(amount) = patch.amount {
                    e.amount = amount;
                }
                if let Some(ref description) = patch.description {
                    e.description = description.clone();
                }
                e
            })
            .collect();
        self.expenses = next;
        Ok(())
    }

    pub fn remove_expense(&mut self, id: i64) -> Result<(), LedgerError> {
        let next: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        if next.len() == self.expenses.len() {
            return Err(LedgerError::ExpenseNotFound(id));
        }
        self.expenses = next;
        Ok(())
    }

    /// Add a wallet. Names are the de facto foreign key, so they must be
    /// unique; the currency table's rate is cached on the wallet.
    pub fn add_wallet(
        &mut self,
        name: &str,
        balance: Decimal,
        currency: &str,
    ) -> Result<i64, LedgerError> {
        if self.wallet(name).is_some() {
            return Err(LedgerError::DuplicateWallet(name.to_string()));
        }
        let ccy = currency_by_code(currency)
            .ok_or_else(|| LedgerError::UnknownCurrency(currency.to_string()))?;
        let wallet = Wallet {
            id: self.alloc_id(),
            name: name.to_string(),
            balance,
            currency: ccy.code.to_string(),
            exchange_rate: ccy.rate,
        };
        let id = wallet.id;
        let mut next = self.wallets.clone();
        next.push(wallet);
        self.wallets = next;
        Ok(id)
    }

    /// Update a wallet in place. Renaming is allowed even while referenced;
    /// stale references then show up in `health detailed`, matching the
    /// source behavior of name-keyed references.
    pub fn update_wallet(&mut self, name: &str, patch: WalletUpdate) -> Result<(), LedgerError> {
        if self.wallet(name).is_none() {
            return Err(LedgerError::WalletNotFound(name.to_string()));
        }
        if let Some(ref new_name) = patch.name {
            if new_name != name && self.wallet(new_name).is_some() {
                return Err(LedgerError::DuplicateWallet(new_name.clone()));
            }
        }
        let ccy_fields = match patch.currency {
            Some(ref code) => {
                let c = currency_by_code(code)
                    .ok_or_else(|| LedgerError::UnknownCurrency(code.clone()))?;
                Some((c.code.to_string(), c.rate))
            }
            None => None,
        };
        let next = self
            .wallets
            .iter()
            .map(|w| {
                if w.name != name {
                    return w.clone();
                }
                let mut w = w.clone();
                if let Some(ref new_name) = patch.name {
                    w.name = new_name.clone();
                }
                if let Some(balance) = patch.balance {
                    w.balance = balance;
                }
                if let Some((ref code, rate)) = ccy_fields {
                    w.currency = code.clone();
                    w.exchange_rate = rate;
                }
                w
            })
            .collect();
        self.wallets = next;
        Ok(())
    }

    /// Delete a wallet. Refused while any expense still references it by
    /// name; the wallet list is left untouched on refusal.
    pub fn remove_wallet(&mut self, name: &str) -> Result<(), LedgerError> {
        if self.wallet(name).is_none() {
            return Err(LedgerError::WalletNotFound(name.to_string()));
        }
        let count = self.expenses.iter().filter(|e| e.wallet == name).count();
        if count > 0 {
            return Err(LedgerError::WalletInUse {
                name: name.to_string(),
                count,
            });
        }
        let next: Vec<Wallet> = self
            .wallets
            .iter()
            .filter(|w| w.name != name)
            .cloned()
            .collect();
        self.wallets = next;
        Ok(())
    }

    /// Manual balance adjustment. A withdrawal with a reason also records an
    /// expense under the withdrawal label so the money trail stays visible;
    /// deposits adjust the recorded balance only.
    pub fn adjust_balance(
        &mut self,
        name: &str,
        amount: Decimal,
        kind: Adjustment,
        reason: Option<&str>,
        date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if self.wallet(name).is_none() {
            return Err(LedgerError::WalletNotFound(name.to_string()));
        }
        let next = self
            .wallets
            .iter()
            .map(|w| {
                if w.name != name {
                    return w.clone();
                }
                let mut w = w.clone();
                w.balance = match kind {
                    Adjustment::Deposit => w.balance + amount,
                    Adjustment::Withdrawal => w.balance - amount,
                };
                w
            })
            .collect();
        self.wallets = next;
        if kind == Adjustment::Withdrawal {
            if let Some(reason) = reason.filter(|r| !r.is_empty()) {
                self.add_expense(date, name, WITHDRAWAL_CATEGORY, amount, reason)?;
            }
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Spending position of one wallet: matched by case-sensitive name equality,
/// summed without conversion (a wallet's expenses share its currency).
pub fn wallet_balance(wallet: &Wallet, expenses: &[Expense]) -> WalletBalance {
    let matched: Vec<&Expense> = expenses.iter().filter(|e| e.wallet == wallet.name).collect();
    let spent: Decimal = matched.iter().map(|e| e.amount).sum();
    WalletBalance {
        spent,
        current: wallet.balance - spent,
        count: matched.len(),
    }
}
