// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;

/// Shared predicate for `expense list` and filtered export: search is a
/// case-insensitive substring match on description or category, the other
/// two are exact matches, and an absent field matches everything.
#[derive(Debug, Default, Clone)]
pub struct ExpenseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub wallet: Option<String>,
}

impl ExpenseFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.wallet.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let matches_search = match self.search {
            Some(ref term) => {
                let term = term.to_lowercase();
                expense.description.to_lowercase().contains(&term)
                    || expense.category.to_lowercase().contains(&term)
            }
            None => true,
        };
        let matches_category = match self.category {
            Some(ref c) => expense.category == *c,
            None => true,
        };
        let matches_wallet = match self.wallet {
            Some(ref w) => expense.wallet == *w,
            None => true,
        };
        matches_search && matches_category && matches_wallet
    }

    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }

    /// Export file base name derived from the active filters:
    /// `expenses[_<category>][_<wallet>][_filtered]`, lowercased with
    /// whitespace runs collapsed to underscores.
    pub fn export_basename(&self) -> String {
        let mut base = String::from("expenses");
        if let Some(ref category) = self.category {
            base.push('_');
            base.push_str(&slug(category));
        }
        if let Some(ref wallet) = self.wallet {
            base.push('_');
            base.push_str(&slug(wallet));
        }
        if self.search.is_some() {
            base.push_str("_filtered");
        }
        base
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
