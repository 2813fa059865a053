// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rielbook::aggregate::{export_stats, summarize};
use rielbook::ledger::Ledger;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// Cash (Dollar) in USD, Cash (Riel) in KHR.
fn mixed_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_wallet("Cash (Dollar)", dec!(500), "USD").unwrap();
    ledger.add_wallet("Cash (Riel)", dec!(6150000), "KHR").unwrap();
    ledger
        .add_expense(day(15), "Cash (Dollar)", "Food & Dining", dec!(45.5), "Lunch")
        .unwrap();
    ledger
        .add_expense(day(14), "Cash (Riel)", "Food & Dining", dec!(41000), "Dinner")
        .unwrap();
    ledger
        .add_expense(day(13), "Cash (Dollar)", "Transportation", dec!(30), "Taxi")
        .unwrap();
    ledger
        .add_expense(day(12), "Cash (Riel)", "Shopping", dec!(82000), "Market")
        .unwrap();
    ledger
}

#[test]
fn by_currency_sums_raw_amounts() {
    let summary = summarize(&mixed_ledger().expenses).unwrap();
    assert_eq!(summary.by_currency.get("USD").copied(), Some(dec!(75.5)));
    assert_eq!(summary.by_currency.get("KHR").copied(), Some(dec!(123000)));
}

#[test]
fn total_in_base_converts_everything() {
    // 41000 KHR = 10 USD, 82000 KHR = 20 USD.
    let summary = summarize(&mixed_ledger().expenses).unwrap();
    assert_eq!(summary.total_in_base, dec!(105.5));
}

#[test]
fn category_breakdown_is_converted_sorted_and_nonzero_only() {
    let summary = summarize(&mixed_ledger().expenses).unwrap();
    let names: Vec<&str> = summary.by_category.iter().map(|c| c.name.as_str()).collect();
    // Food 55.5, Transportation 30, Shopping 20: descending, no empty rows.
    assert_eq!(names, vec!["Food & Dining", "Transportation", "Shopping"]);
    assert_eq!(summary.by_category[0].total, dec!(55.5));
    assert_eq!(summary.by_category[1].total, dec!(30));
    assert_eq!(summary.by_category[2].total, dec!(20));
}

#[test]
fn category_percentages_sum_to_one_hundred() {
    let summary = summarize(&mixed_ledger().expenses).unwrap();
    let sum: Decimal = summary.by_category.iter().map(|c| c.percentage).sum();
    assert!((sum - dec!(100)).abs() < dec!(0.0001), "sum was {}", sum);
}

#[test]
fn riel_amounts_do_not_swamp_the_split() {
    // Raw sums would put Shopping (82000 KHR) far above Transportation
    // (30 USD); converted, Transportation is the bigger share.
    let summary = summarize(&mixed_ledger().expenses).unwrap();
    let transport = summary
        .by_category
        .iter()
        .find(|c| c.name == "Transportation")
        .unwrap();
    let shopping = summary
        .by_category
        .iter()
        .find(|c| c.name == "Shopping")
        .unwrap();
    assert!(transport.percentage > shopping.percentage);
}

#[test]
fn empty_ledger_summarizes_to_zero() {
    let summary = summarize(&[]).unwrap();
    assert!(summary.by_currency.is_empty());
    assert!(summary.by_category.is_empty());
    assert_eq!(summary.total_in_base, Decimal::ZERO);
}

#[test]
fn export_stats_cover_counts_and_date_range() {
    let ledger = mixed_ledger();
    let stats = export_stats(&ledger.expenses);
    assert_eq!(stats.records, 4);
    assert_eq!(stats.categories, 3);
    assert_eq!(stats.wallets, 2);
    assert_eq!(stats.earliest, Some(day(12)));
    assert_eq!(stats.latest, Some(day(15)));
    // Raw mixed-currency sum, as the export summary card showed it.
    assert_eq!(stats.total_amount, dec!(123075.5));
}

#[test]
fn export_stats_on_empty_set() {
    let stats = export_stats(&[]);
    assert_eq!(stats.records, 0);
    assert_eq!(stats.total_amount, Decimal::ZERO);
    assert_eq!(stats.earliest, None);
    assert_eq!(stats.latest, None);
}
