// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{TimeFilter, Transaction};

pub const FLOW_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    /// Kept negative; rendered as an absolute value.
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub spent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowPoint {
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// The list view: time window plus case-insensitive substring search on
/// the description, sorted by date descending. The sort is stable, so
/// same-date entries keep their insertion order.
pub fn filtered_view(
    transactions: &[Transaction],
    filter: TimeFilter,
    search: &str,
    today: NaiveDate,
) -> Vec<Transaction> {
    let month_start = today.with_day(1).unwrap_or(today);
    let needle = search.to_lowercase();
    let mut view: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.description.to_lowercase().contains(&needle))
        .filter(|t| match filter {
            TimeFilter::Month => t.date >= month_start,
            TimeFilter::All => true,
        })
        .cloned()
        .collect();
    view.sort_by(|a, b| b.date.cmp(&a.date));
    view
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .map(|t| t.amount)
        .sum();
    Totals {
        income,
        expenses,
        balance: income + expenses,
    }
}

/// Expenses grouped by category tag, absolute magnitudes, largest
/// first (ties alphabetical). Categories without expense transactions
/// are absent, not zero-valued.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.amount < Decimal::ZERO) {
        *by_category.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount.abs();
    }
    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(category, spent)| CategorySlice {
            category: category.to_string(),
            spent,
        })
        .collect();
    slices.sort_by(|a, b| b.spent.cmp(&a.spent));
    slices
}

/// One point per calendar day of the trailing window ending today,
/// inclusive. Days without transactions yield zeros, never omission.
/// Always fed the full collection, independent of the list filter.
pub fn flow_series(transactions: &[Transaction], today: NaiveDate) -> Vec<FlowPoint> {
    (0..FLOW_WINDOW_DAYS)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let mut income = Decimal::ZERO;
            let mut expense = Decimal::ZERO;
            for t in transactions.iter().filter(|t| t.date == day) {
                if t.amount > Decimal::ZERO {
                    income += t.amount;
                } else {
                    expense += t.amount.abs();
                }
            }
            FlowPoint {
                label: day.format("%d/%m").to_string(),
                income,
                expense,
            }
        })
        .collect()
}
