// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

impl Transaction {
    /// The amount sign is the sole source of truth for direction;
    /// there is no separate type field.
    pub fn direction(&self) -> Direction {
        if self.amount > Decimal::ZERO {
            Direction::Income
        } else {
            Direction::Expense
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }

    /// Signs a magnitude: expenses are stored negative, income positive.
    pub fn signed(self, magnitude: Decimal) -> Decimal {
        match self {
            Direction::Income => magnitude.abs(),
            Direction::Expense => -magnitude.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the literal "light" is dark, including
    /// absent or corrupted stored values.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Month,
    All,
}

/// Raw form fields as submitted, before validation and signing.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub date: Option<NaiveDate>,
    pub direction: Direction,
    pub category: String,
}

/// Validated form values, amount already signed from the direction.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

/// The one inline form message. Validation never aborts the process;
/// the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields with valid values.")]
pub struct InvalidForm;

impl TransactionInput {
    /// Rejects blank descriptions and categories, unparsable or zero
    /// amounts, and missing dates. The typed sign of the amount is
    /// discarded; only the magnitude and the declared direction count.
    pub fn validate(&self) -> Result<FormValues, InvalidForm> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(InvalidForm);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(InvalidForm);
        }
        let magnitude = self.amount.trim().parse::<Decimal>().map_err(|_| InvalidForm)?;
        if magnitude.is_zero() {
            return Err(InvalidForm);
        }
        let date = self.date.ok_or(InvalidForm)?;
        Ok(FormValues {
            description: description.to_string(),
            amount: self.direction.signed(magnitude),
            date,
            category: category.to_string(),
        })
    }
}

pub const INCOME_CATEGORIES: &[&str] = &["salary", "investments", "other"];
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "food",
    "housing",
    "transport",
    "leisure",
    "health",
    "investments",
    "other",
];

pub fn suggested_categories(direction: Direction) -> &'static [&'static str] {
    match direction {
        Direction::Income => INCOME_CATEGORIES,
        Direction::Expense => EXPENSE_CATEGORIES,
    }
}

/// Presentational icon key for a category tag. Unrecognized tags fall
/// back to a generic icon per direction.
pub fn category_icon(category: &str, direction: Direction) -> &'static str {
    match direction {
        Direction::Income => match category {
            "salary" => "briefcase",
            "investments" => "bar-chart",
            _ => "dollar-sign",
        },
        Direction::Expense => match category {
            "food" => "shopping-cart",
            "housing" => "home",
            "transport" => "truck",
            "leisure" => "film",
            "health" => "heart",
            "investments" => "trending-down",
            _ => "tag",
        },
    }
}
