// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::io::{self, Write};

use crate::models::{Direction, TimeFilter};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_direction(s: &str) -> Result<Direction> {
    match s.trim().to_lowercase().as_str() {
        "income" => Ok(Direction::Income),
        "expense" => Ok(Direction::Expense),
        _ => Err(anyhow!("Invalid type '{}', expected income|expense", s)),
    }
}

pub fn parse_filter(s: &str) -> Result<TimeFilter> {
    match s.trim().to_lowercase().as_str() {
        "month" => Ok(TimeFilter::Month),
        "all" => Ok(TimeFilter::All),
        _ => Err(anyhow!("Invalid filter '{}', expected month|all", s)),
    }
}

/// Fixed locale: two decimals, '.' thousands, ',' decimal separator,
/// "R$" marker. 1234.5 -> "R$ 1.234,50".
pub fn fmt_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let raw = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*d as char);
    }
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("R$ {}{},{}", sign, grouped, frac_part)
}

pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Variant taking prebuilt cells, for the chart tables whose ink
/// depends on the theme.
pub fn cell_table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r);
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// The confirmation collaborator: destructive actions proceed only on
/// an explicit yes.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
