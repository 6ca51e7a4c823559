// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Theme;
use crate::session::{Action, Session};
use crate::utils::{self, cell_table, fmt_currency, maybe_print_json, parse_filter};
use anyhow::Result;
use comfy_table::{Cell, Color};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: usize = 24;

// Slice colors cycle; only the series ink below tracks the theme.
const SLICE_COLORS: &[Color] = &[
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Grey,
    Color::DarkMagenta,
];

fn series_colors(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Dark => (Color::Green, Color::Red),
        Theme::Light => (Color::DarkGreen, Color::DarkRed),
    }
}

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(session, sub)?,
        Some(("flow", sub)) => flow(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = parse_filter(sub.get_one::<String>("filter").unwrap())?;
    let search = sub.get_one::<String>("search").unwrap().clone();
    let today = utils::today();

    session.dispatch(Action::SetFilter(filter), today)?;
    session.dispatch(Action::SetSearch(search), today)?;

    let slices = &session.view().breakdown;
    if maybe_print_json(json_flag, jsonl_flag, slices)? {
        return Ok(());
    }

    let total: Decimal = slices.iter().map(|s| s.spent).sum();
    let max = slices.first().map(|s| s.spent).unwrap_or(Decimal::ZERO);
    let (_, expense_ink) = series_colors(session.theme);

    let rows: Vec<Vec<Cell>> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let ratio = if max.is_zero() {
                0.0
            } else {
                (slice.spent / max).to_f64().unwrap_or(0.0)
            };
            let width = ((ratio * BAR_WIDTH as f64).round() as usize).max(1);
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (slice.spent / total * Decimal::from(100)).round_dp(1)
            };
            vec![
                Cell::new(&slice.category),
                Cell::new(fmt_currency(slice.spent)).fg(expense_ink),
                Cell::new(format!("{}%", share)),
                Cell::new("█".repeat(width)).fg(SLICE_COLORS[i % SLICE_COLORS.len()]),
            ]
        })
        .collect();
    println!(
        "{}",
        cell_table(&["Category", "Spent", "Share", ""], rows)
    );
    Ok(())
}

fn flow(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let points = &session.view().flow;
    if maybe_print_json(json_flag, jsonl_flag, points)? {
        return Ok(());
    }

    let (income_ink, expense_ink) = series_colors(session.theme);
    let rows: Vec<Vec<Cell>> = points
        .iter()
        .map(|p| {
            vec![
                Cell::new(&p.label),
                Cell::new(fmt_currency(p.income)).fg(income_ink),
                Cell::new(fmt_currency(p.expense)).fg(expense_ink),
            ]
        })
        .collect();
    println!("{}", cell_table(&["Day", "Income", "Expense"], rows));
    Ok(())
}
