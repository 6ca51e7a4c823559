// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{self, Direction, TransactionInput};
use crate::session::{Action, Reaction, Session};
use crate::utils::{
    self, confirm, fmt_currency, fmt_date, maybe_print_json, parse_date, parse_direction,
    parse_filter, pretty_table,
};
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("edit", sub)) => edit(session, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let today = utils::today();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        // The form prefills today's date.
        None => today,
    };
    let direction = parse_direction(sub.get_one::<String>("type").unwrap())?;
    let input = TransactionInput {
        description: sub.get_one::<String>("desc").unwrap().clone(),
        amount: sub.get_one::<String>("amount").unwrap().clone(),
        date: Some(date),
        direction,
        category: sub.get_one::<String>("category").unwrap().clone(),
    };

    match session.dispatch(Action::Submit(input), today)? {
        Reaction::FormError(msg) => eprintln!("{}", msg),
        _ => {
            if let Some(t) = session.transactions.last() {
                println!(
                    "Recorded {} '{}' on {} ({})",
                    fmt_currency(t.amount),
                    t.description,
                    t.date,
                    t.category
                );
            }
        }
    }
    Ok(())
}

fn edit(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let today = utils::today();
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();

    let prefill = match session.dispatch(Action::StartEdit(id), today)? {
        Reaction::Editing(txn) => txn,
        // Unknown id: the edit form never opens.
        _ => return Ok(()),
    };

    let direction = match sub.get_one::<String>("type") {
        Some(s) => parse_direction(s)?,
        None => prefill.direction(),
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        None => prefill.date,
    };
    let input = TransactionInput {
        description: sub
            .get_one::<String>("desc")
            .cloned()
            .unwrap_or_else(|| prefill.description.clone()),
        // The form shows the magnitude; the sign lives in the type choice.
        amount: sub
            .get_one::<String>("amount")
            .cloned()
            .unwrap_or_else(|| prefill.amount.abs().to_string()),
        date: Some(date),
        direction,
        category: sub
            .get_one::<String>("category")
            .cloned()
            .unwrap_or_else(|| prefill.category.clone()),
    };

    match session.dispatch(Action::Submit(input), today)? {
        Reaction::FormError(msg) => eprintln!("{}", msg),
        _ => println!("Updated transaction {}", prefill.id),
    }
    Ok(())
}

fn rm(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let confirmed =
        sub.get_flag("yes") || confirm("Delete this transaction permanently?")?;

    let before = session.transactions.len();
    let reaction = session.dispatch(
        Action::Delete {
            id: id.clone(),
            confirmed,
        },
        utils::today(),
    )?;
    if reaction == Reaction::Refreshed && session.transactions.len() < before {
        println!("Removed transaction {}", id);
    }
    Ok(())
}

fn list(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = parse_filter(sub.get_one::<String>("filter").unwrap())?;
    let search = sub.get_one::<String>("search").unwrap().clone();
    let today = utils::today();

    session.dispatch(Action::SetFilter(filter), today)?;
    session.dispatch(Action::SetSearch(search), today)?;

    let mut view = session.view().filtered.clone();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        view.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &view)? {
        let rows: Vec<Vec<String>> = view
            .iter()
            .map(|t| {
                let direction = t.direction();
                let sign = match direction {
                    Direction::Income => "+",
                    Direction::Expense => "-",
                };
                vec![
                    t.id.clone(),
                    fmt_date(t.date),
                    t.description.clone(),
                    t.category.clone(),
                    models::category_icon(&t.category, direction).to_string(),
                    format!("{} {}", sign, fmt_currency(t.amount.abs())),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Icon", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}
