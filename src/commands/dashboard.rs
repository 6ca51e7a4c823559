// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{Action, Session};
use crate::utils::{self, fmt_currency, maybe_print_json, parse_filter, pretty_table};
use anyhow::Result;

pub fn handle(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = parse_filter(sub.get_one::<String>("filter").unwrap())?;
    let search = sub.get_one::<String>("search").unwrap().clone();
    let today = utils::today();

    session.dispatch(Action::SetFilter(filter), today)?;
    session.dispatch(Action::SetSearch(search), today)?;

    let totals = &session.view().totals;
    if !maybe_print_json(json_flag, jsonl_flag, totals)? {
        // Expenses are held negative; the dashboard shows the magnitude.
        let rows = vec![vec![
            fmt_currency(totals.balance),
            fmt_currency(totals.income),
            fmt_currency(totals.expenses.abs()),
        ]];
        println!(
            "{}",
            pretty_table(&["Balance", "Income", "Expenses"], rows)
        );
    }
    Ok(())
}
