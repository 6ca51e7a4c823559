// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{self, Direction};
use crate::utils::{parse_direction, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let directions = match m.get_one::<String>("type") {
        Some(s) => vec![parse_direction(s)?],
        None => vec![Direction::Income, Direction::Expense],
    };

    let mut rows = Vec::new();
    for direction in directions {
        for category in models::suggested_categories(direction) {
            rows.push(vec![
                direction.as_str().to_string(),
                category.to_string(),
                models::category_icon(category, direction).to_string(),
            ]);
        }
    }
    println!("{}", pretty_table(&["Type", "Category", "Icon"], rows));
    Ok(())
}
