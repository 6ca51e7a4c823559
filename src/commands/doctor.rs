// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

// Audits the invariants every mutation path is supposed to uphold:
// unique ids, non-zero signed amounts, non-blank text fields.
pub fn handle(session: &Session) -> Result<()> {
    let mut rows = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for t in &session.transactions {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        if t.amount.is_zero() {
            rows.push(vec!["zero_amount".into(), t.id.clone()]);
        }
        if t.description.trim().is_empty() {
            rows.push(vec!["blank_description".into(), t.id.clone()]);
        }
        if t.category.trim().is_empty() {
            rows.push(vec!["blank_category".into(), t.id.clone()]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
