// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{Action, Reaction, Session};
use crate::utils::{self, confirm};
use anyhow::Result;

pub fn handle(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let confirmed = sub.get_flag("yes")
        || confirm("This will permanently erase ALL recorded data. Continue?")?;

    let reaction = session.dispatch(Action::ClearAll { confirmed }, utils::today())?;
    if reaction == Reaction::Refreshed {
        println!("All data erased.");
    }
    Ok(())
}
