// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{Action, Session};
use crate::utils;
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("toggle", _)) => {
            session.dispatch(Action::ToggleTheme, utils::today())?;
            println!("Theme set to {}", session.theme.as_str());
        }
        _ => println!("{}", session.theme.as_str()),
    }
    Ok(())
}
