// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketbook::{cli, commands, session::Session, store, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = store::open_or_init()?;
    let mut session = Session::start(conn, utils::today());

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Storage initialized at {}", store::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&mut session, sub)?,
        Some(("chart", sub)) => commands::charts::handle(&mut session, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        Some(("reset", sub)) => commands::reset::handle(&mut session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
