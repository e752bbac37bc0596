//! Command dispatch

use std::io::BufRead;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppError;
use crate::host::{Event, StdioHost};
use crate::session::Session;

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let mut session = Session::new(!cli.absolute);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Render { file } => {
            // stdout carries the status line, so settings loading stays quiet
            let settings = Settings::load_quiet();
            let mut host = StdioHost::new(Some(file), cli.folders, cli.json);
            session.handle(Event::ViewActivated, &mut host, &settings)
        }
        Commands::Serve => {
            let settings = Settings::load();
            let mut host = StdioHost::new(None, cli.folders, cli.json);
            serve(&mut session, &mut host, &settings)
        }
    }
}

/// Pump editor events from stdin until EOF. Bad input lines are reported
/// and skipped so one glitching editor message cannot wedge the adapter;
/// render failures are real faults and abort.
fn serve(
    session: &mut Session,
    host: &mut StdioHost,
    settings: &Settings,
) -> Result<(), AppError> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match host.apply_line(&line) {
            Ok(event) => session.handle(event, host, settings)?,
            Err(e) => eprintln!("Warning: skipping event line: {e}"),
        }
    }
    Ok(())
}
