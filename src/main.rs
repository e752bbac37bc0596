mod app;
mod cli;
mod config;
mod consts;
mod error;
mod format;
mod host;
mod session;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = app::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
