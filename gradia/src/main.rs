mod app;
mod cli;
mod config;
mod errors;
mod events;
mod notify;
mod repl;
mod services;
mod widgets;

use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    app::run(cli)?;
    Ok(())
}
