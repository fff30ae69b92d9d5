mod cli;
mod config;
mod convert;
mod lines_cmd;
mod logging;
mod phase_cmd;
mod tonight_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LunarConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LunarConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Jd(args) => phase_cmd::run_jd(args, &config),
        Command::Phase(args) => phase_cmd::run_phase(args, &config),
        Command::Tonight(args) => tonight_cmd::run(args, &config),
        Command::PickLine(args) => lines_cmd::run(args, &config),
    }
}
