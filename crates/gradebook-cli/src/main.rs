mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --json output stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook=info,gradebook_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let roster_path = args.roster.as_deref();

    match args.command {
        Some(Command::List { json }) => commands::list::run(roster_path, args.no_sample, json),
        Some(Command::Stats { json }) => commands::stats::run(roster_path, args.no_sample, json),
        Some(Command::Report) => commands::report::run(roster_path, args.no_sample),
        Some(Command::Add { name, grade }) => {
            commands::add::run(roster_path, args.no_sample, &name, &grade)
        }
        Some(Command::Remove { index }) => {
            commands::remove::run(roster_path, args.no_sample, index)
        }
        Some(Command::SetGrade { index, grade }) => {
            commands::set_grade::run(roster_path, args.no_sample, index, &grade)
        }
        Some(Command::Interactive) | None => {
            commands::interactive::run(roster_path, args.no_sample)
        }
    }
}
