use clap::Parser;
use std::process::ExitCode;
use todo_sweeper::Cli;

fn main() -> anyhow::Result<ExitCode> {
    Cli::parse().run()
}
