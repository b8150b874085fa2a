use clap::Parser;
use drlboard::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
