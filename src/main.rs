/// litearray entry point: parse args, dispatch to a subcommand, report errors.
use clap::Parser; // trait import enables LitearrayCli::parse()
use colored::Colorize;

use litearray::cli::LitearrayCli;
use litearray::commands;

fn main() {
    let args = LitearrayCli::parse();

    if let Err(e) = commands::run(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
