use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use nanobanana_gen::cli::{commands::generate, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    nanobanana_gen::init_tracing();

    let cli = Cli::parse();

    match generate::run(cli.args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
