use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use nanobanana_gen::cli::{commands::basic, BasicCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    nanobanana_gen::init_tracing();

    let cli = BasicCli::parse();

    match basic::run(cli.args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
