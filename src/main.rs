mod app_config;
mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod logging;
mod models;
mod output;

use clap::Parser;

use crate::commands::Failure;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.global.verbose);

    let reply = match commands::dispatch(&cli).await {
        Ok(reply) => reply,
        Err(failure) => {
            output::report_failure(&failure);
            std::process::exit(1);
        }
    };

    match output::render(&reply) {
        Ok(Some(text)) => println!("{text}"),
        Ok(None) => {}
        Err(e) => {
            output::report_failure(&Failure::bare(commands::command_name(&cli.command), e));
            std::process::exit(1);
        }
    }
}
