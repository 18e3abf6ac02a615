// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! keyrun binary entry point.

use clap::Parser;

use keyrun::cli::Cli;
use keyrun::diagnostic::print_error;
use keyrun::harness;
use keyrun::outcome::EXIT_CONFIG;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match harness::run(&config, std::io::stdout().lock()).await {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(e) => {
            print_error(e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}
