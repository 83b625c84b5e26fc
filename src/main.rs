// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use price_clean::{app, args::Args, config::CleanConfig, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CleanConfig::from(Args::parse());
    logging::init(config.verbosity);

    match app::run(&config) {
        Ok(report) => {
            if config.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Application Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
