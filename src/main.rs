// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use treels::{app, cli::Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match app::run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
