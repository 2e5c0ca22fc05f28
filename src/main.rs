use blm_parser::cli::{self, Args};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    match cli::run(args) {
        Ok(stats) if stats.is_successful() => process::exit(0),
        Ok(_stats) => {
            // Failures were already listed in the summary
            process::exit(2);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
