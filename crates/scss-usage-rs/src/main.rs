//! scss-usage-rs: finds SCSS classes that no React component references.

mod cli;
mod orchestrator;
mod output;

use clap::Parser;
use cli::Args;
use miette::Result;

fn main() -> Result<()> {
    let args = Args::parse();
    let fail_on_unused = args.fail_on_unused;

    match orchestrator::run(args) {
        Ok(report) => {
            if fail_on_unused && report.unused_classes_count > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
