//! stimpl - a CLI driver for the STIMPL evaluator.
//!
//! Reads a program encoded as JSON, evaluates it, and reports the final
//! value and type. `Print` nodes inside the program write to stdout as
//! they run.

use clap::Parser;
use stimpl::cli::CLIArgs;
use stimpl_interpreter::run_file;
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

fn main() -> std::process::ExitCode {
    let args: CLIArgs = CLIArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    debug!("Running program: {:?}", args.program);

    match run_file(&args.program) {
        Ok(result) => {
            println!("{} : {}", result.value, result.ty);
            if args.debug {
                for (name, value, ty) in result.env.bindings() {
                    debug!(name, %value, %ty, "binding");
                }
            }
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
