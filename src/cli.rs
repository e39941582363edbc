use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(version, author, about)]
#[command(arg_required_else_help = true)]
pub struct CLIArgs {
    /// Path to the program, as a JSON-encoded AST
    pub program: PathBuf,

    /// Dump the final environment's bindings after evaluation
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
