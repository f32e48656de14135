//! Command line compiler for macro Turing-machine programs.
//!
//! Expands every `D:` directive of the input program into explicit
//! transitions and writes the result in the same line-oriented format.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use tmc::config::{CompilerConfig, LogLevel};
use tmc::driver::compile_file;
use tmc::error::CliError;
use tmc::logging::init_logging;

/// Compile a macro Turing-machine program into a fully enumerated
/// transition table.
#[derive(Parser, Debug)]
#[command(name = "tmc", version, about)]
struct Args {
    /// Program file to compile.
    input: PathBuf,
    /// Destination file; defaults to the input path plus the output extension.
    output: Option<PathBuf>,
    /// Log level.
    #[arg(long, value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,
    /// Extension appended to the input path when no output is given.
    #[arg(long)]
    output_extension: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CompilerConfig::default());
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %args.input.display(),
        "starting tmc"
    );

    if let Err(e) = compile_file(&config, &args.input, args.output.as_deref()) {
        error!(error = %format_args!("{e:#}"), "compilation failed");
        std::process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<CompilerConfig, CliError> {
    CompilerConfig::from_env()?.apply_overrides(args.log_level, args.output_extension.clone())
}
