//! Reading, compiling and writing program files.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info};

use tmc_core::compile_program;

use crate::config::CompilerConfig;

/// Outcome of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSummary {
    /// Path the expanded program was written to.
    pub output: PathBuf,
    /// Number of states after expansion.
    pub states: usize,
    /// Number of expanded transitions.
    pub transitions: usize,
}

/// Output path used when none is given: the input path with `extension`
/// appended.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use tmc::driver::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("programs/add.tm"), "out"),
///     PathBuf::from("programs/add.tm.out")
/// );
/// ```
#[must_use]
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Compile the program at `input` and write the expanded table.
///
/// The output file is only created once the whole program has compiled, so
/// a failing program never leaves a partial table behind.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the program fails to
/// compile, or the output cannot be written.
pub fn compile_file(
    config: &CompilerConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<CompileSummary> {
    let source = fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read program {}", input.display()))?;
    debug!(input = %input.display(), bytes = source.len(), "read program");

    let program = compile_program(&source)
        .wrap_err_with(|| format!("failed to compile {}", input.display()))?;

    let output = output.map_or_else(
        || default_output_path(input, &config.output_extension),
        Path::to_path_buf,
    );
    fs::write(&output, program.to_string())
        .wrap_err_with(|| format!("failed to write compiled program {}", output.display()))?;

    let summary = CompileSummary {
        output,
        states: program.states().len(),
        transitions: program.transitions().len(),
    };
    info!(
        output = %summary.output.display(),
        states = summary.states,
        transitions = summary.transitions,
        "wrote compiled program"
    );
    Ok(summary)
}
