//! Lex command implementation.
//!
//! Reads each input file (or stdin) and prints its tokens.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::commands::common::{scan_and_print, Input, OutputArgs, ScanSettings};
use crate::config::Config;
use crate::error::{CscanError, Result};

/// Label used for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Input files; empty or `-` means stdin.
    pub files: Vec<PathBuf>,
    /// Output flags.
    pub output: OutputArgs,
}

/// Runs the lex command.
pub fn run_lex(args: LexArgs, config: &Config) -> Result<()> {
    let settings = ScanSettings::resolve(&args.output, config)?;
    let inputs = read_inputs(&args.files)?;
    tracing::info!(inputs = inputs.len(), "lexing");
    scan_and_print(inputs, &settings)
}

/// Reads every input up front so scanning can run in parallel.
fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                read_stdin()
            } else {
                read_file(path)
            }
        })
        .collect()
}

fn read_file(path: &Path) -> Result<Input> {
    let source = std::fs::read_to_string(path).map_err(|source| CscanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        label: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<Input> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(Input {
        label: STDIN_LABEL.to_string(),
        source,
    })
}
