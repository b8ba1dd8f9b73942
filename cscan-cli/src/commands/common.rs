//! Common types and utilities for cscan commands.
//!
//! Both subcommands end up here: the inputs are scanned in parallel, then
//! printed in argument order as text or JSON.

use std::io::{self, Write};

use cscan_lex::{tokenize_with_diagnostics, LexOutput, Token};
use cscan_util::{Diagnostic, DiagnosticCode, SourceFile};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CscanError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Token` display line per token
    Text,
    /// One JSON document per input
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Fail if any diagnostic remains.
    pub strict: bool,
    /// Print diagnostics to stderr.
    pub show_diagnostics: bool,
    /// Diagnostic codes that are dropped.
    pub allow: Vec<DiagnosticCode>,
}

/// Flags shared by the subcommands that scan something.
#[derive(Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format from the command line.
    pub format: Option<String>,
    /// `--strict`
    pub strict: bool,
    /// `--no-diagnostics`
    pub no_diagnostics: bool,
    /// `--allow` codes from the command line.
    pub allow: Vec<String>,
}

impl ScanSettings {
    /// Merges command-line flags over the configuration.
    ///
    /// Flags win where both are given. Allow lists are combined.
    pub fn resolve(args: &OutputArgs, config: &Config) -> Result<Self> {
        let format = match args.format {
            Some(ref name) => OutputFormat::parse(name).ok_or_else(|| {
                CscanError::Config(format!("Unknown output format: {}", name))
            })?,
            None => OutputFormat::parse(&config.output.format).ok_or_else(|| {
                CscanError::Config(format!(
                    "Invalid format in configuration: {}",
                    config.output.format
                ))
            })?,
        };

        let allow = config
            .lex
            .allow
            .iter()
            .chain(&args.allow)
            .map(|code| DiagnosticCode::parse(code))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CscanError::Config(e.to_string()))?;

        Ok(Self {
            format,
            strict: args.strict || config.lex.strict,
            show_diagnostics: !args.no_diagnostics && config.output.show_diagnostics,
            allow,
        })
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// A named piece of source text.
#[derive(Debug, Clone)]
pub struct Input {
    /// Path, `<stdin>` or the demo name
    pub label: String,
    /// Full text
    pub source: String,
}

/// An input together with its scan result.
#[derive(Debug, Clone)]
pub struct Scanned {
    /// The input that was scanned
    pub input: Input,
    /// Tokens and the diagnostics that survived the allow list
    pub output: LexOutput,
}

/// Scans every input, one scanner per input, keeping argument order.
pub fn scan_all(inputs: Vec<Input>, allow: &[DiagnosticCode]) -> Vec<Scanned> {
    inputs
        .into_par_iter()
        .map(|input| {
            let mut output = tokenize_with_diagnostics(&input.source);
            output.allow(allow);
            tracing::debug!(
                file = %input.label,
                tokens = output.tokens.len(),
                diagnostics = output.diagnostics.len(),
                "scanned input"
            );
            Scanned { input, output }
        })
        .collect()
}

/// Scans, prints, and enforces strict mode.
pub fn scan_and_print(inputs: Vec<Input>, settings: &ScanSettings) -> Result<()> {
    let scanned = scan_all(inputs, &settings.allow);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match settings.format {
        OutputFormat::Text => write_text(&mut out, &scanned)?,
        OutputFormat::Json => write_json(&mut out, &scanned)?,
    }
    out.flush()?;

    if settings.show_diagnostics {
        let stderr = io::stderr();
        write_diagnostics(&mut stderr.lock(), &scanned)?;
    }

    if settings.strict {
        for item in scanned.iter().filter(|item| item.output.has_warnings()) {
            tracing::debug!(file = %item.input.label, "strict mode rejected input");
            item.output.clone().into_strict()?;
        }
    }

    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Writes one token per line, with a header per input when there are several.
pub fn write_text(out: &mut impl Write, scanned: &[Scanned]) -> Result<()> {
    let headers = scanned.len() > 1;
    for (index, item) in scanned.iter().enumerate() {
        if headers {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", item.input.label)?;
        }
        for token in &item.output.tokens {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    tokens: &'a [Token],
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    level: &'static str,
    code: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        Self {
            level: diag.level.as_str(),
            code: diag.code.map(|code| code.as_str()),
            message: &diag.message,
            line: diag.span.line,
            column: diag.span.column,
        }
    }
}

/// Writes one JSON document per line, one line per input.
pub fn write_json(out: &mut impl Write, scanned: &[Scanned]) -> Result<()> {
    for item in scanned {
        let report = JsonReport {
            file: &item.input.label,
            tokens: &item.output.tokens,
            diagnostics: item.output.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Renders every diagnostic with its source line.
pub fn write_diagnostics(out: &mut impl Write, scanned: &[Scanned]) -> Result<()> {
    for item in scanned.iter().filter(|item| item.output.has_warnings()) {
        let file = SourceFile::new(item.input.label.as_str(), item.input.source.as_str());
        for diag in &item.output.diagnostics {
            write!(out, "{}", diag.render(&file))?;
        }
    }
    Ok(())
}
