//! Demo command implementation.
//!
//! Lexes a small built-in C program, handy for a first look at the output.

use crate::commands::common::{scan_and_print, Input, OutputArgs, ScanSettings};
use crate::config::Config;
use crate::error::Result;

/// Label the sample program is reported under.
pub const DEMO_LABEL: &str = "demo.c";

/// The built-in sample program.
pub const DEMO_SOURCE: &str = "int main() {
    // Comment
    int x = 10;
    float y = 20.5;
    printf(\"Hello, World!\");
    return 0;
}
";

/// Runs the demo command.
pub fn run_demo(output: OutputArgs, config: &Config) -> Result<()> {
    let settings = ScanSettings::resolve(&output, config)?;
    let input = Input {
        label: DEMO_LABEL.to_string(),
        source: DEMO_SOURCE.to_string(),
    };
    scan_and_print(vec![input], &settings)
}
