//! Output rendering for CLI commands
//!
//! Every command produces a payload that is both `Serialize` (for
//! `--output json`) and `Render` (for the default text view). The
//! `OutputWriter` picks the representation once, so command handlers
//! never branch on the format themselves.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Renders a payload as human-readable text.
pub trait Render {
    /// Write the text representation to `w`.
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

/// Writes command results to stdout in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a writer for the given output format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render `payload` to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Text => payload.render_text(&mut handle)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, payload)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
