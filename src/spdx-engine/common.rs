use crate::{Color, Format};
use anyhow::{Context as _, Error};
use codespan_reporting::term::{self, termcolor};
use spdx_engine::{
    diag::{self, Diagnostic, Files},
    PathBuf,
};

#[derive(Copy, Clone)]
pub(crate) struct OutputContext {
    pub(crate) format: Format,
    /// Whether stderr supports colors, stdout is checked separately
    pub(crate) color: bool,
}

impl OutputContext {
    fn color_choice(self) -> termcolor::ColorChoice {
        if self.color {
            termcolor::ColorChoice::Auto
        } else {
            termcolor::ColorChoice::Never
        }
    }

    /// Writes diagnostics to stderr, either rendered or as JSON lines
    pub(crate) fn emit_diagnostics(self, files: &Files, diags: &[Diagnostic]) -> Result<(), Error> {
        match self.format {
            Format::Human => {
                let writer = termcolor::StandardStream::stderr(self.color_choice());
                let config = diag::codespan_config();
                let mut lock = writer.lock();

                for diag in diags {
                    term::emit(&mut lock, &config, files, diag)
                        .context("failed to render diagnostic")?;
                }
            }
            Format::Json => {
                for diag in diags {
                    eprintln!("{}", diag_to_json(files, diag));
                }
            }
        }

        Ok(())
    }
}

/// Resolves `--color auto` against stdout
pub(crate) fn stdout_color(color: Color) -> bool {
    match color {
        Color::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        Color::Always => true,
        Color::Never => false,
    }
}

fn diag_to_json(files: &Files, diag: &Diagnostic) -> serde_json::Value {
    use codespan_reporting::files::Files as _;

    let labels: Vec<_> = diag
        .labels
        .iter()
        .map(|label| {
            let line = files
                .line_index(label.file_id, label.range.start)
                .map_or(0, |li| li + 1);

            serde_json::json!({
                "message": label.message,
                "span": files.source(label.file_id).get(label.range.clone()).unwrap_or_default(),
                "line": line,
                "file": files.name(label.file_id).map(|n| n.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    serde_json::json!({
        "type": "diagnostic",
        "fields": {
            "severity": format!("{:?}", diag.severity).to_lowercase(),
            "message": diag.message,
            "code": diag.code,
            "labels": labels,
            "notes": diag.notes,
        }
    })
}

/// Reads a file that is expected to be utf-8
pub(crate) fn read_file(path: &PathBuf) -> Result<String, Error> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
}
