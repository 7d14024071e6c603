//! JSON output for `--json` runs
//!
//! Each command writes NDJSON events (one JSON object per line) to stdout.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::{
    DiffFailure, DiffReport, EntryDiff, InstallResult, InstallStage, PlannedFile,
};
use crate::domain::services::TargetCollision;

/// Final event of `install`
#[derive(Debug, Serialize)]
pub struct InstallEvent<'a> {
    pub event: &'static str,
    pub dry_run: bool,
    pub stage: InstallStage,
    pub written: bool,
    pub closure: &'a [String],
    pub files: &'a [PlannedFile],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<StylesheetSummary<'a>>,
    pub collisions: &'a [TargetCollision],
    pub rejected: Vec<String>,
    pub package_dependencies: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct StylesheetSummary<'a> {
    pub path: &'a Path,
    pub created: bool,
    pub changed: bool,
}

impl<'a> InstallEvent<'a> {
    pub fn new(result: &'a InstallResult, dry_run: bool) -> Self {
        Self {
            event: "install",
            dry_run,
            stage: result.stage,
            written: result.written,
            closure: &result.closure,
            files: &result.files,
            stylesheet: result.stylesheet.as_ref().map(|s| StylesheetSummary {
                path: &s.path,
                created: s.original.is_none(),
                changed: s.is_changed(),
            }),
            collisions: &result.collisions,
            rejected: result.rejected.iter().map(|e| e.to_string()).collect(),
            package_dependencies: &result.package_dependencies,
        }
    }
}

/// Final event of `diff`
#[derive(Debug, Serialize)]
pub struct DiffEvent<'a> {
    pub event: &'static str,
    pub changed: bool,
    pub entries: &'a [EntryDiff],
    pub failures: &'a [DiffFailure],
    pub collisions: &'a [TargetCollision],
    pub rejected: Vec<String>,
}

impl<'a> DiffEvent<'a> {
    pub fn new(report: &'a DiffReport) -> Self {
        Self {
            event: "diff",
            changed: report.has_changes(),
            entries: &report.entries,
            failures: &report.failures,
            collisions: &report.collisions,
            rejected: report.rejected.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Emitted instead of a result when a command fails
#[derive(Debug, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: Option<&str>) -> Self {
        self.subject = subject.map(str::to_string);
        self
    }
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}
