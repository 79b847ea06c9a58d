//! Tabular export of scored records.
//!
//! - `csv`: header row = [`ResultRecord::COLUMNS`], RFC 4180 quoting
//! - `json`: pretty array of objects with the same keys

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::engine::ResultRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unsupported export format: {other}")),
        }
    }
}

impl ExportFormat {
    /// From the file extension; anything unknown falls back to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub fn to_csv(records: &[ResultRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, ResultRecord::COLUMNS.iter().copied());
    for r in records {
        let cells = r.cells();
        push_row(&mut out, cells.iter().map(String::as_str));
    }
    out
}

pub fn to_json(records: &[ResultRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serializing records")
}

/// Write `records` to `path`, creating parent directories as needed.
pub fn write_records(
    path: &Path,
    records: &[ResultRecord],
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = format.unwrap_or_else(|| ExportFormat::from_path(path));
    let body = match format {
        ExportFormat::Csv => to_csv(records),
        ExportFormat::Json => to_json(records)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(rows = records.len(), path = %path.display(), ?format, "results written");
    Ok(())
}

fn push_row<'a, I: Iterator<Item = &'a str>>(out: &mut String, cells: I) {
    for (i, c) in cells.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if c.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&c.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(c);
        }
    }
    out.push_str("\r\n");
}
