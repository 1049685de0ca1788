//! Operation journal: one line per init/save/load/clear/export.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Colour the operation column by kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "clear" => Colour::Red,
        "load" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl JournalEntry {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(4, " | ");
        Some(Self {
            date: parts.next()?.to_string(),
            operation: parts.next()?.to_string(),
            target: parts.next()?.to_string(),
            message: parts.next().unwrap_or("").to_string(),
        })
    }
}

/// Append-only text journal. A disabled journal (test mode) drops writes.
#[derive(Debug, Clone)]
pub struct Journal {
    path: Option<PathBuf>,
}

impl Journal {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let now = Local::now().to_rfc3339();
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(
            file,
            "{} | {} | {} | {}",
            now,
            operation,
            target,
            message.replace('\n', " ")
        )?;
        Ok(())
    }

    /// Like `record`, but a failure only prints a warning.
    pub fn note(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.record(operation, target, message) {
            warning(format!("Failed to write journal: {}", e));
        }
    }

    pub fn entries(&self) -> AppResult<Vec<JournalEntry>> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        Ok(content.lines().filter_map(JournalEntry::parse).collect())
    }

    pub fn print(&self) -> AppResult<()> {
        let entries = self.entries()?;
        if entries.is_empty() {
            println!("Journal is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let op_w = entries.iter().map(|e| e.operation.len()).max().unwrap_or(0);

        println!("📜 Journal:\n");
        for (i, e) in entries.iter().enumerate() {
            let op = format!("{:<op_w$}", e.operation, op_w = op_w);
            println!(
                "{:>4}: {:<date_w$} | {} {} => {}",
                i + 1,
                e.date,
                color_for_operation(&e.operation).paint(op),
                e.target,
                e.message,
                date_w = date_w
            );
        }
        Ok(())
    }
}
