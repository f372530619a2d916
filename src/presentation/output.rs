//! Output Rendering
//!
//! Text and JSON rendering for check results and config warnings. Build
//! progress is rendered by the event sinks in `infrastructure::events`.

use std::path::Path;

use crossterm::style::Stylize;

use crate::application::{CheckResult, CheckStatus};
use crate::config::ConfigWarning;
use crate::ui::TerminalCapabilities;

/// Render config warnings, one block per unknown key
pub fn render_config_warnings(path: &Path, warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "⚠ Unknown config key '{}' in {}:{}\n",
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "⚠ Unknown config key '{}' in {}\n",
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Render a check result for humans
pub fn render_check_text(result: &CheckResult, caps: TerminalCapabilities) -> String {
    let (ok, bad) = if caps.supports_unicode {
        ("✓", "✗")
    } else {
        ("[OK]", "[FAIL]")
    };
    let paint = |icon: &str, good: bool| {
        if !caps.supports_color {
            icon.to_string()
        } else if good {
            icon.green().to_string()
        } else {
            icon.red().to_string()
        }
    };

    let mut out = String::new();
    for item in &result.items {
        let line = match &item.status {
            CheckStatus::UpToDate => format!(
                "{} {} up to date ({})\n",
                paint(ok, true),
                item.identifier,
                item.destination.display()
            ),
            CheckStatus::Stale { diff } => format!(
                "{} {} is stale ({})\n{}",
                paint(bad, false),
                item.identifier,
                item.destination.display(),
                diff
            ),
            CheckStatus::NotGenerated => format!(
                "{} {} not generated ({})\n",
                paint(bad, false),
                item.identifier,
                item.destination.display()
            ),
            CheckStatus::Missing => format!(
                "{} missing input file: {}\n",
                paint(bad, false),
                item.source.display()
            ),
            CheckStatus::Failed { error } => format!(
                "{} {}: {}\n",
                paint(bad, false),
                item.identifier,
                error
            ),
        };
        out.push_str(&line);
    }

    out.push_str(&format!(
        "{} of {} headers up to date\n",
        result.up_to_date_count(),
        result.items.len()
    ));
    out
}

/// Render a check result as one JSON document
pub fn render_check_json(result: &CheckResult) -> serde_json::Value {
    let items: Vec<serde_json::Value> = result
        .items
        .iter()
        .map(|item| {
            let (status, detail) = match &item.status {
                CheckStatus::UpToDate => ("up_to_date", None),
                CheckStatus::Stale { diff } => ("stale", Some(diff.clone())),
                CheckStatus::NotGenerated => ("not_generated", None),
                CheckStatus::Missing => ("missing", None),
                CheckStatus::Failed { error } => ("error", Some(error.clone())),
            };
            serde_json::json!({
                "identifier": item.identifier,
                "source": item.source.display().to_string(),
                "destination": item.destination.display().to_string(),
                "status": status,
                "detail": detail,
            })
        })
        .collect();

    serde_json::json!({
        "event": "check",
        "success": result.is_success(),
        "up_to_date": result.up_to_date_count(),
        "total": result.items.len(),
        "items": items,
    })
}

/// Final NDJSON event for a command that failed as a whole
pub fn render_error_json(command: &str, error: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "success": false,
        "error": error,
    })
}

/// Line-literal output as one JSON document
pub fn render_lines_json(source: &Path, variable: &str, statements: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "lines",
        "command": "lines",
        "source": source.display().to_string(),
        "variable": variable,
        "statements": statements,
    })
}
