use console::style;
use serde::Serialize;
use std::fmt::Display;

/// Status output for the CLI. Messages go to stderr so stdout stays
/// clean for the section mapping; `--json` switches the messages to
/// structured lines for scripting.
pub struct OutputWriter {
    json: bool,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: impl Display) {
        if self.json {
            self.status_line("success", message);
        } else {
            eprintln!("{} {}", style("✓").green().bold(), message);
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.json {
            self.status_line("info", message);
        } else {
            eprintln!("{} {}", style("ℹ").blue().bold(), message);
        }
    }

    pub fn warning(&self, message: impl Display) {
        if self.json {
            self.status_line("warning", message);
        } else {
            eprintln!("{} {}", style("⚠").yellow().bold(), message);
        }
    }

    pub fn section(&self, title: impl Display) {
        if !self.json {
            eprintln!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: impl Display) {
        if !self.json {
            eprintln!("  {} {}", style(format!("{key}:")).dim(), value);
        }
    }

    /// Structured result payload, printed to stdout in both modes.
    pub fn result<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    fn status_line(&self, status: &str, message: impl Display) {
        eprintln!(
            "{}",
            serde_json::json!({
                "status": status,
                "message": message.to_string(),
            })
        );
    }
}
