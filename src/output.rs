//! Output formatting for human and JSON modes
//!
//! Command results are plain data that render either as human-readable text
//! or as machine-parseable JSON.

use serde::Serialize;

use crate::core::checksum::Bsn;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Verdict for one candidate
#[derive(Debug, Serialize)]
pub struct Verdict {
    /// The candidate as given
    pub candidate: String,
    /// Whether it passed the eleven-test
    pub valid: bool,
    /// Why it was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verdict {
    /// Check `candidate` and record the outcome
    #[must_use]
    pub fn check(candidate: &str) -> Self {
        match Bsn::parse(candidate) {
            Ok(_) => Self {
                candidate: candidate.to_string(),
                valid: true,
                reason: None,
            },
            Err(e) => Self {
                candidate: candidate.to_string(),
                valid: false,
                reason: Some(e.to_string()),
            },
        }
    }
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every candidate was valid
    pub all_valid: bool,
    /// One verdict per candidate, in input order
    pub verdicts: Vec<Verdict>,
}

impl ValidateResult {
    /// Build from verdicts
    #[must_use]
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self {
            all_valid: verdicts.iter().all(|v| v.valid),
            verdicts,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.verdicts.is_empty() {
            println!("No candidates given.");
            return;
        }

        for v in &self.verdicts {
            match &v.reason {
                None => println!("  [VALID]   {}", v.candidate),
                Some(reason) => println!("  [INVALID] {} ({reason})", v.candidate),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Generated identifiers
    pub identifiers: Vec<String>,
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for id in &self.identifiers {
                    println!("{id}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
