//! Structured diagnostics channel.
//!
//! The engine is a pure transformation, so it never writes to a logger as
//! its primary observability surface. Instead every recoverable anomaly is
//! recorded as a [`Diagnostic`] and returned alongside the rendered output;
//! each record is also mirrored to the `log` facade for callers that wire
//! one up.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// One recoverable anomaly encountered during rendering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// The offending block, when the anomaly is attributable to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Collecting sink threaded through the pipeline.
#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>, block_id: Option<&str>) {
        let message = message.into();
        match block_id {
            Some(id) => log::warn!("[block {id}] {message}"),
            None => log::warn!("{message}"),
        }
        self.records.push(Diagnostic {
            level: DiagnosticLevel::Warning,
            message,
            block_id: block_id.map(str::to_string),
        });
    }

    pub fn error(&mut self, message: impl Into<String>, block_id: Option<&str>) {
        let message = message.into();
        match block_id {
            Some(id) => log::error!("[block {id}] {message}"),
            None => log::error!("{message}"),
        }
        self.records.push(Diagnostic {
            level: DiagnosticLevel::Error,
            message,
            block_id: block_id.map(str::to_string),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Diagnostic> {
        self.records
    }
}
