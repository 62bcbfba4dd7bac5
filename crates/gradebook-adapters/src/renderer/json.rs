//! JSON report renderer.

use serde_json::json;

use gradebook_core::{
    application::{ApplicationError, ports::ReportRenderer},
    domain::{RosterReport, TopPerformer},
    error::GradebookResult,
};

/// Machine-readable renderer. Absent values serialize as `null`.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one document per line.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn encode(&self, value: &serde_json::Value) -> GradebookResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_report(&self, report: &RosterReport) -> GradebookResult<String> {
        let value = serde_json::to_value(report).map_err(|e| ApplicationError::RenderingFailed {
            reason: e.to_string(),
        })?;
        self.encode(&value)
    }

    fn render_top_performer(&self, top: Option<&TopPerformer>) -> GradebookResult<String> {
        self.encode(&json!({ "top_performer": top }))
    }
}
