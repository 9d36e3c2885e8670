//! Report channel for operational outcomes that are not returned to callers.
//!
//! `Inventory::notify` never fails outward; whatever the notifier answers ends
//! up here instead, so tests (and operators) can still observe it.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use puffstore_core::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    Failed(StoreError),
}

/// Outcome of one `notify` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReport {
    pub recipient_id: String,
    pub outcome: NotificationOutcome,
    pub occurred_at: DateTime<Utc>,
}

impl NotificationReport {
    pub fn delivered(recipient_id: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            outcome: NotificationOutcome::Delivered,
            occurred_at: Utc::now(),
        }
    }

    pub fn failed(recipient_id: impl Into<String>, error: StoreError) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            outcome: NotificationOutcome::Failed(error),
            occurred_at: Utc::now(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, NotificationOutcome::Delivered)
    }
}

/// Receives notification reports.
pub trait ReportSink: Send + Sync {
    fn report(&self, report: NotificationReport);
}

/// Default sink: turns reports into log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReportSink;

impl ReportSink for TracingReportSink {
    fn report(&self, report: NotificationReport) {
        match &report.outcome {
            NotificationOutcome::Delivered => {
                tracing::info!(recipient_id = %report.recipient_id, "message sent");
            }
            // An unreachable channel is expected now and then; anything else is a bug.
            NotificationOutcome::Failed(error) if error.is_collaborator_failure() => {
                tracing::warn!(recipient_id = %report.recipient_id, %error, "message not sent");
            }
            NotificationOutcome::Failed(error) => {
                tracing::error!(recipient_id = %report.recipient_id, %error, "message not sent");
            }
        }
    }
}

/// In-memory sink keeping every report, for assertions.
#[derive(Debug, Default)]
pub struct RecordingReportSink {
    reports: Mutex<Vec<NotificationReport>>,
}

impl RecordingReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far, oldest first.
    pub fn reports(&self) -> Vec<NotificationReport> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn failures(&self) -> Vec<NotificationReport> {
        self.reports()
            .into_iter()
            .filter(|r| !r.is_delivered())
            .collect()
    }
}

impl ReportSink for RecordingReportSink {
    fn report(&self, report: NotificationReport) {
        // A poisoned lock still holds valid reports; keep recording.
        let mut reports = match self.reports.lock() {
            Ok(reports) => reports,
            Err(poisoned) => poisoned.into_inner(),
        };
        reports.push(report);
    }
}
