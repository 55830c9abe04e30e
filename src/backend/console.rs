use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::collaborators::access_control_trait::AccessControl;
use crate::domain::collaborators::action_dispatcher_trait::{ActionDispatcher, BookingPrefill};
use crate::domain::collaborators::notifier_trait::{Notification, Notifier, Severity};
use crate::domain::utils::id::BookingId;
use crate::error::{Error, Result};

/// Dispatcher for headless runs: every action is written to the log, the
/// create form prefill as JSON.
#[derive(Debug, Clone, Default)]
pub struct LogDispatcher;

#[async_trait]
impl ActionDispatcher for LogDispatcher {
    async fn open_record_for_view(&self, booking_id: BookingId) -> Result<()> {
        log::info!("Open booking {} (read-only).", booking_id);
        Ok(())
    }

    async fn open_record_for_edit(&self, booking_id: BookingId) -> Result<()> {
        log::info!("Open booking {} (editable).", booking_id);
        Ok(())
    }

    async fn open_record_create_form(&self, prefill: BookingPrefill) -> Result<()> {
        let json = serde_json::to_string_pretty(&prefill).map_err(|e| Error::DispatchError(format!("Create form prefill not serializable: {}", e)))?;
        log::info!("Open booking create form with {} room line(s):\n{}", prefill.room_lines.len(), json);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn show(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => log::info!("[{}] {}", notification.title, notification.message),
            Severity::Warning => log::warn!("[{}] {}", notification.title, notification.message),
            Severity::Danger => log::error!("[{}] {}", notification.title, notification.message),
        }
    }
}

/// Grants a fixed set of capabilities.
#[derive(Debug, Clone, Default)]
pub struct StaticAccessControl {
    capabilities: HashSet<String>,
}

impl StaticAccessControl {
    pub fn new<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticAccessControl { capabilities: capabilities.into_iter().map(Into::into).collect() }
    }
}

#[async_trait]
impl AccessControl for StaticAccessControl {
    async fn user_has_capability(&self, name: &str) -> Result<bool> {
        Ok(self.capabilities.contains(name))
    }
}
