//! Enterprise suggestion notifications.
//!
//! When a prospect asks for an integration proposal the classification
//! is handed to a [`SuggestionNotifier`].  Delivery is fire-and-forget:
//! the HTTP layer spawns the notification and answers immediately, and
//! failures are only logged.

use crate::models::{EnterpriseClassification, EnterpriseUsageInput};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A request for a tailored enterprise proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub profile: EnterpriseUsageInput,
    pub classification: EnterpriseClassification,
    /// Where the proposal should be sent, if the prospect left an address.
    pub contact: Option<String>,
}

/// Hands suggestion requests to whoever prepares proposals.
///
/// Notifiers must be thread-safe (`Send + Sync`) because the server
/// invokes them from spawned tasks.
pub trait SuggestionNotifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;
    fn notify(&self, request: &SuggestionRequest) -> Result<()>;
}

/// Records suggestion requests in the application log.
pub struct LogNotifier;

impl SuggestionNotifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    fn notify(&self, request: &SuggestionRequest) -> Result<()> {
        info!(
            plan = %request.classification.plan_name,
            cost_range = %request.classification.cost_range,
            daily_emails = %request.profile.daily_emails,
            auto_push = request.profile.auto_push,
            history_storage = request.profile.history_storage,
            contact = request.contact.as_deref().unwrap_or("-"),
            "enterprise suggestion requested"
        );
        Ok(())
    }
}

/// Drops every request.  Used when notifications are disabled.
pub struct DisabledNotifier;

impl SuggestionNotifier for DisabledNotifier {
    fn name(&self) -> &str {
        "disabled"
    }

    fn notify(&self, _request: &SuggestionRequest) -> Result<()> {
        Ok(())
    }
}
