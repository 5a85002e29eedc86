//! Enterprise tier classifier.
//!
//! Maps a coarse enterprise profile onto one of four plans using a
//! priority-ordered decision table.  Rules are evaluated top to bottom
//! and the first match wins; anything unmatched is `Standard`.

use crate::models::{DailyEmailsBucket, EnterpriseClassification, EnterprisePlan, EnterpriseUsageInput};
use tracing::trace;

/// Classify an enterprise profile.  Pure and total over its domain.
pub fn classify(
    daily_emails: DailyEmailsBucket,
    auto_push: bool,
    history_storage: bool,
) -> EnterpriseClassification {
    let plan = match daily_emails {
        DailyEmailsBucket::OverTwoHundred => EnterprisePlan::Large,
        DailyEmailsBucket::FiftyToTwoHundred => EnterprisePlan::Advanced,
        // Both integrations are required; one alone stays Standard.
        DailyEmailsBucket::TenToFifty if auto_push && history_storage => EnterprisePlan::Enhanced,
        _ => EnterprisePlan::Standard,
    };
    trace!(bucket = %daily_emails, auto_push, history_storage, plan = %plan, "enterprise classification");
    plan.into()
}

impl EnterpriseUsageInput {
    pub fn classify(&self) -> EnterpriseClassification {
        classify(self.daily_emails, self.auto_push, self.history_storage)
    }
}

impl Default for EnterpriseUsageInput {
    fn default() -> Self {
        EnterpriseUsageInput {
            daily_emails: DailyEmailsBucket::TenToFifty,
            auto_push: true,
            history_storage: false,
        }
    }
}
