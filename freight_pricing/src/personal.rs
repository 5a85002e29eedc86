//! Tiered rate calculator for personal (self-serve) usage.
//!
//! Turns a monthly usage profile into the number of freight-rate lines
//! parsed, the credits consumed and the resulting monthly cost.  The
//! calculation is a pure function of its three inputs; callers are
//! expected to re-invoke it whenever any of them changes.
//!
//! Credits are computed in integer arithmetic from a whole-percent
//! coefficient and rounded half-up, so `.5` boundaries (e.g. 250 rates
//! at 1.15 = 287.5) always round towards the larger credit count.

use crate::models::{PersonalUsageInput, PersonalUsageResult, UsageFrequency};
use tracing::trace;

/// Credits per currency unit (1 credit = 0.01).
const CREDITS_PER_UNIT: u64 = 100;

/// Estimate the monthly consumption and cost of a personal profile.
///
/// Counts below 1 are clamped to 1.  The function never fails and
/// saturates instead of overflowing for absurdly large inputs.
pub fn estimate(
    monthly_emails: u64,
    rates_per_email: u64,
    usage_frequency: UsageFrequency,
) -> PersonalUsageResult {
    let monthly_emails = monthly_emails.max(1);
    let rates_per_email = rates_per_email.max(1);

    let total_rates = monthly_emails.saturating_mul(rates_per_email);
    let percent = usage_frequency.coefficient_percent();
    let total_credits = round_half_up_percent(total_rates, percent);
    let total_cost = total_credits as f64 / CREDITS_PER_UNIT as f64;

    trace!(
        monthly_emails,
        rates_per_email,
        frequency = %usage_frequency,
        total_credits,
        "personal estimate"
    );

    PersonalUsageResult {
        total_rates,
        credit_coefficient: usage_frequency.coefficient(),
        total_credits,
        total_cost,
    }
}

/// `round_half_up(value × percent / 100)` without going through floats.
fn round_half_up_percent(value: u64, percent: u64) -> u64 {
    let scaled = u128::from(value) * u128::from(percent) + 50;
    u64::try_from(scaled / 100).unwrap_or(u64::MAX)
}

/// Estimates for every frequency, in ascending rank.
pub fn frequency_comparison(
    monthly_emails: u64,
    rates_per_email: u64,
) -> Vec<(UsageFrequency, PersonalUsageResult)> {
    UsageFrequency::ALL
        .iter()
        .map(|&freq| (freq, estimate(monthly_emails, rates_per_email, freq)))
        .collect()
}

impl PersonalUsageResult {
    /// Cost rounded to two decimals for display.  The stored value
    /// keeps full precision.
    pub fn formatted_cost(&self) -> String {
        format!("{:.2}", self.total_cost)
    }
}

impl PersonalUsageInput {
    /// Build an input from raw signed counts, clamping anything below 1.
    pub fn from_raw(monthly_emails: i64, rates_per_email: i64, usage_frequency: UsageFrequency) -> Self {
        PersonalUsageInput {
            monthly_emails: clamp_count(monthly_emails),
            rates_per_email: clamp_count(rates_per_email),
            usage_frequency,
        }
    }

    /// Evaluate this profile.
    pub fn estimate(&self) -> PersonalUsageResult {
        estimate(self.monthly_emails, self.rates_per_email, self.usage_frequency)
    }

    /// Apply raw text typed into the monthly email field.
    ///
    /// Text that is not an integer ≥ 1 leaves the last valid value in
    /// place.  Returns `true` if the stored value changed.
    pub fn apply_monthly_emails(&mut self, raw: &str) -> bool {
        apply_count(&mut self.monthly_emails, raw)
    }

    /// Apply raw text typed into the rates-per-email field.  Same
    /// retention policy as [`Self::apply_monthly_emails`].
    pub fn apply_rates_per_email(&mut self, raw: &str) -> bool {
        apply_count(&mut self.rates_per_email, raw)
    }
}

impl Default for PersonalUsageInput {
    fn default() -> Self {
        PersonalUsageInput {
            monthly_emails: 5,
            rates_per_email: 50,
            usage_frequency: UsageFrequency::High,
        }
    }
}

fn clamp_count(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0).max(1)
}

fn apply_count(slot: &mut u64, raw: &str) -> bool {
    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => {
            let changed = *slot != value;
            *slot = value;
            changed
        }
        _ => {
            trace!(raw, kept = *slot, "ignoring invalid count");
            false
        }
    }
}
