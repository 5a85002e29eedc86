//! Data models for the Freight Pricing engine.
//!
//! The `models` module defines the serialisable inputs and results of
//! the three calculators: the personal (self-serve) cost estimator, the
//! enterprise plan classifier and the platform quote.  Enumerated
//! inputs are closed Rust enums keyed by canonical wire strings; any
//! string outside the closed set is rejected with a [`PricingError`]
//! rather than silently defaulted.
//!
//! Raw request shapes (`*Request`) accept any JSON number for counts
//! and clamp them into the calculator's domain on conversion.

use crate::error::PricingError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a personal user sends mail through the parser.
///
/// Variants are ordered by rank (`Low < Medium < High`); a higher rank
/// never consumes fewer credits for the same volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UsageFrequency {
    /// Monthly usage.
    Low,
    /// Weekly usage.
    Medium,
    /// Daily usage.
    High,
}

impl UsageFrequency {
    /// All frequencies in ascending rank.
    pub const ALL: [UsageFrequency; 3] = [Self::Low, Self::Medium, Self::High];

    /// Canonical wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Credit coefficient expressed in whole percent (115 = 1.15).
    pub fn coefficient_percent(&self) -> u64 {
        match self {
            Self::High => 115,
            Self::Medium => 105,
            Self::Low => 100,
        }
    }

    /// Credit coefficient as a float, for display.
    pub fn coefficient(&self) -> f64 {
        self.coefficient_percent() as f64 / 100.0
    }
}

impl FromStr for UsageFrequency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(PricingError::UnknownFrequency(other.to_string())),
        }
    }
}

impl TryFrom<String> for UsageFrequency {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for UsageFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personal usage profile entered in the self-serve calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalUsageInput {
    /// Freight-rate emails received per month.  Always at least 1.
    pub monthly_emails: u64,
    /// Average rate lines per email.  Always at least 1.
    pub rates_per_email: u64,
    /// Usage frequency, selecting the credit coefficient.
    pub usage_frequency: UsageFrequency,
}

/// Deserialise a count from any JSON number.
///
/// Negative values become 0, fractions are truncated and values beyond
/// `u64::MAX` saturate.  Range minimums are applied by the caller.
pub fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            // `as` truncates, saturates at both ends and maps NaN to 0.
            Ok(v as u64)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

/// Personal usage profile as received over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalUsageRequest {
    #[serde(deserialize_with = "deserialize_count")]
    pub monthly_emails: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub rates_per_email: u64,
    pub usage_frequency: UsageFrequency,
}

impl From<PersonalUsageRequest> for PersonalUsageInput {
    fn from(req: PersonalUsageRequest) -> Self {
        PersonalUsageInput {
            monthly_emails: req.monthly_emails.max(1),
            rates_per_email: req.rates_per_email.max(1),
            usage_frequency: req.usage_frequency,
        }
    }
}

/// Derived personal cost estimate.  Recomputed from scratch whenever
/// any input changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalUsageResult {
    /// `monthly_emails × rates_per_email`.
    pub total_rates: u64,
    /// Coefficient looked up from the usage frequency.
    pub credit_coefficient: f64,
    /// Credits consumed, rounded half-up to an integer.
    pub total_credits: u64,
    /// Monthly cost in currency units (1 credit = 0.01).
    pub total_cost: f64,
}

/// Discretised daily email volume used by the enterprise evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DailyEmailsBucket {
    #[serde(rename = "<10")]
    UnderTen,
    #[serde(rename = "10-50")]
    TenToFifty,
    #[serde(rename = "50-200")]
    FiftyToTwoHundred,
    #[serde(rename = ">200")]
    OverTwoHundred,
}

impl DailyEmailsBucket {
    pub const ALL: [DailyEmailsBucket; 4] = [
        Self::UnderTen,
        Self::TenToFifty,
        Self::FiftyToTwoHundred,
        Self::OverTwoHundred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderTen => "<10",
            Self::TenToFifty => "10-50",
            Self::FiftyToTwoHundred => "50-200",
            Self::OverTwoHundred => ">200",
        }
    }
}

impl FromStr for DailyEmailsBucket {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<10" => Ok(Self::UnderTen),
            "10-50" => Ok(Self::TenToFifty),
            "50-200" => Ok(Self::FiftyToTwoHundred),
            ">200" => Ok(Self::OverTwoHundred),
            other => Err(PricingError::UnknownBucket(other.to_string())),
        }
    }
}

impl TryFrom<String> for DailyEmailsBucket {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DailyEmailsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enterprise integration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseUsageInput {
    pub daily_emails: DailyEmailsBucket,
    /// Whether parse results are pushed into internal systems.
    pub auto_push: bool,
    /// Whether historical results are retained and queryable.
    pub history_storage: bool,
}

/// Named enterprise plans, in ascending order of scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnterprisePlan {
    Standard,
    Enhanced,
    Advanced,
    Large,
}

impl EnterprisePlan {
    /// Advisory yearly investment range.  Fixed per plan.
    pub fn cost_range(&self) -> &'static str {
        match self {
            Self::Standard => "¥3万-¥8万/年",
            Self::Enhanced => "¥5万-¥10万/年",
            Self::Advanced => "¥8万-¥15万/年",
            Self::Large => "¥15万-¥30万/年",
        }
    }
}

impl fmt::Display for EnterprisePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "Standard",
            Self::Enhanced => "Enhanced",
            Self::Advanced => "Advanced",
            Self::Large => "Large",
        };
        f.write_str(name)
    }
}

/// Result of classifying an [`EnterpriseUsageInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseClassification {
    pub plan_name: EnterprisePlan,
    pub cost_range: String,
}

impl From<EnterprisePlan> for EnterpriseClassification {
    fn from(plan: EnterprisePlan) -> Self {
        EnterpriseClassification {
            plan_name: plan,
            cost_range: plan.cost_range().to_string(),
        }
    }
}

/// AI model tier selectable on the platform price page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ModelType {
    #[default]
    Standard,
    Advanced,
    Enterprise,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Advanced => "advanced",
            Self::Enterprise => "enterprise",
        }
    }

    /// Multiplier applied to the quote subtotal.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Advanced => 1.5,
            Self::Enterprise => 2.0,
        }
    }
}

impl FromStr for ModelType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "advanced" => Ok(Self::Advanced),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(PricingError::UnknownModelType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ModelType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Usage profile for the platform quote, already clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformUsageInput {
    /// Emails per month, in `[0, 1000]`.
    pub monthly_emails: u32,
    /// Distinct email layouts to be trained, in `[1, 100]`.
    pub email_types: u32,
    /// PDF pages per month, in `[0, 10000]`.
    pub pdf_pages: u32,
    /// Images per month, in `[0, 10000]`.
    pub images: u32,
    pub model_type: ModelType,
}

/// Platform usage profile as received over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUsageRequest {
    #[serde(deserialize_with = "deserialize_count")]
    pub monthly_emails: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub email_types: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub pdf_pages: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub images: u64,
    #[serde(default)]
    pub model_type: ModelType,
}

/// Line-item breakdown of a platform quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformQuote {
    pub email_fee: f64,
    pub email_type_fee: f64,
    pub pdf_fee: f64,
    pub image_fee: f64,
    pub subtotal: f64,
    pub multiplier: f64,
    /// `max(subtotal × multiplier, 0)`.
    pub total: f64,
}

/// One edition in the platform plan catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    /// Billing period suffix, absent for free and custom editions.
    pub period: Option<String>,
    pub features: Vec<String>,
    pub button: String,
    pub highlight: bool,
}
