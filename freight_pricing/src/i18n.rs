//! Localised display labels.
//!
//! Labels are presentation only.  Calculators always key on the enum
//! variants, never on these strings.

use crate::error::PricingError;
use crate::models::{DailyEmailsBucket, EnterprisePlan, ModelType, UsageFrequency};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl FromStr for Language {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(PricingError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Types with a human-readable label per language.
pub trait Localized {
    fn label(&self, lang: Language) -> &'static str;
}

impl Localized for UsageFrequency {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::High, Language::Zh) => "高频（每天）",
            (Self::High, Language::En) => "High Frequency (Daily)",
            (Self::Medium, Language::Zh) => "中频（每周）",
            (Self::Medium, Language::En) => "Medium Frequency (Weekly)",
            (Self::Low, Language::Zh) => "低频（每月）",
            (Self::Low, Language::En) => "Low Frequency (Monthly)",
        }
    }
}

impl Localized for DailyEmailsBucket {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::UnderTen, Language::Zh) => "10封以内",
            (Self::UnderTen, Language::En) => "Less than 10",
            (Self::TenToFifty, Language::Zh) => "10-50封",
            (Self::TenToFifty, Language::En) => "10-50",
            (Self::FiftyToTwoHundred, Language::Zh) => "50-200封",
            (Self::FiftyToTwoHundred, Language::En) => "50-200",
            (Self::OverTwoHundred, Language::Zh) => "200封以上",
            (Self::OverTwoHundred, Language::En) => "More than 200",
        }
    }
}

impl Localized for EnterprisePlan {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Standard, Language::Zh) => "标准企业方案",
            (Self::Standard, Language::En) => "Standard Enterprise Plan",
            (Self::Enhanced, Language::Zh) => "增强企业方案",
            (Self::Enhanced, Language::En) => "Enhanced Enterprise Plan",
            (Self::Advanced, Language::Zh) => "高级企业方案",
            (Self::Advanced, Language::En) => "Advanced Enterprise Plan",
            (Self::Large, Language::Zh) => "大型企业方案",
            (Self::Large, Language::En) => "Large Enterprise Plan",
        }
    }
}

impl Localized for ModelType {
    fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Standard, Language::Zh) => "标准模型",
            (Self::Standard, Language::En) => "Standard Model",
            (Self::Advanced, Language::Zh) => "进阶模型",
            (Self::Advanced, Language::En) => "Advanced Model",
            (Self::Enterprise, Language::Zh) => "企业模型",
            (Self::Enterprise, Language::En) => "Enterprise Model",
        }
    }
}
