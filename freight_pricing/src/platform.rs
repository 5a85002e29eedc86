//! Platform price quote and edition catalog.
//!
//! A quote is the sum of four line items scaled by the model tier:
//!
//! * emails: the first 20 are free, 21–200 cost 0.01 each, and beyond
//!   200 the fee is `90 + (n − 200) × 0.005`
//! * email types: 10 per type
//! * PDF pages: 0.1 per page
//! * images: 0.05 per image
//!
//! Line items are accumulated in thousandths of a currency unit so the
//! subtotal is exact; only the final multiplier is applied in floating
//! point.

use crate::i18n::Language;
use crate::models::{PlatformPlan, PlatformQuote, PlatformUsageInput, PlatformUsageRequest};

const FREE_EMAILS: u64 = 20;
const STANDARD_EMAIL_CEILING: u64 = 200;
/// Flat fee (in thousandths) charged once volume passes the ceiling.
const BULK_EMAIL_BASE_MILLI: u64 = 90_000;
const STANDARD_EMAIL_MILLI: u64 = 10;
const BULK_EMAIL_MILLI: u64 = 5;
const EMAIL_TYPE_MILLI: u64 = 10_000;
const PDF_PAGE_MILLI: u64 = 100;
const IMAGE_MILLI: u64 = 50;

pub const MAX_MONTHLY_EMAILS: u32 = 1_000;
pub const MAX_EMAIL_TYPES: u32 = 100;
pub const MAX_PDF_PAGES: u32 = 10_000;
pub const MAX_IMAGES: u32 = 10_000;

/// Price a platform usage profile.
pub fn quote(input: &PlatformUsageInput) -> PlatformQuote {
    let email_milli = email_fee_milli(u64::from(input.monthly_emails));
    let type_milli = u64::from(input.email_types) * EMAIL_TYPE_MILLI;
    let pdf_milli = u64::from(input.pdf_pages) * PDF_PAGE_MILLI;
    let image_milli = u64::from(input.images) * IMAGE_MILLI;
    let subtotal_milli = email_milli + type_milli + pdf_milli + image_milli;

    let multiplier = input.model_type.multiplier();
    let total = (to_units(subtotal_milli) * multiplier).max(0.0);

    tracing::trace!(
        monthly_emails = input.monthly_emails,
        model = input.model_type.as_str(),
        subtotal_milli,
        "platform quote"
    );

    PlatformQuote {
        email_fee: to_units(email_milli),
        email_type_fee: to_units(type_milli),
        pdf_fee: to_units(pdf_milli),
        image_fee: to_units(image_milli),
        subtotal: to_units(subtotal_milli),
        multiplier,
        total,
    }
}

fn email_fee_milli(emails: u64) -> u64 {
    if emails <= FREE_EMAILS {
        0
    } else if emails <= STANDARD_EMAIL_CEILING {
        (emails - FREE_EMAILS) * STANDARD_EMAIL_MILLI
    } else {
        BULK_EMAIL_BASE_MILLI + (emails - STANDARD_EMAIL_CEILING) * BULK_EMAIL_MILLI
    }
}

fn to_units(milli: u64) -> f64 {
    milli as f64 / 1000.0
}

impl PlatformQuote {
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

impl PlatformUsageInput {
    pub fn quote(&self) -> PlatformQuote {
        quote(self)
    }
}

impl Default for PlatformUsageInput {
    fn default() -> Self {
        PlatformUsageInput {
            monthly_emails: 200,
            email_types: 5,
            pdf_pages: 100,
            images: 50,
            model_type: Default::default(),
        }
    }
}

impl From<PlatformUsageRequest> for PlatformUsageInput {
    fn from(req: PlatformUsageRequest) -> Self {
        PlatformUsageInput {
            monthly_emails: clamp(req.monthly_emails, 0, MAX_MONTHLY_EMAILS),
            email_types: clamp(req.email_types, 1, MAX_EMAIL_TYPES),
            pdf_pages: clamp(req.pdf_pages, 0, MAX_PDF_PAGES),
            images: clamp(req.images, 0, MAX_IMAGES),
            model_type: req.model_type,
        }
    }
}

fn clamp(raw: u64, min: u32, max: u32) -> u32 {
    // The clamped value always fits in u32.
    raw.clamp(u64::from(min), u64::from(max)) as u32
}

/// The three platform editions, in display order.
pub fn plans(lang: Language) -> Vec<PlatformPlan> {
    let pick = |zh_text: &str, en_text: &str| localize(lang, zh_text, en_text);

    vec![
        PlatformPlan {
            id: "personal".to_string(),
            name: pick("个人版", "Personal"),
            price: pick("免费", "Free"),
            period: None,
            features: localize_all(lang, &[
                ("每日处理1000封邮件", "1,000 emails per day"),
                ("基础文本解析", "Basic text parsing"),
                ("标准AI模型", "Standard AI model"),
                ("每月100页PDF", "100 PDF pages per month"),
                ("50张图片", "50 images"),
            ]),
            button: pick("免费试用", "Try for free"),
            highlight: false,
        },
        PlatformPlan {
            id: "teams".to_string(),
            name: pick("Teams版", "Teams"),
            price: "¥99".to_string(),
            period: Some(pick("/月", "/month")),
            features: localize_all(lang, &[
                ("每日处理10000封邮件", "10,000 emails per day"),
                ("高级文本解析", "Advanced text parsing"),
                ("进阶AI模型", "Advanced AI model"),
                ("每月1000页PDF", "1,000 PDF pages per month"),
                ("500张图片", "500 images"),
                ("API访问权限", "API access"),
            ]),
            button: pick("立即购买", "Buy now"),
            highlight: true,
        },
        PlatformPlan {
            id: "enterprise".to_string(),
            name: pick("企业版", "Enterprise"),
            price: pick("定制", "Custom"),
            period: None,
            features: localize_all(lang, &[
                ("无限制邮件处理", "Unlimited email processing"),
                ("企业级安全", "Enterprise-grade security"),
                ("专属AI模型", "Dedicated AI model"),
                ("无限PDF处理", "Unlimited PDF processing"),
                ("无限图片处理", "Unlimited image processing"),
                ("专属技术支持", "Dedicated technical support"),
                ("定制化开发", "Custom development"),
            ]),
            button: pick("联系销售", "Contact sales"),
            highlight: false,
        },
    ]
}

fn localize(lang: Language, zh: &str, en: &str) -> String {
    match lang {
        Language::Zh => zh.to_string(),
        Language::En => en.to_string(),
    }
}

fn localize_all(lang: Language, items: &[(&str, &str)]) -> Vec<String> {
    items.iter().map(|(zh, en)| localize(lang, zh, en)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelType;

    fn input(emails: u32, types: u32, pdf: u32, images: u32, model: ModelType) -> PlatformUsageInput {
        PlatformUsageInput {
            monthly_emails: emails,
            email_types: types,
            pdf_pages: pdf,
            images,
            model_type: model,
        }
    }

    #[test]
    fn test_default_profile_quote() {
        let q = PlatformUsageInput::default().quote();
        assert_eq!(q.email_fee, 1.8);
        assert_eq!(q.email_type_fee, 50.0);
        assert_eq!(q.pdf_fee, 10.0);
        assert_eq!(q.image_fee, 2.5);
        assert_eq!(q.subtotal, 64.3);
        assert_eq!(q.formatted_total(), "64.30");
    }

    #[test]
    fn test_email_tiers() {
        assert_eq!(email_fee_milli(0), 0);
        assert_eq!(email_fee_milli(20), 0);
        assert_eq!(email_fee_milli(21), 10);
        assert_eq!(email_fee_milli(200), 1_800);
        assert_eq!(email_fee_milli(201), 90_005);
        assert_eq!(email_fee_milli(1_000), 94_000);
    }

    #[test]
    fn test_model_multiplier() {
        let standard = quote(&input(1_000, 1, 0, 0, ModelType::Standard));
        assert_eq!(standard.formatted_total(), "104.00");
        let advanced = quote(&input(1_000, 1, 0, 0, ModelType::Advanced));
        assert_eq!(advanced.multiplier, 1.5);
        assert_eq!(advanced.formatted_total(), "156.00");
        let enterprise = quote(&input(1_000, 1, 0, 0, ModelType::Enterprise));
        assert_eq!(enterprise.formatted_total(), "208.00");
    }

    #[test]
    fn test_request_values_are_clamped() {
        let req = PlatformUsageRequest {
            monthly_emails: 0,
            email_types: 0,
            pdf_pages: 50_000,
            images: 0,
            model_type: ModelType::Advanced,
        };
        let clamped = PlatformUsageInput::from(req);
        assert_eq!(clamped, input(0, 1, MAX_PDF_PAGES, 0, ModelType::Advanced));

        let req = PlatformUsageRequest {
            monthly_emails: u64::MAX,
            email_types: 1_000,
            pdf_pages: 0,
            images: 0,
            model_type: ModelType::Standard,
        };
        let clamped = PlatformUsageInput::from(req);
        assert_eq!(clamped.monthly_emails, MAX_MONTHLY_EMAILS);
        assert_eq!(clamped.email_types, MAX_EMAIL_TYPES);
    }

    #[test]
    fn test_plan_catalog() {
        let zh = plans(Language::Zh);
        assert_eq!(zh.len(), 3);
        assert_eq!(zh[0].price, "免费");
        assert_eq!(zh.iter().filter(|p| p.highlight).count(), 1);
        assert_eq!(zh[1].period.as_deref(), Some("/月"));

        let en = plans(Language::En);
        let ids: Vec<_> = en.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["personal", "teams", "enterprise"]);
        assert_eq!(en[2].features.len(), 7);
        assert_eq!(en[1].period.as_deref(), Some("/month"));
    }
}
