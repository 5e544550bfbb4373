//! Fixed reference catalogs consumed by the marketplace.
//!
//! Categories, conditions, locations, and currencies are externally supplied
//! read-only data. Ads reference them by id or name as plain strings; the
//! data layer performs no referential-integrity checks against these tables,
//! so unknown ids are accepted silently.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::ad::Condition;

/// A listing category with its display name and icon slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "cars", name: "سيارات", icon: "car" },
    Category { id: "real_estate", name: "عقارات", icon: "building" },
    Category { id: "phones", name: "هواتف", icon: "phone" },
    Category { id: "electronics", name: "إلكترونيات", icon: "laptop" },
    Category { id: "furniture", name: "أثاث", icon: "sofa" },
    Category { id: "jobs", name: "وظائف", icon: "briefcase" },
    Category { id: "services", name: "خدمات", icon: "wrench" },
    Category { id: "clothing", name: "ملابس ومستلزمات", icon: "shirt" },
    Category { id: "other", name: "أخرى", icon: "more" },
];

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Display name for an item condition.
pub fn condition_name(condition: Condition) -> &'static str {
    match condition {
        Condition::New => "جديدة",
        Condition::LikeNew => "شبه جديدة",
        Condition::Used => "مستخدمة",
    }
}

/// Country name mapped to its ordered city list.
pub const LOCATIONS: &[(&str, &[&str])] = &[
    (
        "اليمن",
        &[
            "صنعاء", "عدن", "تعز", "الحديدة", "إب", "ذمار", "المكلا", "سيئون", "شبوة", "مأرب",
            "الجوف", "صعدة", "حجة", "المحويت", "عمران", "البيضاء", "لحج", "أبين", "الضالع",
            "المهرة", "سقطرى",
        ],
    ),
    (
        "السعودية",
        &[
            "الرياض", "جدة", "مكة", "المدينة المنورة", "الدمام", "الخبر", "أبها", "تبوك",
            "بريدة", "حائل",
        ],
    ),
    (
        "مصر",
        &["القاهرة", "الإسكندرية", "الجيزة", "الأقصر", "أسوان", "شرم الشيخ", "الغردقة"],
    ),
    (
        "الإمارات",
        &["دبي", "أبوظبي", "الشارقة", "عجمان", "رأس الخيمة", "الفجيرة"],
    ),
    ("قطر", &["الدوحة", "الريان", "الوكرة"]),
    ("الكويت", &["مدينة الكويت", "الأحمدي", "حولي"]),
    ("البحرين", &["المنامة", "المحرق", "الرفاع"]),
    ("عمان", &["مسقط", "صلالة", "صحار"]),
];

static LOCATION_INDEX: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| LOCATIONS.iter().copied().collect());

/// Ordered city list for a country, `None` for countries not in the catalog.
pub fn cities_of(country: &str) -> Option<&'static [&'static str]> {
    LOCATION_INDEX.get(country).copied()
}

/// ISO currency codes for the catalog countries.
const CURRENCIES: &[(&str, &str)] = &[
    ("اليمن", "YER"),
    ("السعودية", "SAR"),
    ("مصر", "EGP"),
    ("الإمارات", "AED"),
    ("قطر", "QAR"),
    ("الكويت", "KWD"),
    ("البحرين", "BHD"),
    ("عمان", "OMR"),
];

pub fn currency_code(country: &str) -> Option<&'static str> {
    CURRENCIES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}

/// Presentation helper for prices.
///
/// A price of `0` (or anything non-positive) renders as "price on request";
/// the stored value itself is never rewritten. Unknown countries fall back
/// to a generic local-currency suffix.
pub fn format_price(price: f64, country: &str) -> String {
    if price <= 0.0 {
        return "السعر عند الطلب".to_string();
    }
    match currency_code(country) {
        Some(code) => format!("{} {}", group_digits(price), code),
        None => format!("{} (عملة محلية)", group_digits(price)),
    }
}

/// Thousands-separated rendering with up to two fraction digits.
fn group_digits(price: f64) -> String {
    let rounded = (price * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let fraction = rounded - whole as f64;

    let digits = whole.to_string();
    let mut reversed = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    let mut out: String = reversed.chars().rev().collect();
    if fraction > 0.0 {
        out.push_str(&format!("{fraction:.2}")[1..]);
    }
    out
}
