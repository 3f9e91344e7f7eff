//! Message tables for the page.
//!
//! Every [`Language`] covers every [`MessageKey`], so lookups are total.
//! Unknown language codes resolve to [`Language::DEFAULT`].

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    He,
    Ar,
}

impl Language {
    pub const DEFAULT: Language = Language::En;
    pub const ALL: [Language; 3] = [Language::En, Language::He, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
            Language::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "עברית",
            Language::Ar => "العربية",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        let primary = code.trim().get(..2)?.to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
    }

    pub fn from_code(code: &str) -> Language {
        Language::parse(code).unwrap_or(Language::DEFAULT)
    }

    /// Picks the first supported language in an `Accept-Language` value.
    pub fn from_accept_language(header: &str) -> Language {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Language::parse)
            .unwrap_or(Language::DEFAULT)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He | Language::Ar)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    Title,
    Subtitle,
    TotalDebt,
    CreditBalance,
    ITookCookie,
    AddPayment,
    ClearEverything,
    Undo,
    EditAmount,
    PayWithApp,
}

impl MessageKey {
    pub const ALL: [MessageKey; 10] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::TotalDebt,
        MessageKey::CreditBalance,
        MessageKey::ITookCookie,
        MessageKey::AddPayment,
        MessageKey::ClearEverything,
        MessageKey::Undo,
        MessageKey::EditAmount,
        MessageKey::PayWithApp,
    ];
}

pub fn translate(lang: Language, key: MessageKey) -> &'static str {
    use MessageKey::*;

    match lang {
        Language::En => match key {
            Title => "Cookie Monster",
            Subtitle => "Trust-based cookie debt system",
            TotalDebt => "Debt",
            CreditBalance => "Credit Balance",
            ITookCookie => "I took a cookie",
            AddPayment => "I paid",
            ClearEverything => "I Paid Everything",
            Undo => "Undo",
            EditAmount => "Edit debt amount",
            PayWithApp => "Pay with app",
        },
        Language::He => match key {
            Title => "עוגי",
            Subtitle => "מערכת תשלום עצמי לעוגיות",
            TotalDebt => "חוב",
            CreditBalance => "יתרה",
            ITookCookie => "לקחתי עוגיה",
            AddPayment => "שילמתי",
            ClearEverything => "שילמתי הכל",
            Undo => "ביטול",
            EditAmount => "עריכת סכום החוב",
            PayWithApp => "תשלום באפליקציה",
        },
        Language::Ar => match key {
            Title => "كعكي",
            Subtitle => "نظام دفع ذاتي للكوكيز",
            TotalDebt => "الدين",
            CreditBalance => "رصيد",
            ITookCookie => "أخذت كوكي",
            AddPayment => "دفعت",
            ClearEverything => "دفعت كل شيء",
            Undo => "تراجع",
            EditAmount => "تعديل مبلغ الدين",
            PayWithApp => "ادفع عبر التطبيق",
        },
    }
}

pub fn message_table(lang: Language) -> BTreeMap<MessageKey, &'static str> {
    MessageKey::ALL
        .into_iter()
        .map(|key| (key, translate(lang, key)))
        .collect()
}
