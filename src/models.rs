use crate::display::Tone;
use crate::history::EntryKind;
use crate::i18n::{Language, MessageKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk layout: one key holding the balance as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBalance {
    #[serde(rename = "cookieDebt")]
    pub cookie_debt: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CookieRequest {
    pub name: Option<String>,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub balance: f64,
    pub amount: String,
    pub tone: Tone,
    pub label: String,
    pub intensity: f64,
    pub background_alpha: f64,
    pub border_alpha: f64,
    pub can_undo: bool,
    pub history_len: usize,
    pub debt_limit: f64,
    pub credit_limit: f64,
}

#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub kind: EntryKind,
    pub delta: f64,
    pub label: String,
    pub prior_balance: f64,
    pub recorded_at: String,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub lang: Language,
    pub dir: &'static str,
    pub messages: BTreeMap<MessageKey, &'static str>,
}
