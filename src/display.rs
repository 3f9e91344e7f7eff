use crate::i18n::MessageKey;
use crate::ledger::Ledger;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Debt,
    Settled,
    Credit,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Debt => "debt-display",
            Tone::Settled => "debt-display no-debt",
            Tone::Credit => "debt-display positive",
        }
    }
}

/// What the page needs to draw the balance card.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtView {
    pub balance: f64,
    pub amount: String,
    pub tone: Tone,
    pub label_key: MessageKey,
    pub intensity: f64,
    pub background_alpha: f64,
    pub border_alpha: f64,
    pub can_undo: bool,
}

pub fn debt_view(ledger: &Ledger) -> DebtView {
    build_view(
        ledger.current_balance(),
        ledger.limits().debt,
        ledger.can_undo(),
    )
}

pub fn build_view(balance: f64, debt_limit: f64, can_undo: bool) -> DebtView {
    let (tone, label_key) = if balance > 0.0 {
        (Tone::Debt, MessageKey::TotalDebt)
    } else if balance == 0.0 {
        (Tone::Settled, MessageKey::TotalDebt)
    } else {
        (Tone::Credit, MessageKey::CreditBalance)
    };

    let intensity = match tone {
        Tone::Debt if debt_limit > 0.0 => (balance / debt_limit).min(1.0),
        Tone::Debt => 1.0,
        _ => 0.0,
    };

    DebtView {
        balance,
        amount: balance.abs().to_string(),
        tone,
        label_key,
        intensity,
        background_alpha: 0.05 + intensity * 0.35,
        border_alpha: 0.3 + intensity * 0.5,
        can_undo,
    }
}

impl DebtView {
    /// Inline style for the balance card. Only debt gets a red tint.
    pub fn card_style(&self) -> String {
        match self.tone {
            Tone::Debt => format!(
                "background: rgba(255, 0, 0, {:.3}); border-color: rgba(255, 0, 0, {:.3});",
                self.background_alpha, self.border_alpha
            ),
            Tone::Settled | Tone::Credit => {
                "background: var(--debt-none-bg); border-color: var(--debt-none-border);".to_string()
            }
        }
    }
}
