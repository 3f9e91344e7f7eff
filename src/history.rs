use crate::errors::LedgerError;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    CookieAdded,
    PaymentMade,
    ManualEdit,
}

/// One reversible mutation of the balance.
///
/// `prior_balance + delta` is the balance the entry produced when it was
/// recorded.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    pub delta: f64,
    pub label: String,
    pub prior_balance: f64,
    pub recorded_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(kind: EntryKind, delta: f64, label: impl Into<String>, prior_balance: f64) -> Self {
        Self {
            kind,
            delta,
            label: label.into(),
            prior_balance,
            recorded_at: Local::now(),
        }
    }

    pub fn resulting_balance(&self) -> f64 {
        self.prior_balance + self.delta
    }
}

/// Undo stack. Grows without a cap; there is no redo.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Drops the newest entry and hands back the balance it replaced.
    pub fn undo(&mut self) -> Result<f64, LedgerError> {
        self.entries
            .pop()
            .map(|entry| entry.prior_balance)
            .ok_or(LedgerError::EmptyHistory)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
