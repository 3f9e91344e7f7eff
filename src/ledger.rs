use crate::errors::{Bound, LedgerError};
use crate::history::{EntryKind, History, HistoryEntry};
use tracing::{debug, info};

pub const CURRENCY_SYMBOL: &str = "₪";

/// Range accepted by a manual edit of the balance.
pub const INPUT_MIN: i64 = -9999;
pub const INPUT_MAX: i64 = 9999;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub debt: f64,
    pub credit: f64,
}

impl Limits {
    pub const DEFAULT: f64 = 20.0;

    pub fn new(debt: f64, credit: f64) -> Self {
        Self { debt, credit }
    }

    fn check(&self, bound: Bound, candidate: f64) -> Result<(), LedgerError> {
        let (exceeded, limit) = match bound {
            Bound::Debt => (candidate > self.debt, self.debt),
            Bound::Credit => (candidate < -self.credit, self.credit),
        };
        if exceeded {
            return Err(LedgerError::OutOfBounds {
                bound,
                candidate,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::DEFAULT, Self::DEFAULT)
    }
}

/// Owns the balance and its undo history. Every mutation either updates
/// both or leaves both untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: f64,
    history: History,
    limits: Limits,
}

impl Ledger {
    pub fn new(limits: Limits) -> Self {
        Self::with_balance(0.0, limits)
    }

    /// Starts from a previously stored balance with an empty history.
    pub fn with_balance(balance: f64, limits: Limits) -> Self {
        let balance = if balance.is_finite() { balance } else { 0.0 };
        Self {
            balance,
            history: History::new(),
            limits,
        }
    }

    pub fn current_balance(&self) -> f64 {
        self.balance
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn record_cookie(&mut self, name: &str, price: f64) -> Result<f64, LedgerError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(LedgerError::InvalidInput(format!(
                "cookie price must be a positive number, got {price}"
            )));
        }

        let candidate = self.guarded(&[Bound::Debt], self.balance + price)?;
        let label = format!("{name} ({CURRENCY_SYMBOL}{price})");
        Ok(self.apply(EntryKind::CookieAdded, candidate, label))
    }

    /// Payments are whole units; zero after rounding changes nothing.
    pub fn record_payment(&mut self, amount: f64) -> Result<f64, LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidInput(format!(
                "payment must be a number, got {amount}"
            )));
        }

        let amount = amount.round();
        if amount == 0.0 {
            debug!("ignoring zero payment");
            return Err(LedgerError::NoOp);
        }

        // A balance already past the debt limit can still be paid down.
        let bounds: &[Bound] = if amount < 0.0 {
            &[Bound::Credit, Bound::Debt]
        } else {
            &[Bound::Credit]
        };
        let candidate = self.guarded(bounds, self.balance - amount)?;
        let label = format!("Payment {CURRENCY_SYMBOL}{amount}");
        Ok(self.apply(EntryKind::PaymentMade, candidate, label))
    }

    /// Overwrites the balance with a typed value. Only the input range is
    /// checked, not the debt or credit limit.
    pub fn record_manual_edit(&mut self, raw: &str) -> Result<f64, LedgerError> {
        let value = parse_manual_value(raw)?;
        let label = format!("Manual edit to {CURRENCY_SYMBOL}{value}");
        Ok(self.apply(EntryKind::ManualEdit, value, label))
    }

    pub fn undo(&mut self) -> Result<f64, LedgerError> {
        let restored = self.history.undo()?;
        info!(from = self.balance, to = restored, "undid last action");
        self.balance = restored;
        Ok(restored)
    }

    pub fn clear(&mut self) {
        info!(previous = self.balance, "cleared balance and history");
        self.balance = 0.0;
        self.history.clear();
    }

    /// Each operation only guards the side of the range it moves toward.
    fn guarded(&self, bounds: &[Bound], candidate: f64) -> Result<f64, LedgerError> {
        for &bound in bounds {
            if let Err(err) = self.limits.check(bound, candidate) {
                debug!(balance = self.balance, "rejected: {err}");
                return Err(err);
            }
        }
        Ok(candidate)
    }

    fn apply(&mut self, kind: EntryKind, new_balance: f64, label: String) -> f64 {
        let prior = self.balance;
        let delta = new_balance - prior;
        info!(?kind, prior, delta, "recorded {label}");
        self.history.push(HistoryEntry::new(kind, delta, label, prior));
        self.balance = new_balance;
        new_balance
    }
}

fn parse_manual_value(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("'{trimmed}' is not a whole number")))?;

    if !(INPUT_MIN..=INPUT_MAX).contains(&value) {
        return Err(LedgerError::InvalidInput(format!(
            "{value} is outside {INPUT_MIN}..={INPUT_MAX}"
        )));
    }

    Ok(value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Ledger {
        Ledger::new(Limits::new(20.0, 20.0))
    }

    fn replayed(ledger: &Ledger, initial: f64) -> f64 {
        initial + ledger.history().iter().map(|entry| entry.delta).sum::<f64>()
    }

    #[test]
    fn cookie_payment_undo_walkthrough() {
        let mut ledger = ledger();

        assert_eq!(ledger.record_cookie("Cookie", 5.0).unwrap(), 5.0);

        let err = ledger.record_cookie("Cookie", 20.0).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::OutOfBounds { bound: Bound::Debt, .. }
        ));
        assert_eq!(ledger.current_balance(), 5.0);

        assert_eq!(ledger.record_payment(3.0).unwrap(), 2.0);
        assert_eq!(ledger.undo().unwrap(), 5.0);
        assert_eq!(ledger.undo().unwrap(), 0.0);
        assert!(matches!(ledger.undo(), Err(LedgerError::EmptyHistory)));
        assert_eq!(ledger.current_balance(), 0.0);
        assert!(!ledger.can_undo());
    }

    #[test]
    fn zero_payment_is_a_no_op() {
        let mut ledger = ledger();
        ledger.record_cookie("Cookie", 4.0).unwrap();

        assert!(matches!(ledger.record_payment(0.0), Err(LedgerError::NoOp)));
        assert!(matches!(ledger.record_payment(0.4), Err(LedgerError::NoOp)));
        assert_eq!(ledger.current_balance(), 4.0);
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn payment_is_rounded_to_whole_units() {
        let mut ledger = ledger();
        assert_eq!(ledger.record_payment(2.6).unwrap(), -3.0);
        let entry = ledger.history().last().unwrap();
        assert_eq!(entry.kind, EntryKind::PaymentMade);
        assert_eq!(entry.delta, -3.0);
        assert_eq!(entry.label, "Payment ₪3");
    }

    #[test]
    fn payment_past_credit_limit_is_rejected() {
        let mut ledger = ledger();
        ledger.record_payment(15.0).unwrap();

        let err = ledger.record_payment(6.0).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::OutOfBounds { bound: Bound::Credit, .. }
        ));
        assert_eq!(ledger.current_balance(), -15.0);
        assert_eq!(ledger.history().len(), 1);

        assert_eq!(ledger.record_payment(5.0).unwrap(), -20.0);
    }

    #[test]
    fn negative_payment_still_respects_debt_limit() {
        let mut ledger = ledger();
        ledger.record_cookie("Cookie", 18.0).unwrap();
        let err = ledger.record_payment(-3.0).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::OutOfBounds { bound: Bound::Debt, .. }
        ));
        assert_eq!(ledger.current_balance(), 18.0);
    }

    #[test]
    fn cookie_price_must_be_positive() {
        let mut ledger = ledger();
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ledger.record_cookie("Cookie", price),
                Err(LedgerError::InvalidInput(_))
            ));
        }
        assert!(!ledger.can_undo());
    }

    #[test]
    fn cookie_up_to_the_limit_is_accepted() {
        let mut ledger = ledger();
        assert_eq!(ledger.record_cookie("Big", 20.0).unwrap(), 20.0);
        assert!(ledger.record_cookie("Crumb", 0.5).is_err());
    }

    #[test]
    fn manual_edit_skips_limit_check() {
        let mut ledger = ledger();
        ledger.record_cookie("Cookie", 5.0).unwrap();

        assert_eq!(ledger.record_manual_edit(" 150 ").unwrap(), 150.0);
        let entry = ledger.history().last().unwrap();
        assert_eq!(entry.kind, EntryKind::ManualEdit);
        assert_eq!(entry.delta, 145.0);
        assert_eq!(entry.prior_balance, 5.0);

        assert_eq!(ledger.record_manual_edit("-9999").unwrap(), -9999.0);
    }

    #[test]
    fn manual_edit_rejects_garbage_and_out_of_range() {
        let mut ledger = ledger();
        for raw in ["", "abc", "1e3", "12.5", "10000", "-10000"] {
            assert!(
                matches!(
                    ledger.record_manual_edit(raw),
                    Err(LedgerError::InvalidInput(_))
                ),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(ledger.current_balance(), 0.0);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn undo_after_cookie_restores_balance_and_length() {
        let mut ledger = Ledger::with_balance(-7.0, Limits::default());
        ledger.record_payment(1.0).unwrap();
        let len = ledger.history().len();

        ledger.record_cookie("Cookie", 3.5).unwrap();
        ledger.undo().unwrap();

        assert_eq!(ledger.current_balance(), -8.0);
        assert_eq!(ledger.history().len(), len);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ledger = Ledger::with_balance(12.0, Limits::default());
        ledger.record_cookie("Cookie", 5.0).unwrap();
        ledger.record_manual_edit("-40").unwrap();

        ledger.clear();
        assert_eq!(ledger.current_balance(), 0.0);
        assert!(!ledger.can_undo());
    }

    #[test]
    fn balance_equals_replayed_deltas() {
        let initial = 3.0;
        let mut ledger = Ledger::with_balance(initial, Limits::new(30.0, 10.0));
        let _ = ledger.record_cookie("Cookie", 5.0);
        let _ = ledger.record_cookie("Cookie", 50.0);
        let _ = ledger.record_payment(12.0);
        let _ = ledger.record_payment(40.0);
        let _ = ledger.record_manual_edit("7");
        let _ = ledger.record_payment(0.0);
        let _ = ledger.record_cookie("Cookie", 2.5);

        assert_eq!(ledger.current_balance(), 9.5);
        assert_eq!(replayed(&ledger, initial), ledger.current_balance());
        for entry in ledger.history().iter() {
            assert!(entry.resulting_balance().is_finite());
        }
    }

    #[test]
    fn distinct_limits_are_honoured() {
        let mut ledger = Ledger::new(Limits::new(10.0, 2.0));
        assert!(ledger.record_payment(3.0).is_err());
        assert_eq!(ledger.record_payment(2.0).unwrap(), -2.0);
        assert_eq!(ledger.record_cookie("Cookie", 12.0).unwrap(), 10.0);
    }

    #[test]
    fn edited_debt_past_the_limit_can_be_paid_down() {
        let mut ledger = ledger();
        ledger.record_manual_edit("150").unwrap();

        assert_eq!(ledger.record_payment(10.0).unwrap(), 140.0);
        assert_eq!(ledger.history().len(), 2);
        assert!(matches!(
            ledger.record_cookie("Cookie", 1.0),
            Err(LedgerError::OutOfBounds { bound: Bound::Debt, .. })
        ));
    }

    #[test]
    fn edited_credit_past_the_limit_accepts_cookies() {
        let mut ledger = ledger();
        ledger.record_manual_edit("-40").unwrap();

        assert_eq!(ledger.record_cookie("Cookie", 5.0).unwrap(), -35.0);
        assert!(matches!(
            ledger.record_payment(1.0),
            Err(LedgerError::OutOfBounds { bound: Bound::Credit, .. })
        ));
        assert_eq!(ledger.current_balance(), -35.0);
    }

    #[test]
    fn stored_balance_over_the_limit_accepts_payments() {
        let mut ledger = Ledger::with_balance(25.0, Limits::new(20.0, 20.0));
        assert_eq!(ledger.record_payment(3.0).unwrap(), 22.0);
        assert!(matches!(
            ledger.record_payment(-1.0),
            Err(LedgerError::OutOfBounds { bound: Bound::Debt, .. })
        ));
        assert_eq!(ledger.current_balance(), 22.0);
    }

    #[test]
    fn non_finite_stored_balance_starts_at_zero() {
        let ledger = Ledger::with_balance(f64::NAN, Limits::default());
        assert_eq!(ledger.current_balance(), 0.0);
    }
}
