use std::fmt;
use std::rc::Rc;

use crate::alerts::{FinancialObserver, FinancialSnapshot};
use crate::errors::LedgerError;

use super::policy::{LedgerPolicy, SavingsCap};

/// Aggregate income, expense and savings totals for one session.
///
/// Totals start at zero and change only through the mutating methods below.
/// Each method validates before touching state; on success it notifies every
/// registered observer once, on failure it leaves totals untouched and
/// notifies nobody. After any successful call all three totals and
/// `available_funds()` are non-negative.
pub struct Ledger {
    total_income: f64,
    total_expense: f64,
    total_savings: f64,
    policy: LedgerPolicy,
    observers: Vec<Rc<dyn FinancialObserver>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_policy(LedgerPolicy::default())
    }

    pub fn with_policy(policy: LedgerPolicy) -> Self {
        Self {
            total_income: 0.0,
            total_expense: 0.0,
            total_savings: 0.0,
            policy,
            observers: Vec::new(),
        }
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    pub fn total_income(&self) -> f64 {
        debug_assert!(self.total_income >= 0.0, "total income went negative");
        self.total_income
    }

    pub fn total_expense(&self) -> f64 {
        debug_assert!(self.total_expense >= 0.0, "total expense went negative");
        self.total_expense
    }

    pub fn total_savings(&self) -> f64 {
        debug_assert!(self.total_savings >= 0.0, "total savings went negative");
        self.total_savings
    }

    /// Income minus expenses.
    pub fn available_funds(&self) -> f64 {
        let available = self.total_income - self.total_expense;
        debug_assert!(available >= 0.0, "available funds went negative");
        available
    }

    /// Available funds left once savings are set aside. May be negative when
    /// savings are uncapped; it is reported, never enforced.
    pub fn total_balance(&self) -> f64 {
        self.available_funds() - self.total_savings
    }

    pub fn snapshot(&self) -> FinancialSnapshot {
        FinancialSnapshot {
            available_funds: self.available_funds(),
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            total_savings: self.total_savings(),
        }
    }

    pub fn add_income(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        self.total_income += amount;
        tracing::debug!(amount, total_income = self.total_income, "income added");
        self.notify_observers();
        Ok(())
    }

    /// Fails when the removal exceeds recorded income or would leave less
    /// income than has already been spent.
    pub fn remove_income(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_non_negative(amount)?;
        if amount > self.total_income {
            return Err(rejected(LedgerError::InsufficientIncome {
                requested: amount,
                current: self.total_income,
            }));
        }
        let resulting = self.total_income - amount - self.total_expense;
        if resulting < 0.0 {
            return Err(rejected(LedgerError::WouldGoNegative {
                requested: amount,
                resulting,
            }));
        }
        self.total_income -= amount;
        tracing::debug!(amount, total_income = self.total_income, "income removed");
        self.notify_observers();
        Ok(())
    }

    pub fn add_expense(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        // Checked in the same form as the resulting state so rounding cannot
        // push available funds below zero.
        if self.total_income - (self.total_expense + amount) < 0.0 {
            return Err(rejected(LedgerError::ExceedsAvailableFunds {
                requested: amount,
                available: self.available_funds(),
            }));
        }
        self.total_expense += amount;
        tracing::debug!(amount, total_expense = self.total_expense, "expense added");
        self.notify_observers();
        Ok(())
    }

    pub fn remove_expense(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        if amount > self.total_expense {
            return Err(rejected(LedgerError::ExceedsCurrentExpense {
                requested: amount,
                current: self.total_expense,
            }));
        }
        self.total_expense -= amount;
        tracing::debug!(amount, total_expense = self.total_expense, "expense removed");
        self.notify_observers();
        Ok(())
    }

    pub fn add_savings(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        if self.policy.savings_cap == SavingsCap::AvailableFunds {
            let available = self.available_funds();
            if amount > available {
                return Err(rejected(LedgerError::ExceedsAvailableFunds {
                    requested: amount,
                    available,
                }));
            }
        }
        self.total_savings += amount;
        tracing::debug!(amount, total_savings = self.total_savings, "savings added");
        self.notify_observers();
        Ok(())
    }

    pub fn remove_savings(&mut self, amount: f64) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        if amount > self.total_savings {
            return Err(rejected(LedgerError::ExceedsCurrentSavings {
                requested: amount,
                current: self.total_savings,
            }));
        }
        self.total_savings -= amount;
        tracing::debug!(amount, total_savings = self.total_savings, "savings removed");
        self.notify_observers();
        Ok(())
    }

    /// Subscribes `observer` to future mutations. Registering the same
    /// observer twice is a no-op; returns whether it was newly added.
    pub fn register_observer(&mut self, observer: Rc<dyn FinancialObserver>) -> bool {
        if self.observers.iter().any(|known| same_observer(known, &observer)) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Returns whether the observer was registered.
    pub fn remove_observer(&mut self, observer: &Rc<dyn FinancialObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|known| !same_observer(known, observer));
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&self) {
        let snapshot = self.snapshot();
        for (position, observer) in self.observers.iter().enumerate() {
            if let Err(err) = observer.update(&snapshot) {
                tracing::warn!(observer = position, error = %err, "observer failed; continuing");
            }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("total_income", &self.total_income)
            .field("total_expense", &self.total_expense)
            .field("total_savings", &self.total_savings)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// Compares data pointers only; vtable pointers for one type may differ
// between codegen units.
fn same_observer(a: &Rc<dyn FinancialObserver>, b: &Rc<dyn FinancialObserver>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>())
}

pub(crate) fn ensure_positive(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(rejected(LedgerError::InvalidAmount(amount)))
    }
}

pub(crate) fn ensure_non_negative(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(rejected(LedgerError::InvalidAmount(amount)))
    }
}

fn rejected(err: LedgerError) -> LedgerError {
    tracing::debug!(error = %err, "ledger mutation rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ObserverError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<FinancialSnapshot>>,
    }

    impl FinancialObserver for Recorder {
        fn update(&self, snapshot: &FinancialSnapshot) -> Result<(), ObserverError> {
            self.seen.borrow_mut().push(*snapshot);
            Ok(())
        }
    }

    struct Failing;

    impl FinancialObserver for Failing {
        fn update(&self, _snapshot: &FinancialSnapshot) -> Result<(), ObserverError> {
            Err(ObserverError("boom".into()))
        }
    }

    fn assert_non_negative(ledger: &Ledger) {
        assert!(ledger.total_income() >= 0.0);
        assert!(ledger.total_expense() >= 0.0);
        assert!(ledger.total_savings() >= 0.0);
        assert!(ledger.available_funds() >= 0.0);
    }

    #[test]
    fn starts_at_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.total_income(), 0.0);
        assert_eq!(ledger.total_expense(), 0.0);
        assert_eq!(ledger.total_savings(), 0.0);
        assert_eq!(ledger.available_funds(), 0.0);
        assert_eq!(ledger.total_balance(), 0.0);
    }

    #[test]
    fn income_then_expense_leaves_difference_available() {
        let mut ledger = Ledger::new();
        ledger.add_income(100.0).unwrap();
        ledger.add_expense(40.0).unwrap();
        assert_eq!(ledger.available_funds(), 60.0);
        assert_non_negative(&ledger);
    }

    #[test]
    fn removing_spent_income_is_refused() {
        let mut ledger = Ledger::new();
        ledger.add_income(100.0).unwrap();
        ledger.add_expense(80.0).unwrap();

        let err = ledger.remove_income(30.0).unwrap_err();
        assert!(matches!(err, LedgerError::WouldGoNegative { .. }));
        assert_eq!(ledger.total_income(), 100.0);

        ledger.remove_income(10.0).unwrap();
        assert_eq!(ledger.total_income(), 90.0);
        assert_eq!(ledger.total_expense(), 80.0);
        assert_eq!(ledger.available_funds(), 10.0);
    }

    #[test]
    fn remove_income_beyond_total_is_insufficient() {
        let mut ledger = Ledger::new();
        ledger.add_income(50.0).unwrap();
        assert_eq!(
            ledger.remove_income(60.0),
            Err(LedgerError::InsufficientIncome {
                requested: 60.0,
                current: 50.0
            })
        );
        assert_eq!(ledger.remove_income(-1.0), Err(LedgerError::InvalidAmount(-1.0)));
    }

    #[test]
    fn income_round_trip_restores_totals() {
        let mut ledger = Ledger::new();
        ledger.add_income(20.0).unwrap();
        ledger.add_expense(5.0).unwrap();
        ledger.add_income(12.5).unwrap();
        ledger.remove_income(12.5).unwrap();
        assert_eq!(ledger.total_income(), 20.0);
        assert_eq!(ledger.available_funds(), 15.0);
    }

    #[test]
    fn expense_may_consume_exactly_available_funds() {
        let mut ledger = Ledger::new();
        ledger.add_income(100.0).unwrap();
        ledger.add_expense(40.0).unwrap();

        let err = ledger.add_expense(60.01).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(ledger.total_expense(), 40.0);

        ledger.add_expense(60.0).unwrap();
        assert_eq!(ledger.available_funds(), 0.0);
    }

    #[test]
    fn non_positive_and_non_finite_amounts_are_invalid() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_income(0.0), Err(LedgerError::InvalidAmount(0.0)));
        assert!(ledger.add_income(f64::NAN).is_err());
        assert!(ledger.add_income(f64::INFINITY).is_err());
        assert_eq!(ledger.add_expense(-2.0), Err(LedgerError::InvalidAmount(-2.0)));
        assert_eq!(ledger.remove_expense(0.0), Err(LedgerError::InvalidAmount(0.0)));
        assert_eq!(ledger.add_savings(0.0), Err(LedgerError::InvalidAmount(0.0)));
        assert_eq!(ledger.remove_savings(-3.0), Err(LedgerError::InvalidAmount(-3.0)));
        assert_eq!(ledger.total_income(), 0.0);
    }

    #[test]
    fn remove_expense_and_savings_are_bounded_by_totals() {
        let mut ledger = Ledger::new();
        ledger.add_income(10.0).unwrap();
        ledger.add_expense(4.0).unwrap();
        ledger.add_savings(3.0).unwrap();

        assert!(matches!(
            ledger.remove_expense(5.0),
            Err(LedgerError::ExceedsCurrentExpense { .. })
        ));
        assert!(matches!(
            ledger.remove_savings(3.5),
            Err(LedgerError::ExceedsCurrentSavings { .. })
        ));

        ledger.remove_expense(4.0).unwrap();
        ledger.remove_savings(3.0).unwrap();
        assert_eq!(ledger.total_expense(), 0.0);
        assert_eq!(ledger.total_savings(), 0.0);
    }

    #[test]
    fn uncapped_savings_may_exceed_available_funds() {
        let mut ledger = Ledger::new();
        ledger.add_income(10.0).unwrap();
        ledger.add_savings(25.0).unwrap();
        assert_eq!(ledger.total_savings(), 25.0);
        assert_eq!(ledger.total_balance(), -15.0);
    }

    #[test]
    fn capped_savings_respect_available_funds() {
        let mut ledger = Ledger::with_policy(LedgerPolicy {
            savings_cap: SavingsCap::AvailableFunds,
        });
        assert_eq!(ledger.policy().savings_cap, SavingsCap::AvailableFunds);
        assert_eq!(Ledger::new().policy().savings_cap, SavingsCap::Uncapped);
        ledger.add_income(10.0).unwrap();
        assert!(matches!(
            ledger.add_savings(10.5),
            Err(LedgerError::ExceedsAvailableFunds { .. })
        ));
        ledger.add_savings(10.0).unwrap();
        assert_eq!(ledger.total_savings(), 10.0);
    }

    #[test]
    fn observers_receive_snapshot_after_each_success() {
        let mut ledger = Ledger::new();
        let recorder = Rc::new(Recorder::default());
        ledger.register_observer(recorder.clone());

        ledger.add_income(100.0).unwrap();
        ledger.add_expense(30.0).unwrap();
        let _ = ledger.add_expense(500.0);

        let seen = recorder.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[1],
            FinancialSnapshot {
                available_funds: 70.0,
                total_income: 100.0,
                total_expense: 30.0,
                total_savings: 0.0,
            }
        );
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut ledger = Ledger::new();
        let recorder = Rc::new(Recorder::default());
        assert!(ledger.register_observer(recorder.clone()));
        assert!(!ledger.register_observer(recorder.clone()));
        assert_eq!(ledger.observer_count(), 1);

        ledger.add_income(1.0).unwrap();
        assert_eq!(recorder.seen.borrow().len(), 1);
    }

    #[test]
    fn removed_observer_is_no_longer_notified() {
        let mut ledger = Ledger::new();
        let recorder = Rc::new(Recorder::default());
        let handle: Rc<dyn FinancialObserver> = recorder.clone();
        ledger.register_observer(handle.clone());

        assert!(ledger.remove_observer(&handle));
        assert!(!ledger.remove_observer(&handle));
        ledger.add_income(1.0).unwrap();
        assert!(recorder.seen.borrow().is_empty());
    }

    #[test]
    fn failing_observer_does_not_block_later_observers() {
        let mut ledger = Ledger::new();
        let recorder = Rc::new(Recorder::default());
        ledger.register_observer(Rc::new(Failing));
        ledger.register_observer(recorder.clone());

        ledger.add_income(5.0).unwrap();
        assert_eq!(ledger.total_income(), 5.0);
        assert_eq!(recorder.seen.borrow().len(), 1);
    }

    #[test]
    fn getters_are_idempotent() {
        let mut ledger = Ledger::new();
        ledger.add_income(42.0).unwrap();
        assert_eq!(ledger.snapshot(), ledger.snapshot());
        assert_eq!(ledger.available_funds(), ledger.available_funds());
    }
}
