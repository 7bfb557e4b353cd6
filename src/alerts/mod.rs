//! Observers of ledger mutations.
//!
//! The [`Ledger`](crate::ledger::Ledger) calls every registered
//! [`FinancialObserver`] in registration order after each successful
//! mutation. Observers are shared as `Rc<dyn FinancialObserver>`; the ledger
//! only holds the handle and observers never reach back into the ledger.

mod funds_alert;
mod sink;

pub use funds_alert::{FundsAlert, DEFAULT_WARNING_THRESHOLD};
pub use sink::{Alert, AlertLevel, AlertSink, BufferedSink, NullSink};

use crate::errors::ObserverError;

/// Totals delivered to observers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialSnapshot {
    pub available_funds: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_savings: f64,
}

/// Callback invoked with the new totals after every successful ledger mutation.
///
/// A returned error is logged by the ledger and does not stop delivery to the
/// observers registered after this one.
pub trait FinancialObserver {
    fn update(&self, snapshot: &FinancialSnapshot) -> Result<(), ObserverError>;
}
