use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::errors::{LedgerError, ObserverError};

use super::{Alert, AlertSink, FinancialObserver, FinancialSnapshot};

pub const DEFAULT_WARNING_THRESHOLD: f64 = 5.0;

/// Warns when available funds drop strictly below a configurable threshold.
///
/// The threshold lives in a `Cell` so the alert can stay registered on the
/// ledger (behind an `Rc`) while the shell adjusts it.
pub struct FundsAlert {
    warning_threshold: Cell<f64>,
    sink: Rc<dyn AlertSink>,
}

impl FundsAlert {
    pub fn new(sink: Rc<dyn AlertSink>) -> Self {
        Self {
            warning_threshold: Cell::new(DEFAULT_WARNING_THRESHOLD),
            sink,
        }
    }

    pub fn with_threshold(threshold: f64, sink: Rc<dyn AlertSink>) -> Result<Self, LedgerError> {
        validate_threshold(threshold)?;
        Ok(Self {
            warning_threshold: Cell::new(threshold),
            sink,
        })
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold.get()
    }

    pub fn set_warning_threshold(&self, threshold: f64) -> Result<(), LedgerError> {
        validate_threshold(threshold)?;
        self.warning_threshold.set(threshold);
        tracing::debug!(threshold, "funds alert threshold changed");
        Ok(())
    }

    /// Builds the warning for `available_funds`, if one is due.
    pub fn check(&self, available_funds: f64) -> Option<String> {
        let threshold = self.warning_threshold();
        (available_funds < threshold).then(|| {
            format!(
                "Available funds (${:.2}) are below warning threshold (${:.2})",
                available_funds, threshold
            )
        })
    }

    /// Announces the feature and the current threshold. Meant to run once at startup.
    pub fn display_initial_notification(&self) {
        self.sink.emit(Alert::notice(format!(
            "Funds Alert feature is active. You will be warned when available funds fall below ${:.2}.",
            self.warning_threshold()
        )));
        self.sink
            .emit(Alert::notice("Use 'alert set <amount>' to change this threshold."));
    }
}

impl FinancialObserver for FundsAlert {
    fn update(&self, snapshot: &FinancialSnapshot) -> Result<(), ObserverError> {
        if let Some(message) = self.check(snapshot.available_funds) {
            tracing::info!(
                available_funds = snapshot.available_funds,
                threshold = self.warning_threshold(),
                "low funds alert raised"
            );
            self.sink.emit(Alert::warning(message));
        }
        Ok(())
    }
}

impl fmt::Debug for FundsAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FundsAlert")
            .field("warning_threshold", &self.warning_threshold())
            .finish_non_exhaustive()
    }
}

fn validate_threshold(threshold: f64) -> Result<(), LedgerError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidThreshold(threshold))
    }
}
