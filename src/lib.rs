#![doc(test(attr(deny(warnings))))]

//! Cents Core is a personal-finance ledger for a single session. It tracks
//! income, expenses and goal-tagged savings, refuses any mutation that would
//! drive a total or the available funds negative, and notifies observers such
//! as the low-funds alert after every successful change.
//!
//! ```
//! use cents_core::ledger::{Ledger, SavingsLedger};
//!
//! let mut ledger = Ledger::new();
//! let mut savings = SavingsLedger::new();
//! ledger.add_income(100.0).unwrap();
//! ledger.add_expense(40.0).unwrap();
//! savings.add_savings(&mut ledger, 25.0, "holiday").unwrap();
//! assert_eq!(ledger.available_funds(), 60.0);
//! assert_eq!(ledger.total_savings(), 25.0);
//! ```

pub mod alerts;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cents Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
