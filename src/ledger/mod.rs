//! Aggregate totals, the savings sub-ledger and the rules that keep them consistent.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod policy;
pub mod savings;

pub use ledger::Ledger;
pub use policy::{LedgerPolicy, SavingsCap};
pub use savings::{SavingsIndicator, SavingsLedger, SavingsRecord, NO_GOAL};
