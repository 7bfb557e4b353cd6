use serde::{Deserialize, Serialize};

/// Whether new savings must fit inside the available funds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsCap {
    /// Savings are only required to be positive.
    #[default]
    Uncapped,
    /// Each addition may not exceed income minus expenses.
    AvailableFunds,
}

/// Validation rules a [`Ledger`](super::Ledger) applies on top of its invariants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerPolicy {
    pub savings_cap: SavingsCap,
}
