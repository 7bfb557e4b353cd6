use thiserror::Error;

/// Failures raised by ledger, savings and alert operations.
///
/// Every variant is reported before any state is touched, so a caller that
/// receives one of these can assume the ledger is exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid amount {0}: a positive, finite number is required")]
    InvalidAmount(f64),
    #[error("Cannot remove {requested:.2} of income: only {current:.2} has been recorded")]
    InsufficientIncome { requested: f64, current: f64 },
    #[error("Amount {requested:.2} exceeds available funds of {available:.2}")]
    ExceedsAvailableFunds { requested: f64, available: f64 },
    #[error("Cannot remove {requested:.2} of expenses: only {current:.2} has been recorded")]
    ExceedsCurrentExpense { requested: f64, current: f64 },
    #[error("Cannot remove {requested:.2} of savings: only {current:.2} is saved")]
    ExceedsCurrentSavings { requested: f64, current: f64 },
    #[error(
        "Removing {requested:.2} of income would leave available funds at {resulting:.2}. \
         Reduce your expenses first."
    )]
    WouldGoNegative { requested: f64, resulting: f64 },
    #[error("Insufficient funds in the source savings: requested {requested:.2}, holds {available:.2}")]
    InsufficientTransferFunds { requested: f64, available: f64 },
    #[error("Index {index} is out of range (valid: 1 to {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("There are no records to operate on")]
    EmptyList,
    #[error("Cannot transfer savings record {0} onto itself")]
    SameRecord(usize),
    #[error("No savings record holds exactly {0:.2}")]
    NoMatchingRecord(f64),
    #[error("Warning threshold {0} is invalid: it must be a non-negative number")]
    InvalidThreshold(f64),
}

impl LedgerError {
    /// True for the errors signalling that a mutation would break a balance invariant.
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(
            self,
            Self::InsufficientIncome { .. }
                | Self::ExceedsAvailableFunds { .. }
                | Self::ExceedsCurrentExpense { .. }
                | Self::ExceedsCurrentSavings { .. }
                | Self::WouldGoNegative { .. }
                | Self::InsufficientTransferFunds { .. }
        )
    }

    /// True for errors about the shape of a record list rather than its amounts.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::EmptyList)
    }
}

/// Raised by an observer that could not process a ledger update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observer failed: {0}")]
pub struct ObserverError(pub String);

/// Errors produced while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("No configuration directory is available on this platform; set CENTS_CONFIG")]
    MissingConfigDir,
}

/// Top-level error surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_family_is_classified() {
        let err = LedgerError::WouldGoNegative {
            requested: 30.0,
            resulting: -10.0,
        };
        assert!(err.is_insufficient_balance());
        assert!(!err.is_structural());
        assert!(LedgerError::EmptyList.is_structural());
        assert!(!LedgerError::InvalidAmount(-1.0).is_insufficient_balance());
    }

    #[test]
    fn messages_format_amounts_to_two_decimals() {
        let err = LedgerError::ExceedsAvailableFunds {
            requested: 60.5,
            available: 60.0,
        };
        assert_eq!(
            err.to_string(),
            "Amount 60.50 exceeds available funds of 60.00"
        );
        let err = LedgerError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 is out of range (valid: 1 to 2)");
    }
}
