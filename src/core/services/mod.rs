pub mod expense_service;
pub mod income_service;

pub use expense_service::ExpenseService;
pub use income_service::IncomeService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

fn require_text(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ServiceError::Invalid(format!("{field} cannot be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}
