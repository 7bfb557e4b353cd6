//! Income and expense entries kept alongside the ledger totals.

pub mod common;
pub mod expense;
pub mod income;

pub use common::{resolve_index, Amounted, EntryList};
pub use expense::{Expense, ExpenseCategory, ExpenseList, UnknownCategory};
pub use income::{Income, IncomeList};
