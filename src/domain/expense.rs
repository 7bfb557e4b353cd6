use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use super::common::{Amounted, EntryList};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    #[default]
    Others,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Bills,
        ExpenseCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "FOOD",
            ExpenseCategory::Transport => "TRANSPORT",
            ExpenseCategory::Bills => "BILLS",
            ExpenseCategory::Others => "OTHERS",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid category `{}` (use F (Food), T (Transport), B (Bills), O (Others))",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Accepts the one-letter shorthand or the full name, case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                let label = category.label();
                normalized == label || normalized == label[..1]
            })
            .ok_or_else(|| UnknownCategory(input.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub amount: f64,
    pub description: String,
    pub category: ExpenseCategory,
    pub recorded_on: NaiveDate,
}

impl Expense {
    pub fn new(amount: f64, description: impl Into<String>, category: ExpenseCategory) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            recorded_on: Local::now().date_naive(),
        }
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ${:.2} for {}",
            self.category, self.amount, self.description
        )
    }
}

pub type ExpenseList = EntryList<Expense>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_shorthand_and_full_names() {
        assert_eq!("f".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Food));
        assert_eq!("Transport".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Transport));
        assert_eq!(" B ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Bills));
        assert_eq!("others".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Others));
        assert!("x".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn list_totals_amounts() {
        let mut list = ExpenseList::new();
        list.push(Expense::new(12.5, "lunch", ExpenseCategory::Food));
        list.push(Expense::new(7.5, "bus", ExpenseCategory::Transport));
        assert_eq!(list.total(), 20.0);
        assert_eq!(list.get(1).unwrap().to_string(), "[FOOD] $12.50 for lunch");
    }
}
