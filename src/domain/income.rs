use std::fmt;

use chrono::{Local, NaiveDate};

use super::common::{Amounted, EntryList};

#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    pub amount: f64,
    pub source: String,
    pub recorded_on: NaiveDate,
}

impl Income {
    pub fn new(amount: f64, source: impl Into<String>) -> Self {
        Self {
            amount,
            source: source.into(),
            recorded_on: Local::now().date_naive(),
        }
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2} from {}", self.amount, self.source)
    }
}

pub type IncomeList = EntryList<Income>;
