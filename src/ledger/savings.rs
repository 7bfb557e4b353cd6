use std::fmt;

use crate::domain::resolve_index;
use crate::errors::LedgerError;

use super::ledger::{ensure_non_negative, ensure_positive, Ledger};

/// Goal text stored on records that have no goal.
pub const NO_GOAL: &str = "(savings goal not provided)";

/// Record sums at or below this are rounding residue, not money.
const DRIFT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsRecord {
    amount: f64,
    goal: String,
}

impl SavingsRecord {
    fn new(amount: f64, goal: &str) -> Self {
        Self {
            amount,
            goal: normalize_goal(goal),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn has_goal(&self) -> bool {
        self.goal != NO_GOAL
    }
}

impl fmt::Display for SavingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ${:.2}", self.goal, self.amount)
    }
}

/// Classification of total savings relative to total income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsIndicator {
    /// Savings are at least 80% of income.
    Good,
    Neutral,
    /// Savings are under 50% of income.
    Bad,
    NoIncome,
}

impl fmt::Display for SavingsIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SavingsIndicator::Good => "Good",
            SavingsIndicator::Neutral => "Neutral",
            SavingsIndicator::Bad => "Bad",
            SavingsIndicator::NoIncome => "No income recorded",
        };
        f.write_str(label)
    }
}

/// Goal-tagged savings records whose amounts always sum to the ledger's
/// total savings.
///
/// The ledger is passed into each call rather than stored, so a record change
/// and its matching ledger adjustment happen inside one `&mut` borrow. Any
/// change to the sum is routed through [`Ledger::add_savings`] or
/// [`Ledger::remove_savings`] before the records are touched; if the ledger
/// refuses, the records stay as they were.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsLedger {
    records: Vec<SavingsRecord>,
}

impl SavingsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SavingsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of record amounts.
    pub fn total(&self) -> f64 {
        self.records.iter().map(SavingsRecord::amount).sum()
    }

    fn total_without(&self, index: usize) -> f64 {
        self.records
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, record)| record.amount)
            .sum()
    }

    /// Appends a record; a blank goal is stored as [`NO_GOAL`].
    pub fn add_savings(
        &mut self,
        ledger: &mut Ledger,
        amount: f64,
        goal: &str,
    ) -> Result<&SavingsRecord, LedgerError> {
        ensure_positive(amount)?;
        ledger.add_savings(amount)?;
        self.records.push(SavingsRecord::new(amount, goal));
        tracing::debug!(amount, records = self.records.len(), "savings record added");
        Ok(&self.records[self.records.len() - 1])
    }

    /// Removes the record at a one-based position.
    pub fn delete_savings(
        &mut self,
        ledger: &mut Ledger,
        one_based: usize,
    ) -> Result<SavingsRecord, LedgerError> {
        let index = resolve_index(one_based, self.records.len())?;
        let amount = self.records[index].amount;
        let settled = settlement(amount, self.total_without(index), ledger.total_savings());
        // Transfers can empty a record, and the ledger refuses zero amounts.
        if settled > 0.0 {
            ledger.remove_savings(settled)?;
        }
        let removed = self.records.remove(index);
        tracing::debug!(amount, records = self.records.len(), "savings record deleted");
        Ok(removed)
    }

    /// Replaces the goal of the first record whose amount equals `amount` exactly.
    pub fn set_savings_goal(
        &mut self,
        amount: f64,
        goal: &str,
    ) -> Result<&SavingsRecord, LedgerError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.amount == amount)
            .ok_or(LedgerError::NoMatchingRecord(amount))?;
        record.goal = normalize_goal(goal);
        Ok(record)
    }

    /// Replaces amount and goal of the record at a zero-based position,
    /// settling the difference with the ledger in a single call.
    pub fn update_savings_goal(
        &mut self,
        ledger: &mut Ledger,
        index: usize,
        new_amount: f64,
        goal: &str,
    ) -> Result<&SavingsRecord, LedgerError> {
        ensure_non_negative(new_amount)?;
        let len = self.records.len();
        let old_amount = self
            .records
            .get(index)
            .map(SavingsRecord::amount)
            .ok_or(LedgerError::IndexOutOfRange {
                index: index.saturating_add(1),
                len,
            })?;

        let delta = new_amount - old_amount;
        if delta > 0.0 {
            ledger.add_savings(delta)?;
        } else if delta < 0.0 {
            let remaining = self.total_without(index) + new_amount;
            let settled = settlement(-delta, remaining, ledger.total_savings());
            if settled > 0.0 {
                ledger.remove_savings(settled)?;
            }
        }

        let record = &mut self.records[index];
        record.amount = new_amount;
        record.goal = normalize_goal(goal);
        tracing::debug!(index, old_amount, new_amount, "savings record updated");
        Ok(record)
    }

    /// Clears the goal of the record at a one-based position. Returns `false`
    /// when the record had no goal to clear.
    pub fn delete_savings_goal(&mut self, one_based: usize) -> Result<bool, LedgerError> {
        let len = self.records.len();
        let record = one_based
            .checked_sub(1)
            .and_then(|index| self.records.get_mut(index))
            .ok_or(LedgerError::IndexOutOfRange {
                index: one_based,
                len,
            })?;
        if !record.has_goal() {
            return Ok(false);
        }
        record.goal = NO_GOAL.to_string();
        Ok(true)
    }

    /// Moves `amount` between two records given by one-based positions. The
    /// sum of all records is unchanged, so the ledger is not involved.
    pub fn transfer_savings(
        &mut self,
        from: usize,
        to: usize,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let len = self.records.len();
        for position in [from, to] {
            if position == 0 || position > len {
                return Err(LedgerError::IndexOutOfRange {
                    index: position,
                    len,
                });
            }
        }
        if from == to {
            return Err(LedgerError::SameRecord(from));
        }
        ensure_non_negative(amount)?;
        let available = self.records[from - 1].amount;
        if available < amount {
            return Err(LedgerError::InsufficientTransferFunds {
                requested: amount,
                available,
            });
        }

        self.records[from - 1].amount -= amount;
        self.records[to - 1].amount += amount;
        tracing::debug!(from, to, amount, "savings transferred");
        Ok(())
    }

    /// Rates total savings against total income.
    pub fn savings_indicator(&self, ledger: &Ledger) -> SavingsIndicator {
        let income = ledger.total_income();
        if income == 0.0 {
            return SavingsIndicator::NoIncome;
        }
        let ratio = ledger.total_savings() / income;
        if ratio >= 0.8 {
            SavingsIndicator::Good
        } else if ratio < 0.5 {
            SavingsIndicator::Bad
        } else {
            SavingsIndicator::Neutral
        }
    }
}

/// Amount the ledger releases when `amount` leaves the records and
/// `remaining` stays behind. Once nothing but transfer drift remains, the
/// whole ledger total is released so an empty list settles at zero.
fn settlement(amount: f64, remaining: f64, total_savings: f64) -> f64 {
    if remaining <= DRIFT_TOLERANCE {
        total_savings
    } else {
        amount.min(total_savings)
    }
}

fn normalize_goal(goal: &str) -> String {
    let trimmed = goal.trim();
    if trimmed.is_empty() {
        NO_GOAL.to_string()
    } else {
        trimmed.to_string()
    }
}
