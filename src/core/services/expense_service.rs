use crate::domain::{Expense, ExpenseCategory, ExpenseList};
use crate::ledger::Ledger;

use super::{require_text, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add<'a>(
        ledger: &mut Ledger,
        expenses: &'a mut ExpenseList,
        amount: f64,
        description: &str,
        category: ExpenseCategory,
    ) -> ServiceResult<&'a Expense> {
        let description = require_text(description, "Expense description")?;
        ledger.add_expense(amount)?;
        expenses.push(Expense::new(amount, description, category));
        Ok(expenses.get(expenses.len())?)
    }

    pub fn remove(
        ledger: &mut Ledger,
        expenses: &mut ExpenseList,
        index: usize,
    ) -> ServiceResult<Expense> {
        let amount = expenses.get(index)?.amount;
        ledger.remove_expense(amount)?;
        Ok(expenses.remove(index)?)
    }

    /// Sums expenses per category, in [`ExpenseCategory::ALL`] order.
    pub fn totals_by_category(expenses: &ExpenseList) -> Vec<(ExpenseCategory, f64)> {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| {
                let total = expenses
                    .iter()
                    .filter(|expense| expense.category == category)
                    .map(|expense| expense.amount)
                    .sum();
                (category, total)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::errors::LedgerError;

    fn funded(amount: f64) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_income(amount).unwrap();
        ledger
    }

    #[test]
    fn expense_beyond_available_funds_is_refused() {
        let mut ledger = funded(50.0);
        let mut expenses = ExpenseList::new();
        let err = ExpenseService::add(&mut ledger, &mut expenses, 60.0, "rent", ExpenseCategory::Bills)
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::ExceedsAvailableFunds { .. })
        ));
        assert!(expenses.is_empty());
    }

    #[test]
    fn remove_restores_available_funds() {
        let mut ledger = funded(50.0);
        let mut expenses = ExpenseList::new();
        ExpenseService::add(&mut ledger, &mut expenses, 20.0, "lunch", ExpenseCategory::Food).unwrap();
        ExpenseService::add(&mut ledger, &mut expenses, 5.0, "bus", ExpenseCategory::Transport).unwrap();
        assert_eq!(ledger.available_funds(), 25.0);

        let removed = ExpenseService::remove(&mut ledger, &mut expenses, 1).unwrap();
        assert_eq!(removed.description, "lunch");
        assert_eq!(ledger.available_funds(), 45.0);
        assert_eq!(expenses.get(1).unwrap().description, "bus");
    }

    #[test]
    fn totals_group_by_category() {
        let mut ledger = funded(100.0);
        let mut expenses = ExpenseList::new();
        ExpenseService::add(&mut ledger, &mut expenses, 10.0, "lunch", ExpenseCategory::Food).unwrap();
        ExpenseService::add(&mut ledger, &mut expenses, 15.0, "dinner", ExpenseCategory::Food).unwrap();
        ExpenseService::add(&mut ledger, &mut expenses, 30.0, "power", ExpenseCategory::Bills).unwrap();

        let totals = ExpenseService::totals_by_category(&expenses);
        assert_eq!(totals[0], (ExpenseCategory::Food, 25.0));
        assert_eq!(totals[1], (ExpenseCategory::Transport, 0.0));
        assert_eq!(totals[2], (ExpenseCategory::Bills, 30.0));
    }
}
