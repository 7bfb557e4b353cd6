use crate::domain::{Income, IncomeList};
use crate::ledger::Ledger;

use super::{require_text, ServiceResult};

pub struct IncomeService;

impl IncomeService {
    /// Records income in the ledger, then appends the entry.
    pub fn add<'a>(
        ledger: &mut Ledger,
        incomes: &'a mut IncomeList,
        amount: f64,
        source: &str,
    ) -> ServiceResult<&'a Income> {
        let source = require_text(source, "Income source")?;
        ledger.add_income(amount)?;
        incomes.push(Income::new(amount, source));
        Ok(incomes.get(incomes.len())?)
    }

    /// Removes the entry at a one-based position. The entry stays when the
    /// ledger refuses the removal, e.g. because the income was already spent.
    pub fn remove(ledger: &mut Ledger, incomes: &mut IncomeList, index: usize) -> ServiceResult<Income> {
        let amount = incomes.get(index)?.amount;
        ledger.remove_income(amount)?;
        Ok(incomes.remove(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::errors::LedgerError;

    #[test]
    fn add_updates_ledger_and_list() {
        let mut ledger = Ledger::new();
        let mut incomes = IncomeList::new();
        let income = IncomeService::add(&mut ledger, &mut incomes, 500.0, " part-time job ").unwrap();
        assert_eq!(income.source, "part-time job");
        assert_eq!(ledger.total_income(), 500.0);
        assert_eq!(incomes.len(), 1);
    }

    #[test]
    fn invalid_add_changes_nothing() {
        let mut ledger = Ledger::new();
        let mut incomes = IncomeList::new();
        assert!(matches!(
            IncomeService::add(&mut ledger, &mut incomes, 10.0, "  "),
            Err(ServiceError::Invalid(_))
        ));
        assert!(matches!(
            IncomeService::add(&mut ledger, &mut incomes, -10.0, "gift"),
            Err(ServiceError::Ledger(LedgerError::InvalidAmount(_)))
        ));
        assert!(incomes.is_empty());
        assert_eq!(ledger.total_income(), 0.0);
    }

    #[test]
    fn spent_income_cannot_be_removed() {
        let mut ledger = Ledger::new();
        let mut incomes = IncomeList::new();
        IncomeService::add(&mut ledger, &mut incomes, 100.0, "salary").unwrap();
        ledger.add_expense(80.0).unwrap();

        let err = IncomeService::remove(&mut ledger, &mut incomes, 1).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::WouldGoNegative { .. })
        ));
        assert_eq!(incomes.len(), 1);
        assert_eq!(ledger.total_income(), 100.0);
    }

    #[test]
    fn remove_reports_structural_errors() {
        let mut ledger = Ledger::new();
        let mut incomes = IncomeList::new();
        assert!(matches!(
            IncomeService::remove(&mut ledger, &mut incomes, 1),
            Err(ServiceError::Ledger(LedgerError::EmptyList))
        ));
        IncomeService::add(&mut ledger, &mut incomes, 20.0, "gift").unwrap();
        let removed = IncomeService::remove(&mut ledger, &mut incomes, 1).unwrap();
        assert_eq!(removed.amount, 20.0);
        assert_eq!(ledger.total_income(), 0.0);
    }
}
