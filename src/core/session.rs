use std::rc::Rc;

use crate::alerts::{AlertSink, FinancialObserver, FundsAlert};
use crate::config::Config;
use crate::domain::{ExpenseList, IncomeList};
use crate::errors::LedgerError;
use crate::ledger::{Ledger, SavingsLedger};

/// Everything one user session works with.
///
/// The savings ledger and the entry lists are separate fields so callers can
/// borrow one of them together with `ledger` mutably, e.g.
/// `session.savings.add_savings(&mut session.ledger, ..)`.
#[derive(Debug)]
pub struct Session {
    pub ledger: Ledger,
    pub savings: SavingsLedger,
    pub incomes: IncomeList,
    pub expenses: ExpenseList,
    funds_alert: Rc<FundsAlert>,
}

impl Session {
    /// Builds an empty session with the funds alert already registered.
    pub fn new(config: &Config, sink: Rc<dyn AlertSink>) -> Result<Self, LedgerError> {
        let funds_alert = Rc::new(FundsAlert::with_threshold(config.warning_threshold, sink)?);
        let mut ledger = Ledger::with_policy(config.ledger_policy());
        let observer: Rc<dyn FinancialObserver> = funds_alert.clone();
        ledger.register_observer(observer);

        Ok(Self {
            ledger,
            savings: SavingsLedger::new(),
            incomes: IncomeList::new(),
            expenses: ExpenseList::new(),
            funds_alert,
        })
    }

    pub fn funds_alert(&self) -> &FundsAlert {
        &self.funds_alert
    }
}
