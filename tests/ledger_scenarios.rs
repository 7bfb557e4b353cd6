mod common;

use std::rc::Rc;

use cents_core::alerts::{BufferedSink, FinancialObserver, FinancialSnapshot, FundsAlert};
use cents_core::errors::LedgerError;
use cents_core::ledger::{Ledger, SavingsLedger};

use common::buffered_session;

fn snapshot(available_funds: f64) -> FinancialSnapshot {
    FinancialSnapshot {
        available_funds,
        total_income: 0.0,
        total_expense: 0.0,
        total_savings: 0.0,
    }
}

#[test]
fn income_then_expense_leaves_the_difference_available() {
    let mut ledger = Ledger::new();
    ledger.add_income(100.0).unwrap();
    ledger.add_expense(40.0).unwrap();
    assert_eq!(ledger.available_funds(), 60.0);
}

#[test]
fn income_removal_cannot_strand_expenses() {
    let mut ledger = Ledger::new();
    ledger.add_income(100.0).unwrap();
    ledger.add_expense(80.0).unwrap();

    let err = ledger.remove_income(30.0).unwrap_err();
    assert!(matches!(err, LedgerError::WouldGoNegative { .. }));
    assert_eq!(ledger.total_income(), 100.0);

    ledger.remove_income(10.0).unwrap();
    assert_eq!(ledger.total_income(), 90.0);
    assert_eq!(ledger.total_expense(), 80.0);
    assert_eq!(ledger.available_funds(), 10.0);
}

#[test]
fn transfer_moves_amount_without_changing_total() {
    let mut ledger = Ledger::new();
    let mut savings = SavingsLedger::new();
    savings.add_savings(&mut ledger, 500.0, "car").unwrap();
    savings.add_savings(&mut ledger, 300.0, "trip").unwrap();

    savings.transfer_savings(1, 2, 200.0).unwrap();
    assert_eq!(savings.records()[0].amount(), 300.0);
    assert_eq!(savings.records()[1].amount(), 500.0);
    assert_eq!(ledger.total_savings(), 800.0);
    assert_eq!(savings.total(), 800.0);
}

#[test]
fn funds_alert_follows_threshold() {
    let sink = Rc::new(BufferedSink::new());
    let alert = FundsAlert::new(sink.clone());

    alert.update(&snapshot(3.0)).unwrap();
    assert_eq!(sink.take().len(), 1);
    alert.update(&snapshot(10.0)).unwrap();
    assert!(sink.take().is_empty());

    alert.set_warning_threshold(20.0).unwrap();
    alert.update(&snapshot(15.0)).unwrap();
    assert_eq!(sink.take().len(), 1);
}

#[test]
fn deleting_missing_savings_reports_and_keeps_records() {
    let mut ledger = Ledger::new();
    let mut savings = SavingsLedger::new();
    assert_eq!(
        savings.delete_savings(&mut ledger, 1).unwrap_err(),
        LedgerError::EmptyList
    );

    savings.add_savings(&mut ledger, 40.0, "books").unwrap();
    assert_eq!(
        savings.delete_savings(&mut ledger, 2).unwrap_err(),
        LedgerError::IndexOutOfRange { index: 2, len: 1 }
    );
    assert_eq!(savings.len(), 1);
    assert_eq!(ledger.total_savings(), 40.0);
}

#[test]
fn session_alerts_on_every_low_funds_mutation() {
    let (mut session, sink) = buffered_session();
    session.ledger.add_income(10.0).unwrap();
    session.ledger.add_expense(6.0).unwrap();
    session
        .savings
        .add_savings(&mut session.ledger, 2.0, "")
        .unwrap();

    // Savings do not reduce available funds, but every mutation is observed.
    assert_eq!(session.ledger.available_funds(), 4.0);
    assert_eq!(sink.warnings().len(), 2);
}

#[test]
fn savings_emptied_after_transfers_leave_no_residue() {
    let (mut session, _sink) = buffered_session();
    session.ledger.add_income(50.0).unwrap();
    for (amount, goal) in [(0.1, "coffee"), (0.2, "snacks"), (0.3, "tips")] {
        session
            .savings
            .add_savings(&mut session.ledger, amount, goal)
            .unwrap();
    }
    session.savings.transfer_savings(3, 1, 0.1).unwrap();

    while !session.savings.is_empty() {
        session
            .savings
            .delete_savings(&mut session.ledger, 1)
            .unwrap();
    }
    assert_eq!(session.ledger.total_savings(), 0.0);
    assert_eq!(session.savings.total(), session.ledger.total_savings());
}
