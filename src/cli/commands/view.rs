use crate::cli::args::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, Subcommand};
use crate::core::services::ExpenseService;

use super::summary;

const USAGE: &str = "view income|expense|savings|summary";

const VIEWS: &[Subcommand] = &[
    Subcommand::word("income"),
    Subcommand::word("expense"),
    Subcommand::word("savings"),
    Subcommand::word("summary"),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "view",
        "List recorded entries or the summary",
        USAGE,
        cmd_view,
    )
    .with_subcommands(VIEWS)]
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind] = args else {
        return Err(usage(USAGE));
    };
    match kind.to_lowercase().as_str() {
        "income" => view_income(context),
        "expense" => view_expense(context),
        "savings" => view_savings(context),
        "summary" => summary::print_summary(context),
        other => Err(CommandError::InvalidArguments(format!(
            "cannot view `{}` (use income, expense, savings or summary)",
            other
        ))),
    }
}

fn view_income(context: &ShellContext) -> CommandResult {
    let incomes = &context.session.incomes;
    output_section("Income");
    if incomes.is_empty() {
        io::print_info("No income recorded.");
        return Ok(());
    }
    for (position, income) in incomes.iter().enumerate() {
        io::print_info(format!(
            "{}. {} ({})",
            position + 1,
            income,
            income.recorded_on
        ));
    }
    io::print_info(format!("Total income: {}", format_money(incomes.total())));
    Ok(())
}

fn view_expense(context: &ShellContext) -> CommandResult {
    let expenses = &context.session.expenses;
    output_section("Expenses");
    if expenses.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(());
    }
    for (position, expense) in expenses.iter().enumerate() {
        io::print_info(format!(
            "{}. {} ({})",
            position + 1,
            expense,
            expense.recorded_on
        ));
    }
    io::print_info(format!("Total expense: {}", format_money(expenses.total())));
    for (category, total) in ExpenseService::totals_by_category(expenses) {
        if total > 0.0 {
            io::print_info(format!("  {:<10} {}", category.label(), format_money(total)));
        }
    }
    Ok(())
}

pub(super) fn view_savings(context: &ShellContext) -> CommandResult {
    let savings = &context.session.savings;
    output_section("Savings");
    if savings.is_empty() {
        io::print_info("No savings recorded.");
        return Ok(());
    }
    for (position, record) in savings.records().iter().enumerate() {
        io::print_info(format!("{}. {}", position + 1, record));
    }
    io::print_info(format!(
        "Total savings: {}",
        format_money(context.session.ledger.total_savings())
    ));
    Ok(())
}
