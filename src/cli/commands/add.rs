use crate::cli::args::{parse_amount, split_segments, usage};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::registry::{CommandEntry, ENTRY_KINDS};
use crate::core::services::{ExpenseService, IncomeService};
use crate::domain::ExpenseCategory;

const USAGE: &str = "add income <AMOUNT> / <SOURCE> | add expense <AMOUNT> / <DESCRIPTION> [/ <CATEGORY>] | add savings <AMOUNT> [/ <GOAL>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "add",
        "Record income, an expense or savings",
        USAGE,
        cmd_add,
    )
    .with_subcommands(ENTRY_KINDS)]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((kind, rest)) = args.split_first() else {
        return Err(usage(USAGE));
    };
    let segments = split_segments(rest);
    let Some(amount) = segments.first() else {
        return Err(usage(USAGE));
    };
    let amount = parse_amount(amount)?;

    match kind.to_lowercase().as_str() {
        "income" => add_income(context, amount, &segments[1..]),
        "expense" => add_expense(context, amount, &segments[1..]),
        "savings" => add_savings(context, amount, &segments[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "cannot add `{}` (use income, expense or savings)",
            other
        ))),
    }
}

fn add_income(context: &mut ShellContext, amount: f64, text: &[String]) -> CommandResult {
    let source = text
        .first()
        .ok_or_else(|| usage("add income <AMOUNT> / <SOURCE>"))?;
    let session = &mut context.session;
    let income = IncomeService::add(&mut session.ledger, &mut session.incomes, amount, source)?;
    io::print_success(format!("Income added: {}", income));
    print_available(context);
    Ok(())
}

fn add_expense(context: &mut ShellContext, amount: f64, text: &[String]) -> CommandResult {
    let description = text
        .first()
        .ok_or_else(|| usage("add expense <AMOUNT> / <DESCRIPTION> [/ <CATEGORY>]"))?;
    let category = match text.get(1).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<ExpenseCategory>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?,
        None => ExpenseCategory::default(),
    };
    let session = &mut context.session;
    let expense = ExpenseService::add(
        &mut session.ledger,
        &mut session.expenses,
        amount,
        description,
        category,
    )?;
    io::print_success(format!("Expense added: {}", expense));
    print_available(context);
    Ok(())
}

fn add_savings(context: &mut ShellContext, amount: f64, text: &[String]) -> CommandResult {
    let goal = text.first().map(String::as_str).unwrap_or("");
    let session = &mut context.session;
    let record = session.savings.add_savings(&mut session.ledger, amount, goal)?;
    io::print_success(format!("Savings added: {}", record));
    io::print_info(format!(
        "Total savings: {}",
        format_money(context.session.ledger.total_savings())
    ));
    Ok(())
}

fn print_available(context: &ShellContext) {
    io::print_info(format!(
        "Available funds: {}",
        format_money(context.session.ledger.available_funds())
    ));
}
