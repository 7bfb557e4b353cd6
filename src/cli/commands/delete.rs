use crate::cli::args::{parse_index, usage};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::registry::{CommandEntry, ENTRY_KINDS};
use crate::core::services::{ExpenseService, IncomeService};

const USAGE: &str = "delete income|expense|savings <INDEX>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "delete",
        "Remove an income, expense or savings entry by position",
        USAGE,
        cmd_delete,
    )
    .with_subcommands(ENTRY_KINDS)]
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, index] = args else {
        return Err(usage(USAGE));
    };
    let index = parse_index(index)?;
    let session = &mut context.session;

    match kind.to_lowercase().as_str() {
        "income" => {
            let removed = IncomeService::remove(&mut session.ledger, &mut session.incomes, index)?;
            io::print_success(format!("Income deleted: {}", removed));
        }
        "expense" => {
            let removed =
                ExpenseService::remove(&mut session.ledger, &mut session.expenses, index)?;
            io::print_success(format!("Expense deleted: {}", removed));
        }
        "savings" => {
            let removed = session.savings.delete_savings(&mut session.ledger, index)?;
            io::print_success(format!("Savings deleted: {}", removed));
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "cannot delete `{}` (use income, expense or savings)",
                other
            )))
        }
    }

    io::print_info(format!(
        "Available funds: {} | Total savings: {}",
        format_money(context.session.ledger.available_funds()),
        format_money(context.session.ledger.total_savings())
    ));
    Ok(())
}
