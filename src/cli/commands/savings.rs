use crate::cli::args::{parse_amount, parse_index, split_segments, usage};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::registry::{CommandEntry, Subcommand};
use crate::errors::LedgerError;
use crate::ledger::SavingsIndicator;

use super::view;

const USAGE: &str = "savings goal set <AMOUNT> / <GOAL> | savings goal update <INDEX> <AMOUNT> / <GOAL> | savings goal delete <INDEX> | savings goal view | savings indicator";

const ACTIONS: &[Subcommand] = &[
    Subcommand::nested("goal", &["set", "update", "delete", "view"]),
    Subcommand::word("indicator"),
];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "savings",
        "Manage savings goals and check the savings indicator",
        USAGE,
        cmd_savings,
    )
    .with_subcommands(ACTIONS)]
}

fn cmd_savings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|value| value.to_lowercase()).as_deref() {
        Some("goal") => cmd_goal(context, &args[1..]),
        Some("indicator") => show_indicator(context),
        _ => Err(usage(USAGE)),
    }
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(usage(USAGE));
    };
    match action.to_lowercase().as_str() {
        "set" => set_goal(context, rest),
        "update" => update_goal(context, rest),
        "delete" => delete_goal(context, rest),
        "view" => view::view_savings(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown goal action `{}` (use set, update, delete or view)",
            other
        ))),
    }
}

/// `set <AMOUNT> / <GOAL>` tags the first record holding exactly that amount.
fn set_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let segments = split_segments(args);
    let [amount, goal] = segments.as_slice() else {
        return Err(usage("savings goal set <AMOUNT> / <GOAL>"));
    };
    let amount = parse_amount(amount)?;
    let record = context.session.savings.set_savings_goal(amount, goal)?;
    io::print_success(format!("Savings goal set: {}", record));
    Ok(())
}

/// `update <INDEX> <AMOUNT> / <GOAL>` replaces amount and goal of one record.
fn update_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const UPDATE_USAGE: &str = "savings goal update <INDEX> <AMOUNT> / <GOAL>";
    let Some((index, rest)) = args.split_first() else {
        return Err(usage(UPDATE_USAGE));
    };
    let index = parse_index(index)?;
    let segments = split_segments(rest);
    let Some(amount) = segments.first() else {
        return Err(usage(UPDATE_USAGE));
    };
    let amount = parse_amount(amount)?;
    let goal = segments.get(1).map(String::as_str).unwrap_or("");

    let session = &mut context.session;
    let position = index.checked_sub(1).ok_or(LedgerError::IndexOutOfRange {
        index,
        len: session.savings.len(),
    })?;
    let record = session
        .savings
        .update_savings_goal(&mut session.ledger, position, amount, goal)?;
    io::print_success(format!("Savings record {} updated: {}", index, record));
    io::print_info(format!(
        "Total savings: {}",
        format_money(context.session.ledger.total_savings())
    ));
    Ok(())
}

fn delete_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [index] = args else {
        return Err(usage("savings goal delete <INDEX>"));
    };
    let index = parse_index(index)?;
    if context.session.savings.delete_savings_goal(index)? {
        io::print_success(format!("Goal removed from savings record {}.", index));
    } else {
        io::print_info(format!("Savings record {} has no goal to remove.", index));
    }
    Ok(())
}

fn show_indicator(context: &ShellContext) -> CommandResult {
    let ledger = &context.session.ledger;
    let indicator = context.session.savings.savings_indicator(ledger);
    if indicator == SavingsIndicator::NoIncome {
        io::print_info("No income recorded yet. Add income before checking the savings indicator.");
        return Ok(());
    }
    let message = format!(
        "Savings indicator: {} ({} saved of {} income)",
        indicator,
        format_money(ledger.total_savings()),
        format_money(ledger.total_income())
    );
    match indicator {
        SavingsIndicator::Good => io::print_success(message),
        SavingsIndicator::Bad => io::print_warning(message),
        _ => io::print_info(message),
    }
    Ok(())
}
