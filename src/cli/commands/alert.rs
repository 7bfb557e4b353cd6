use crate::cli::args::{parse_amount, usage};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::registry::{CommandEntry, Subcommand};

const USAGE: &str = "alert set <AMOUNT> | alert show";

const ACTIONS: &[Subcommand] = &[Subcommand::word("set"), Subcommand::word("show")];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "alert",
        "Show or change the low-funds warning threshold",
        USAGE,
        cmd_alert,
    )
    .with_subcommands(ACTIONS)]
}

fn cmd_alert(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_alert(context),
        [action] if action.eq_ignore_ascii_case("show") => show_alert(context),
        [action, amount] if action.eq_ignore_ascii_case("set") => set_alert(context, amount),
        _ => Err(usage(USAGE)),
    }
}

fn set_alert(context: &mut ShellContext, amount: &str) -> CommandResult {
    let threshold = parse_amount(amount)?;
    let alert = context.session.funds_alert();
    alert.set_warning_threshold(threshold)?;
    context.config.warning_threshold = threshold;
    io::print_success(format!(
        "Warning threshold set to {}.",
        format_money(threshold)
    ));
    if let Some(warning) = alert.check(context.session.ledger.available_funds()) {
        io::print_warning(warning);
    }
    Ok(())
}

fn show_alert(context: &ShellContext) -> CommandResult {
    let alert = context.session.funds_alert();
    io::print_info(format!(
        "Warning threshold: {} (available funds: {})",
        format_money(alert.warning_threshold()),
        format_money(context.session.ledger.available_funds())
    ));
    Ok(())
}
