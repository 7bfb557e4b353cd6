use crate::cli::args::usage;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::output::{section as output_section, separator};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "summary",
        "Show totals, available funds and the savings indicator",
        "summary",
        cmd_summary,
    )]
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("summary"));
    }
    print_summary(context)
}

pub(super) fn print_summary(context: &ShellContext) -> CommandResult {
    let session = &context.session;
    let ledger = &session.ledger;
    output_section("Summary");
    io::print_info(format!("Total income    : {}", format_money(ledger.total_income())));
    io::print_info(format!("Total expense   : {}", format_money(ledger.total_expense())));
    io::print_info(format!("Total savings   : {}", format_money(ledger.total_savings())));
    separator();
    io::print_info(format!(
        "Available funds : {}",
        format_money(ledger.available_funds())
    ));
    io::print_info(format!(
        "Savings status  : {}",
        session.savings.savings_indicator(ledger)
    ));
    if let Some(warning) = session.funds_alert().check(ledger.available_funds()) {
        io::print_warning(warning);
    }
    Ok(())
}
