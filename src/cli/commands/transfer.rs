use crate::cli::args::{parse_amount, parse_index, usage};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::registry::{CommandEntry, Subcommand};

const USAGE: &str = "transfer savings <FROM> <TO> <AMOUNT>";

const KINDS: &[Subcommand] = &[Subcommand::word("savings")];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "transfer",
        "Move an amount between two savings records",
        USAGE,
        cmd_transfer,
    )
    .with_subcommands(KINDS)]
}

fn cmd_transfer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, from, to, amount] = args else {
        return Err(usage(USAGE));
    };
    if !kind.eq_ignore_ascii_case("savings") {
        return Err(usage(USAGE));
    }
    let from = parse_index(from)?;
    let to = parse_index(to)?;
    let amount = parse_amount(amount)?;

    let savings = &mut context.session.savings;
    savings.transfer_savings(from, to, amount)?;
    io::print_success(format!(
        "Transferred {} from savings record {} to {}.",
        format_money(amount),
        from,
        to
    ));
    let records = savings.records();
    io::print_info(format!("{}. {}", from, records[from - 1]));
    io::print_info(format!("{}. {}", to, records[to - 1]));
    Ok(())
}
