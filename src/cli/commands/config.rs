use crate::cli::args::usage;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io::{self, format_money};
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, Subcommand};
use crate::ledger::SavingsCap;

const USAGE: &str = "config show | config save";

const ACTIONS: &[Subcommand] = &[Subcommand::word("show"), Subcommand::word("save")];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or save the current preferences",
        USAGE,
        cmd_config,
    )
    .with_subcommands(ACTIONS)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action] if action.eq_ignore_ascii_case("save") => save_config(context),
        _ => Err(usage(USAGE)),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    let cap = match context.session.ledger.policy().savings_cap {
        SavingsCap::Uncapped => "uncapped",
        SavingsCap::AvailableFunds => "limited to available funds",
    };
    output_section("Configuration");
    io::print_info(format!(
        "  File              : {}",
        context.config_manager.path().display()
    ));
    io::print_info(format!(
        "  Warning threshold : {}",
        format_money(config.warning_threshold)
    ));
    io::print_info(format!("  Savings           : {}", cap));
    io::print_info(format!("  Plain output      : {}", config.plain_output));
    io::print_info(format!("  Quiet             : {}", config.quiet));
    Ok(())
}

fn save_config(context: &ShellContext) -> CommandResult {
    context.config_manager.save(&context.config)?;
    io::print_success(format!(
        "Configuration saved to {}.",
        context.config_manager.path().display()
    ));
    Ok(())
}
