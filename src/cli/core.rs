//! Dispatch, error reporting and shell context helpers.

use std::io;

use strsim::levenshtein;

use crate::core::services::ServiceError;
use crate::errors::{ConfigError, LedgerError};
pub use crate::errors::CliError;

use super::io as cli_io;
use super::shell::{parse_command_line, CommandLine};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    /// Startup banner followed by the funds alert announcement.
    pub(crate) fn greet(&self) {
        cli_io::print_info(format!(
            "Welcome to Cents {}. Type `help` to see available commands.",
            env!("CARGO_PKG_VERSION")
        ));
        self.session.funds_alert().display_initial_notification();
    }

    /// Parses and runs one input line. Blank lines are skipped.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let Some(line) = parse_command_line(line)? else {
            return Ok(LoopControl::Continue);
        };
        tracing::debug!(command = %line.command, "dispatching command");
        let control = self.dispatch(&line)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    fn dispatch(&mut self, line: &CommandLine) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(&line.command) else {
            self.suggest_command(&line.raw_command);
            return Ok(LoopControl::Continue);
        };
        let handler = entry.handler;
        match handler(self, &line.args()) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = closest_command(self.registry.names(), input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit Cents?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Ledger(err) if err.is_structural() => {
                self.print_error(&err.to_string());
                self.print_hint("Use `view income`, `view expense` or `view savings` to see valid positions.");
                Ok(())
            }
            CommandError::Ledger(err) if err.is_insufficient_balance() => {
                self.print_error(&err.to_string());
                self.print_hint("Use `summary` to review your current totals.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

/// Nearest registered name within a small edit distance of `input`.
pub(crate) fn closest_command<'a>(
    names: impl Iterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let input = input.to_lowercase();
    names
        .map(|name| (levenshtein(name, &input), name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, name)| name)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Ledger(err) => CommandError::Ledger(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Ledger(err) => CliError::Ledger(err),
            CommandError::Config(err) => CliError::Config(err),
            other => CliError::Command(other.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) fn script_context(sink: std::rc::Rc<dyn crate::alerts::AlertSink>) -> ShellContext {
    use crate::config::{Config, ConfigManager};

    let config = Config {
        plain_output: true,
        ..Config::default()
    };
    let manager = ConfigManager::with_path(
        std::env::temp_dir()
            .join("cents-core-unit")
            .join("config.json"),
    );
    ShellContext::with_parts(CliMode::Script, config, manager, sink).unwrap()
}

/// Runs `lines` like script mode does, reporting failures and carrying on.
#[cfg(test)]
pub(crate) fn process_script(
    context: &mut ShellContext,
    lines: &[&str],
) -> Result<LoopControl, CliError> {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => return Ok(LoopControl::Exit),
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(LoopControl::Continue)
}
