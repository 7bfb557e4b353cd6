//! Line sources for the shell. Interactive sessions read through a rustyline
//! editor that completes command and subcommand words; script mode reads
//! stdin. Both feed the same loop.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    history::DefaultHistory,
    Context as ReadlineContext, Editor, Helper, Highlighter, Hinter, Validator,
};

use crate::cli::args::SEGMENT_SEPARATOR;
use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::registry::CommandRegistry;

/// Selects script mode when set; lines are then read from stdin without prompts.
pub const SCRIPT_ENV_VAR: &str = "CENTS_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, config = %context.config_manager.path().display(), "shell starting");
    context.greet();

    match mode {
        CliMode::Interactive => {
            let mut editor = LineEditor::new(&context)?;
            run_loop(&mut context, |context| editor.next_line(context))
        }
        CliMode::Script => {
            let mut lines = io::stdin().lock().lines();
            run_loop(&mut context, |_| lines.next().transpose().map_err(CliError::from))
        }
    }
}

/// Runs lines through the context until the source is exhausted or a
/// command asks to exit. Command failures are reported and the loop goes on.
fn run_loop<F>(context: &mut ShellContext, mut next_line: F) -> Result<(), CliError>
where
    F: FnMut(&ShellContext) -> Result<Option<String>, CliError>,
{
    while context.running {
        let Some(line) = next_line(context)? else {
            break;
        };
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

/// A parsed input line. `/` always stands alone in `args`, so
/// `add savings 40/holiday` yields `["savings", "40", "/", "holiday"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandLine {
    pub(crate) raw_command: String,
    pub(crate) command: String,
    pub(crate) args: Vec<String>,
}

impl CommandLine {
    pub(crate) fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Tokenizes `input` with shell quoting rules. Blank lines yield `None`.
pub(crate) fn parse_command_line(input: &str) -> Result<Option<CommandLine>, CommandError> {
    let tokens = shell_words::split(input)
        .map_err(|err| CommandError::InvalidArguments(format!("cannot read line: {}", err)))?;
    let mut tokens = tokens.into_iter().flat_map(split_separators);
    let Some(raw_command) = tokens.next() else {
        return Ok(None);
    };
    Ok(Some(CommandLine {
        command: raw_command.to_lowercase(),
        raw_command,
        args: tokens.collect(),
    }))
}

fn split_separators(token: String) -> Vec<String> {
    if !token.contains(SEGMENT_SEPARATOR) {
        return vec![token];
    }
    let mut pieces = Vec::new();
    for (position, piece) in token.split(SEGMENT_SEPARATOR).enumerate() {
        if position > 0 {
            pieces.push(SEGMENT_SEPARATOR.to_string());
        }
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
    }
    pieces
}

struct LineEditor {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl LineEditor {
    fn new(context: &ShellContext) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper {
            registry: context.registry.clone(),
        }));
        Ok(Self { editor })
    }

    /// Ctrl-C asks before leaving and yields an empty line when declined.
    fn next_line(&mut self, context: &ShellContext) -> Result<Option<String>, CliError> {
        match self.editor.readline(&context.prompt()) {
            Ok(line) => {
                let entry = line.trim();
                if !entry.is_empty() {
                    self.editor.add_history_entry(entry).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    Ok(None)
                } else {
                    Ok(Some(String::new()))
                }
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandHelper {
    registry: CommandRegistry,
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = complete_line(&self.registry, &line[..pos]);
        let candidates = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: format!("{} ", word),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Start of the word under the cursor and the words that may replace it.
fn complete_line(registry: &CommandRegistry, prefix: &str) -> (usize, Vec<&'static str>) {
    let partial_len: usize = prefix
        .chars()
        .rev()
        .take_while(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    let start = prefix.len() - partial_len;
    let words: Vec<&str> = prefix[..start].split_whitespace().collect();
    (start, registry.completions(&words, &prefix[start..]))
}
