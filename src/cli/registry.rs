//! Command table for the shell. Each entry lists the words accepted after
//! its name so the line editor can complete `savings goal update` as readily
//! as `savings`.

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A word accepted right after a command, with the words that may follow it.
#[derive(Debug, Clone, Copy)]
pub struct Subcommand {
    pub word: &'static str,
    pub follow: &'static [&'static str],
}

impl Subcommand {
    pub const fn word(word: &'static str) -> Self {
        Self { word, follow: &[] }
    }

    pub const fn nested(word: &'static str, follow: &'static [&'static str]) -> Self {
        Self { word, follow }
    }
}

/// Ledger kinds shared by `add`, `delete` and `view`.
pub const ENTRY_KINDS: &[Subcommand] = &[
    Subcommand::word("income"),
    Subcommand::word("expense"),
    Subcommand::word("savings"),
];

#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub subcommands: &'static [Subcommand],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            subcommands: &[],
            handler,
        }
    }

    pub fn with_subcommands(self, subcommands: &'static [Subcommand]) -> Self {
        Self {
            subcommands,
            ..self
        }
    }

    /// Words that may come next once `typed` has been entered after the name.
    fn next_words(&self, typed: &[&str]) -> Vec<&'static str> {
        match typed {
            [] => self.subcommands.iter().map(|sub| sub.word).collect(),
            [first] => self
                .subcommands
                .iter()
                .find(|sub| sub.word.eq_ignore_ascii_case(first))
                .map(|sub| sub.follow.to_vec())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Commands in registration order. Registering a name again replaces the
/// earlier entry where it stands.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|known| known.name == entry.name) {
            Some(known) => *known = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Candidates for the word being typed, given the complete words before it.
    pub fn completions(&self, words: &[&str], partial: &str) -> Vec<&'static str> {
        let partial = partial.to_ascii_lowercase();
        let candidates = match words.split_first() {
            None => self.names().collect(),
            Some((command, typed)) => self
                .get(&command.to_ascii_lowercase())
                .map(|entry| entry.next_words(typed))
                .unwrap_or_default(),
        };
        candidates
            .into_iter()
            .filter(|word| word.starts_with(&partial))
            .collect()
    }
}
