use std::rc::Rc;

use dialoguer::theme::ColorfulTheme;

use crate::{
    alerts::AlertSink,
    config::{Config, ConfigManager},
    core::Session,
    errors::CliError,
};

use super::commands;
use super::io::ConsoleAlertSink;
use super::output::{set_preferences, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    /// Loads settings from the default location and prints alerts to the console.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Self::with_parts(mode, config, config_manager, Rc::new(ConsoleAlertSink))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        config_manager: ConfigManager,
        sink: Rc<dyn AlertSink>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        set_preferences(OutputPreferences::from_config(&config));
        let session = Session::new(&config, sink)?;

        Ok(Self {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        "cents> ".to_string()
    }
}
