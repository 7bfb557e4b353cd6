use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.iter() {
        io::print_info(format!("  {:<10} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
    io::print_info("Separate free text with `/`, e.g. `add expense 12.50 / lunch / F`.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    for (position, usage) in entry.usage.split(" | ").enumerate() {
        let label = if position == 0 { "Usage:" } else { "      " };
        io::print_info(format!("  {} {}", label, usage));
    }
}
