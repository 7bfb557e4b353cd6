pub mod add;
pub mod alert;
pub mod config;
pub mod delete;
pub mod savings;
pub mod summary;
pub mod system;
pub mod transfer;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = system::definitions()
        .into_iter()
        .chain(add::definitions())
        .chain(delete::definitions())
        .chain(view::definitions())
        .chain(summary::definitions())
        .chain(savings::definitions())
        .chain(transfer::definitions())
        .chain(alert::definitions())
        .chain(config::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}
