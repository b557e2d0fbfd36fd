use anyhow::Result;

use crate::StartupContext;

pub mod args;
pub mod highlight;
pub mod models;

pub use args::{Cli, Commands, ModelCommands};
pub use highlight::handle_highlight_command;
pub use models::handle_models_command;

pub fn run(startup: &StartupContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Models { command } => handle_models_command(startup, command),
        Commands::Highlight { file, lang, theme } => {
            handle_highlight_command(startup, file, lang.as_deref(), theme.as_deref())
        }
    }
}
