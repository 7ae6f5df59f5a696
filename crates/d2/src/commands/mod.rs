pub mod i18n;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle D2I files
    I18n {
        #[command(subcommand)]
        command: i18n::I18nCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::I18n { command } => command.handle(),
        }
    }
}
