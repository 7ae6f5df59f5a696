use std::{fs::File, path::Path};

use d2_i18n::{stream::D2iStream, I18nReader};
use miette::{Context, IntoDiagnostic, Result};

pub mod export;
pub mod get;
pub mod list;

#[derive(clap::Subcommand)]
pub enum I18nCommands {
    /// Print a single text
    Get(get::GetArgs),
    /// List the ids or names of a D2I file
    List(list::ListArgs),
    /// Export every text of a D2I file as JSON
    Export(export::ExportArgs),
}

impl I18nCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            I18nCommands::Get(get) => get.handle(),
            I18nCommands::List(list) => list.handle(),
            I18nCommands::Export(export) => export.handle(),
        }
    }
}

fn open(path: &Path) -> Result<I18nReader<D2iStream<File>>> {
    let f = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;

    I18nReader::new(f).context(format!("reading {}", path.display()))
}
