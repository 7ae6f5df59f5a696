use clap::Args;
use itertools::Itertools;
use miette::Result;
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// An input D2I file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// List numeric ids instead of names
    #[arg(long, default_value_t = false)]
    ids: bool,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let i18n = super::open(&self.file)?;

        if self.ids {
            for id in i18n.ids().sorted() {
                println!("{}", id);
            }
        } else {
            for name in i18n.names().sorted() {
                println!("{}", name);
            }
        }

        Ok(())
    }
}
