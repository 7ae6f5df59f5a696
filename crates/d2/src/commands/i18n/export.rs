use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufWriter, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct ExportArgs {
    /// An input D2I file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target JSON file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExportArgs {
    pub fn handle(&self) -> Result<()> {
        let mut i18n = super::open(&self.file)?;
        let table = i18n
            .read_all()
            .context(format!("reading texts of {}", &self.file.display()))?;

        info!(
            "writing {} texts to {}",
            table.len(),
            &self.output.display()
        );

        let out = if !self.overwrite {
            File::create_new(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        } else {
            File::create(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        };

        serde_json::to_writer_pretty(BufWriter::new(out), &table).into_diagnostic()?;
        Ok(())
    }
}
