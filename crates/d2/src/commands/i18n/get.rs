use clap::Args;
use d2_i18n::Lookup;
use miette::{miette, Context, Result};
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args)]
#[command(group(clap::ArgGroup::new("key").required(true).args(["id", "name"])))]
pub struct GetArgs {
    /// An input D2I file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Numeric id of the text
    #[arg(short, long, allow_negative_numbers = true)]
    id: Option<i32>,

    /// Name of the text
    #[arg(short, long)]
    name: Option<String>,

    /// Get the undiacritical variant of a numeric text
    #[arg(short, long, default_value_t = false, requires = "id")]
    undiacritical: bool,
}

impl GetArgs {
    pub fn handle(&self) -> Result<()> {
        let mut i18n = super::open(&self.file)?;

        let (key, lookup) = match (self.id, self.name.as_deref()) {
            (Some(id), _) if self.undiacritical => (id.to_string(), i18n.undiacritical_text(id)),
            (Some(id), _) => (id.to_string(), i18n.text(id)),
            (None, Some(name)) => (name.to_owned(), i18n.named_text(name)),
            (None, None) => return Err(miette!("either an id or a name is required")),
        };

        match lookup {
            Lookup::Found(text) => println!("{}", text),
            Lookup::Missing => {
                warn!("{}", missing_message(&key));
            }
            Lookup::Failed(err) => {
                return Err(err).context(format!("reading text for {}", key));
            }
        }

        Ok(())
    }
}

fn missing_message(key: &str) -> String {
    format!(
        "no text found for {}",
        key.if_supports_color(Stream::Stderr, |k| k.yellow())
    )
}

#[cfg(test)]
mod test {
    use super::missing_message;

    #[test]
    fn missing_message_without_color_support() {
        owo_colors::set_override(false);
        assert_eq!(missing_message("99"), "no text found for 99");
        owo_colors::unset_override();
    }
}
