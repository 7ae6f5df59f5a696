//! Types for reading D2I files
//!

use std::io::{Read, Seek};
use tracing::debug;

use crate::{
    error::Result,
    parse::{parse_indexes, to_position},
    stream::{D2iStream, PrimitiveReader},
    types::{Indexes, Lookup, TextTable},
};

/// D2I file reader
///
/// Only the index tables are held in memory. Every lookup seeks the underlying stream and reads
/// one string, so lookups need exclusive access to the reader. To share a reader between threads,
/// wrap it in a [`std::sync::Mutex`] or open one reader per thread.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn print_help(reader: impl Read + Seek) -> d2_i18n::error::Result<()> {
///     let mut i18n = d2_i18n::I18nReader::new(reader)?;
///
///     if let Some(text) = i18n.named_text("ui.chat.console.noHelp").into_result()? {
///         println!("{}", text);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct I18nReader<S> {
    stream: S,
    indexes: Indexes,
}

impl<R: Read + Seek> I18nReader<D2iStream<R>> {
    /// Read the index tables of a D2I file.
    ///
    /// The reader must be positioned at the start of the file.
    pub fn new(reader: R) -> Result<Self> {
        Self::from_stream(D2iStream::new(reader))
    }
}

impl<S: PrimitiveReader> I18nReader<S> {
    /// Read the index tables from a primitive stream.
    pub fn from_stream(mut stream: S) -> Result<Self> {
        let indexes = parse_indexes(&mut stream)?;
        debug!(
            texts = indexes.texts.len(),
            named = indexes.named.len(),
            "opened i18n file"
        );

        Ok(I18nReader { stream, indexes })
    }

    /// Number of texts indexed by numeric id
    pub fn len(&self) -> usize {
        self.indexes.texts.len()
    }

    /// Whether this file indexes no text by numeric id
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of texts indexed by name
    pub fn named_len(&self) -> usize {
        self.indexes.named.len()
    }

    /// Returns an iterator over all the numeric ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.indexes.texts.keys().copied()
    }

    /// Returns an iterator over all the names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indexes.named.keys().map(|s| s.as_str())
    }

    /// Whether a text is indexed under `id`
    pub fn contains_id(&self, id: i32) -> bool {
        self.indexes.texts.contains_key(&id)
    }

    /// Whether a text is indexed under `name`
    pub fn contains_name(&self, name: &str) -> bool {
        self.indexes.named.contains_key(name)
    }

    /// Whether the text under `id` has its own undiacritical variant
    pub fn has_undiacritical_variant(&self, id: i32) -> bool {
        match (
            self.indexes.texts.get(&id),
            self.indexes.undiacritical.get(&id),
        ) {
            (Some(offset), Some(undiacritical)) => offset != undiacritical,
            _ => false,
        }
    }

    /// Get the text indexed under `id`
    pub fn text(&mut self, id: i32) -> Lookup {
        match self.indexes.texts.get(&id).copied() {
            Some(offset) => self.read_at(offset),
            None => Lookup::Missing,
        }
    }

    /// Get the undiacritical variant of the text indexed under `id`.
    ///
    /// This is the text itself when no variant is stored.
    pub fn undiacritical_text(&mut self, id: i32) -> Lookup {
        match self.indexes.undiacritical.get(&id).copied() {
            Some(offset) => self.read_at(offset),
            None => Lookup::Missing,
        }
    }

    /// Get the text indexed under `name`
    pub fn named_text(&mut self, name: &str) -> Lookup {
        match self.indexes.named.get(name).copied() {
            Some(offset) => self.read_at(offset),
            None => Lookup::Missing,
        }
    }

    /// Read every text of this file.
    ///
    /// Undiacritical variants are only included for ids that have their own. Fails on the first
    /// text that cannot be read.
    pub fn read_all(&mut self) -> Result<TextTable> {
        let mut table = TextTable::default();

        let texts: Vec<(i32, i32, i32)> = self
            .indexes
            .texts
            .iter()
            .map(|(&id, &offset)| {
                let undiacritical = self.indexes.undiacritical.get(&id).copied();
                (id, offset, undiacritical.unwrap_or(offset))
            })
            .collect();

        for (id, offset, undiacritical) in texts {
            table.texts.insert(id, self.read_string_at(offset)?);
            if undiacritical != offset {
                table
                    .undiacritical
                    .insert(id, self.read_string_at(undiacritical)?);
            }
        }

        let named: Vec<(String, i32)> = self
            .indexes
            .named
            .iter()
            .map(|(name, &offset)| (name.clone(), offset))
            .collect();

        for (name, offset) in named {
            let text = self.read_string_at(offset)?;
            table.named.insert(name, text);
        }

        Ok(table)
    }

    /// Unwrap and return the inner stream
    ///
    /// The position of the stream is undefined.
    pub fn into_inner(self) -> S {
        self.stream
    }

    fn read_at(&mut self, offset: i32) -> Lookup {
        self.read_string_at(offset).into()
    }

    fn read_string_at(&mut self, offset: i32) -> Result<String> {
        self.stream.goto(to_position(offset)?)?;
        self.stream.read_string()
    }
}
