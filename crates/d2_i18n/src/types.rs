use derive_more::derive::{Constructor, Deref, Display};
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tables of the index region, in the order they are stored
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    #[display("numeric")]
    Numeric,
    #[display("named")]
    Named,
    #[display("sort")]
    Sort,
}

/// Offsets of texts by numeric id
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct NumericIndex(HashMap<i32, i32>);

/// Offsets of texts by name
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct NamedIndex(HashMap<String, i32>);

/// Rank of each id in the sort table, starting from 1
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct SortIndex(HashMap<i32, usize>);

/// Every index table of a D2I file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indexes {
    pub(crate) texts: NumericIndex,
    /// Holds the same offset as `texts` for ids without an undiacritical variant
    pub(crate) undiacritical: NumericIndex,
    pub(crate) named: NamedIndex,
    // Reserved: nothing queries it yet, but the table is part of the format.
    #[allow(dead_code)]
    pub(crate) sort: SortIndex,
}

impl Indexes {
    pub(crate) fn insert_text(&mut self, id: i32, offset: i32, undiacritical: i32) -> Option<i32> {
        self.undiacritical.0.insert(id, undiacritical);
        self.texts.0.insert(id, offset)
    }

    pub(crate) fn insert_named(&mut self, name: String, offset: i32) -> Option<i32> {
        self.named.0.insert(name, offset)
    }

    pub(crate) fn insert_rank(&mut self, id: i32, rank: usize) {
        self.sort.0.insert(id, rank);
    }
}

/// Outcome of a single text lookup
///
/// A missing key is not an error: it is reported as [`Lookup::Missing`]. A key that was found but
/// whose text could not be read is reported as [`Lookup::Failed`].
#[derive(Debug)]
pub enum Lookup {
    /// No entry is indexed under the key
    Missing,
    /// The entry was found and read
    Found(String),
    /// The entry was found but reading it failed
    Failed(Error),
}

impl Lookup {
    /// Whether the key is indexed, regardless of whether its text could be read
    pub fn entry_exists(&self) -> bool {
        !matches!(self, Lookup::Missing)
    }

    /// Whether the key is indexed but its text could not be read
    pub fn read_failed(&self) -> bool {
        matches!(self, Lookup::Failed(_))
    }

    /// The text that was read, or an empty string
    pub fn text(&self) -> &str {
        match self {
            Lookup::Found(text) => text,
            _ => "",
        }
    }

    /// The error that occurred while reading the text, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Lookup::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Flag returned by the legacy numeric lookups, set when reading failed.
    pub fn numeric_signal(&self) -> bool {
        self.read_failed()
    }

    /// Flag returned by the legacy named lookup, set when the entry exists.
    pub fn named_signal(&self) -> bool {
        self.entry_exists()
    }

    /// Convert into a result, with missing keys as `None`
    pub fn into_result(self) -> Result<Option<String>> {
        match self {
            Lookup::Missing => Ok(None),
            Lookup::Found(text) => Ok(Some(text)),
            Lookup::Failed(err) => Err(err),
        }
    }
}

impl From<Result<String>> for Lookup {
    fn from(value: Result<String>) -> Self {
        match value {
            Ok(text) => Lookup::Found(text),
            Err(err) => Lookup::Failed(err),
        }
    }
}

/// Every text of a D2I file, read eagerly
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextTable {
    /// Texts by numeric id
    pub texts: BTreeMap<i32, String>,
    /// Undiacritical variants, only for ids that have a distinct one
    pub undiacritical: BTreeMap<i32, String>,
    /// Texts by name
    pub named: BTreeMap<String, String>,
}

impl TextTable {
    /// Number of numeric and named texts
    pub fn len(&self) -> usize {
        self.texts.len() + self.named.len()
    }

    /// Whether this table holds no text
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
