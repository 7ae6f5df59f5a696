//! Parsing of the index region of D2I files
//!

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    stream::PrimitiveReader,
    types::{Indexes, Table},
};

/// Size of a numeric record without its undiacritical offset
const NUMERIC_RECORD_SIZE: u64 = 9;

/// Size of an undiacritical offset
const UNDIACRITICAL_OFFSET_SIZE: u64 = 4;

/// Read the index region of a D2I file.
///
/// The stream must be positioned on the index offset, at the start of the file. Any failure aborts
/// the whole parse.
pub fn parse_indexes<S: PrimitiveReader>(stream: &mut S) -> Result<Indexes> {
    let root = stream.read_int32()?;
    stream.goto(to_position(root)?)?;
    debug!(root, "reading index region");

    let mut indexes = Indexes::default();
    parse_numeric_table(stream, &mut indexes)?;
    parse_named_table(stream, &mut indexes)?;
    parse_sort_table(stream, &mut indexes)?;

    // The sort table ends the file.
    let remaining = stream.remaining()?;
    if remaining != 0 {
        return Err(Error::TrailingBytes(remaining));
    }

    Ok(indexes)
}

/// Convert an offset stored in the file into a stream position
pub(crate) fn to_position(offset: i32) -> Result<u64> {
    u64::try_from(offset).map_err(|_| Error::InvalidOffset(offset))
}

/// Read the records of a table until its declared byte length is used up.
///
/// `read_record` returns the number of bytes it consumed. Records must end exactly on the
/// declared length.
fn parse_table<S, F>(stream: &mut S, table: Table, mut read_record: F) -> Result<()>
where
    S: PrimitiveReader,
    F: FnMut(&mut S) -> Result<u64>,
{
    let length = stream.read_int32()?;
    let declared =
        u64::try_from(length).map_err(|_| Error::InvalidTableLength { table, length })?;

    let mut consumed = 0u64;
    let mut records = 0usize;
    while consumed < declared {
        consumed += read_record(stream)?;
        records += 1;
    }

    if consumed != declared {
        return Err(Error::TableLengthMismatch {
            table,
            declared,
            consumed,
        });
    }

    debug!(%table, records, bytes = declared, "parsed table");
    Ok(())
}

fn parse_numeric_table<S: PrimitiveReader>(stream: &mut S, indexes: &mut Indexes) -> Result<()> {
    parse_table(stream, Table::Numeric, |stream| {
        let id = stream.read_int32()?;
        let has_undiacritical = stream.read_boolean()?;
        let offset = stream.read_int32()?;

        let (undiacritical, size) = if has_undiacritical {
            (
                stream.read_int32()?,
                NUMERIC_RECORD_SIZE + UNDIACRITICAL_OFFSET_SIZE,
            )
        } else {
            (offset, NUMERIC_RECORD_SIZE)
        };

        trace!(id, offset, undiacritical, "numeric entry");
        if indexes.insert_text(id, offset, undiacritical).is_some() {
            debug!(id, "duplicate numeric entry, keeping the last one");
        }

        Ok(size)
    })
}

fn parse_named_table<S: PrimitiveReader>(stream: &mut S, indexes: &mut Indexes) -> Result<()> {
    parse_table(stream, Table::Named, |stream| {
        let begin = stream.position()?;
        let name = stream.read_string()?;
        let offset = stream.read_int32()?;
        let end = stream.position()?;

        trace!(%name, offset, "named entry");
        if let Some(previous) = indexes.insert_named(name, offset) {
            debug!(previous, offset, "duplicate named entry, keeping the last one");
        }

        Ok(end.saturating_sub(begin))
    })
}

fn parse_sort_table<S: PrimitiveReader>(stream: &mut S, indexes: &mut Indexes) -> Result<()> {
    let mut rank = 0usize;
    parse_table(stream, Table::Sort, |stream| {
        let begin = stream.position()?;
        let id = stream.read_int32()?;
        let end = stream.position()?;

        rank += 1;
        indexes.insert_rank(id, rank);

        Ok(end.saturating_sub(begin))
    })
}
