//! # D2I Format Documentation
//!
//! This crate provides utilities to read localized texts from the **D2I** format used by
//! the game *Dofus*. The D2I format is a custom binary format that stores every translated string
//! of a language within a single file, along with index tables to find them by numeric id or by name.
//! D2I files are typically identified with the `.d2i` extension.
//!
//! Strings are never loaded up front. Only the index tables are parsed when the file is opened,
//! and each lookup seeks to the recorded offset and decodes a single string.
//!
//! ## File Structure
//!
//! A D2I file starts with the offset of its index region, followed by the string records, and
//! finally the index region itself: a numeric table, a named table and a sort table.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Index Offset           | 4 bytes: Absolute offset of the numeric table              |
//! | 0x0004         | Strings                | Length-prefixed string records, referenced by offset       |
//!
//! ### Strings
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Length                 | 2 bytes: Number of bytes in the string                  |
//! | 0x0002         | Data                   | (Length) bytes: UTF8 string                             |
//!
//! ### Numeric Table
//!
//! The table starts with a 4 byte length holding the size in bytes of the records that follow,
//! not their count. Each record has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | ID                     | 4 bytes: Identifier of the text                         |
//! | 0x0004         | Undiacritical Flag     | 1 byte: Whether an undiacritical variant is stored      |
//! | 0x0005         | Offset                 | 4 bytes: Offset of the text                             |
//! | 0x0009         | Undiacritical Offset   | 4 bytes: Only present when the flag is set              |
//!
//! When the flag is not set, the undiacritical variant of the text is the text itself.
//!
//! ### Named Table
//!
//! A 4 byte length in bytes, then records of:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | Length-prefixed UTF8 string                             |
//! | 0x0000 + N     | Offset                 | 4 bytes: Offset of the text                             |
//!
//! ### Sort Table
//!
//! A 4 byte length in bytes, then a sequence of 4 byte IDs. The position of an ID in this
//! sequence is its sort rank, starting from 1.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.d2i`
//! - **Endianness**: Big-endian for all multi-byte integers
//!

pub mod error;
pub mod parse;
pub mod read;
pub mod stream;
pub mod types;

pub use read::I18nReader;
pub use types::Lookup;
