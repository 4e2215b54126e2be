//! Error types for measuring, encoding and decoding records.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur while walking a record.
//!
//! Every error is fatal: the first failure aborts the whole traversal and
//! nothing already written to a sink is rolled back.
//!
//! # Example
//!
//! ```
//! use tagwire::{Error, Result, decode_le};
//!
//! fn read_count(data: &[u8]) -> Result<u32> {
//!     let mut count = 0u32;
//!     match decode_le(data, &mut count) {
//!         Ok(()) => Ok(count),
//!         Err(Error::IO(error)) => {
//!             println!("source failed: {error}");
//!             Err(Error::IO(error))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert_eq!(read_count(&[1, 0, 0, 0]).unwrap(), 1);
//! assert!(read_count(&[1, 0]).is_err());
//! ```

use std::string::FromUtf8Error;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when measuring,
/// writing or reading a record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field's type has no wire representation.
    #[error("unsupported type: {0}")]
    UnsupportedKind(&'static str),

    /// A variable-length field was decoded before any sibling supplied its length.
    ///
    /// Length sources must be declared before the collection they size for
    /// decoding to succeed.
    #[error("no length source for field `{0}`")]
    MissingLengthSource(&'static str),

    /// The underlying sink or source failed.
    ///
    /// Truncated input surfaces here as [`std::io::ErrorKind::UnexpectedEof`].
    #[error("i/o failure: {0}")]
    IO(#[from] std::io::Error),

    /// A directive token could not be parsed.
    ///
    /// Only produced when strict directive parsing is enabled in
    /// [`Config`](crate::Config).
    #[error("malformed directive `{token}` in `{tag}`")]
    MalformedAnnotation { tag: String, token: String },

    /// A `sizeof=` directive names something that is not a sibling collection.
    #[error("field `{field}` declares the length of `{target}`, which is not a sibling collection")]
    InvalidLengthTarget { field: &'static str, target: String },

    /// A `sizeof=` directive was placed on a field that cannot hold a count.
    #[error("length source `{0}` is not an integer field")]
    InvalidLengthSource(&'static str),

    /// The live length of a collection does not fit its length source.
    #[error("length {len} does not fit length source `{field}`")]
    LengthOverflow { field: &'static str, len: usize },

    /// A null-terminated text field contains a zero byte, which would end it
    /// early when decoded.
    #[error("null-terminated text in field `{0}` contains a zero byte")]
    InteriorNul(&'static str),

    /// A record reports a different number of field handles than schema entries.
    #[error("record schema lists {schema} fields but {fields} were provided")]
    SchemaMismatch { schema: usize, fields: usize },

    /// A null-terminated text field ran past the configured limit.
    #[error("null-terminated text exceeds {0} bytes")]
    TextTooLong(usize),

    /// Decoded text was not valid UTF-8.
    #[error("invalid UTF-8 in text field: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Extra bytes remain after decoding a complete value.
    #[error("trailing data after end of input: {0} bytes remaining")]
    TrailingData(usize),
}
