//! Decoding records from a byte source.
//!
//! Fields are read in declaration order into a caller-provided value.
//! Variable-length sequences and text without `nullterm` take their length
//! from a sibling declared with `sizeof=`, which therefore has to come
//! *before* them in the record:
//!
//! ```
//! tagwire::record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Frame {
//!         pub len: u8 => "sizeof=payload",
//!         pub payload: Vec<u16>,
//!         pub note: String => "nullterm",
//!     }
//! }
//!
//! let frame: Frame = tagwire::from_slice_be(&[2, 0, 1, 0, 2, b'o', b'k', 0])?;
//! assert_eq!(frame.payload, [1, 2]);
//! assert_eq!(frame.note, "ok");
//! # Ok::<(), tagwire::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail with these errors:
//! - [`Error::IO`] - the source failed or ended early
//! - [`Error::MissingLengthSource`] - a collection has no earlier length source
//! - [`Error::TextTooLong`] - null-terminated text ran past the configured cap
//! - [`Error::InvalidUtf8`] - text bytes are not UTF-8
//! - [`Error::TrailingData`] - bytes remain after [`from_slice`]

use std::io::{self, Read};

use crate::{
    ByteOrder, Codec, Config, Error, FieldMut, Result, Wire, cold_path,
    endian::MAX_WIDTH,
    traverse::{self, Node, Visitor},
};

/// Upper bound on elements reserved ahead of decoding a sequence.
const MAX_PREALLOCATED: usize = 4096;

/// Reads leaf fields from a byte source.
pub(crate) struct Decoder<'c, R> {
    reader: R,
    config: &'c Config,
}

impl<'c, R: Read> Decoder<'c, R> {
    pub fn new(reader: R, config: &'c Config) -> Self {
        Self { reader, config }
    }

    fn read_terminated(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            self.reader.read_exact(&mut byte)?;
            if byte[0] == 0 {
                return Ok(buf);
            }
            if let Some(max) = self.config.max_text_len.filter(|max| buf.len() >= *max) {
                cold_path();
                return Err(Error::TextTooLong(max));
            }
            buf.push(byte[0]);
        }
    }

    fn read_counted(&mut self, len: u64) -> Result<Vec<u8>> {
        // never trust `len` for the allocation
        let mut buf = Vec::new();
        (&mut self.reader).take(len).read_to_end(&mut buf)?;
        if (buf.len() as u64) < len {
            cold_path();
            return Err(Error::IO(io::ErrorKind::UnexpectedEof.into()));
        }
        Ok(buf)
    }
}

fn missing_length(name: &'static str) -> Error {
    cold_path();
    Error::MissingLengthSource(name)
}

impl<'a, R: Read> Visitor<FieldMut<'a>> for Decoder<'_, R> {
    fn config(&self) -> &Config {
        self.config
    }

    fn visit(&mut self, node: &mut Node<FieldMut<'a>>) -> Result<()> {
        let Node {
            name,
            value,
            order,
            null_terminated,
            length,
            ..
        } = node;
        let (name, order) = (*name, *order);
        match value {
            FieldMut::Scalar(slot) => {
                let width = slot.kind().fixed_width().unwrap_or(0);
                let mut buf = [0u8; MAX_WIDTH];
                self.reader.read_exact(&mut buf[..width])?;
                order.load(slot, &buf[..width]);
                Ok(())
            }
            FieldMut::Array(seq) => {
                for element in seq.elements_mut() {
                    traverse::run(self, element, order)?;
                }
                Ok(())
            }
            FieldMut::Seq(seq) => {
                let len = length.ok_or_else(|| missing_length(name))?;
                let len = usize::try_from(len).map_err(|_| {
                    cold_path();
                    Error::LengthOverflow {
                        field: name,
                        len: usize::MAX,
                    }
                })?;
                seq.clear();
                seq.reserve(len.min(MAX_PREALLOCATED));
                for _ in 0..len {
                    traverse::run(self, seq.push_default(), order)?;
                }
                Ok(())
            }
            FieldMut::Str(text) => {
                let bytes = if *null_terminated {
                    self.read_terminated()?
                } else {
                    let len = length.ok_or_else(|| missing_length(name))?;
                    self.read_counted(len)?
                };
                **text = String::from_utf8(bytes)?;
                Ok(())
            }
            FieldMut::Record(record) => traverse::run(self, FieldMut::Record(&mut **record), order),
            FieldMut::Unsupported(name) => Err(Error::UnsupportedKind(*name)),
        }
    }
}

/// Decodes into `value` from `reader`, using `O` for fields without a byte
/// order directive.
///
/// Variable-length collections are cleared and refilled element by element,
/// so a length larger than the input fails with [`Error::IO`] once the
/// input runs out. On error `value` may be partially overwritten.
///
/// # Example
///
/// ```
/// let mut pair = [0u16; 2];
/// tagwire::decode::<tagwire::BigEndian>(&[0x00, 0x01, 0x12, 0x34][..], &mut pair)?;
/// assert_eq!(pair, [1, 0x1234]);
/// # Ok::<(), tagwire::Error>(())
/// ```
#[inline]
pub fn decode<O: ByteOrder>(reader: impl Read, value: &mut (impl Wire + ?Sized)) -> Result<()> {
    Codec::new(Config::default().with_order(O::ENDIAN)).decode(reader, value)
}

/// Convenience function for decoding with little-endian byte order.
#[inline]
pub fn decode_le(reader: impl Read, value: &mut (impl Wire + ?Sized)) -> Result<()> {
    decode::<crate::LittleEndian>(reader, value)
}

/// Convenience function for decoding with big-endian byte order.
#[inline]
pub fn decode_be(reader: impl Read, value: &mut (impl Wire + ?Sized)) -> Result<()> {
    decode::<crate::BigEndian>(reader, value)
}

/// Decodes a complete value from `bytes`.
///
/// # Errors
///
/// Besides the decoding errors, returns [`Error::TrailingData`] if bytes are
/// left over.
#[inline]
pub fn from_slice<O: ByteOrder, T: Wire + Default>(bytes: &[u8]) -> Result<T> {
    Codec::new(Config::default().with_order(O::ENDIAN)).from_slice(bytes)
}

/// Convenience function for decoding a slice with little-endian byte order.
#[inline]
pub fn from_slice_le<T: Wire + Default>(bytes: &[u8]) -> Result<T> {
    from_slice::<crate::LittleEndian, T>(bytes)
}

/// Convenience function for decoding a slice with big-endian byte order.
#[inline]
pub fn from_slice_be<T: Wire + Default>(bytes: &[u8]) -> Result<T> {
    from_slice::<crate::BigEndian, T>(bytes)
}
