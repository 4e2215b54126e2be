//! Encoding records to a byte sink.
//!
//! The wire format is the plain concatenation of every leaf field in
//! declaration order: no framing, no padding. Fixed-width values use the
//! resolved byte order, text is written verbatim (plus one zero byte when
//! `nullterm`), and collections carry no length of their own. Their length
//! lives in the sibling declared with `sizeof=`.
//!
//! # Quick Start
//!
//! ```
//! tagwire::record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Login {
//!         pub cmd: u8,
//!         pub name_len: u16 => "sizeof=name,big",
//!         pub name: String,
//!         pub flag: String => "nullterm",
//!     }
//! }
//!
//! let login = Login { cmd: 1, name_len: 0, name: "ab".into(), flag: "x".into() };
//! let bytes = tagwire::to_vec_le(&login)?;
//! assert_eq!(bytes, [0x01, 0x00, 0x02, b'a', b'b', b'x', 0x00]);
//! // the caller's value is left untouched
//! assert_eq!(login.name_len, 0);
//! # Ok::<(), tagwire::Error>(())
//! ```
//!
//! # Length Sources
//!
//! [`encode`] writes each length source from the live length of its linked
//! collection without touching the caller's value. [`encode_patched`] stores
//! the live length back into the caller's field first, so the value matches
//! what was written.

use std::io::Write;

use crate::{
    ByteOrder, Codec, Config, Endian, Error, FieldMut, FieldRef, Result, Scalar, Wire, cold_path,
    endian::MAX_WIDTH,
    traverse::{self, Node, Visitor},
};

/// Writes leaf fields to a byte sink.
pub(crate) struct Encoder<'c, W> {
    writer: W,
    config: &'c Config,
}

impl<'c, W: Write> Encoder<'c, W> {
    pub fn new(writer: W, config: &'c Config) -> Self {
        Self { writer, config }
    }

    fn write_scalar(&mut self, scalar: Scalar, order: Endian) -> Result<()> {
        let mut buf = [0u8; MAX_WIDTH];
        let len = order.put(scalar, &mut buf);
        self.writer.write_all(&buf[..len])?;
        Ok(())
    }

    fn write_text(&mut self, name: &'static str, text: &str, null_terminated: bool) -> Result<()> {
        if null_terminated {
            check_terminable(name, text)?;
        }
        self.writer.write_all(text.as_bytes())?;
        if null_terminated {
            self.writer.write_all(&[0])?;
        }
        Ok(())
    }
}

/// Rejects null-terminated text that a decoder would cut short.
pub(crate) fn check_terminable(name: &'static str, text: &str) -> Result<()> {
    if text.as_bytes().contains(&0) {
        cold_path();
        return Err(Error::InteriorNul(name));
    }
    Ok(())
}

/// Converts the live length of a linked collection into the producer's kind.
pub(crate) fn length_value(name: &'static str, scalar: Scalar, len: usize) -> Result<Scalar> {
    scalar.with_count(len).ok_or_else(|| {
        cold_path();
        Error::LengthOverflow { field: name, len }
    })
}

impl<'a, W: Write> Visitor<FieldRef<'a>> for Encoder<'_, W> {
    fn config(&self) -> &Config {
        self.config
    }

    fn visit(&mut self, node: &mut Node<FieldRef<'a>>) -> Result<()> {
        match node.value {
            FieldRef::Scalar(scalar) => {
                let scalar = match node.linked_len {
                    Some(len) => length_value(node.name, scalar, len)?,
                    None => scalar,
                };
                self.write_scalar(scalar, node.order)
            }
            FieldRef::Array(seq) | FieldRef::Seq(seq) => {
                for element in seq.elements() {
                    traverse::run(self, element, node.order)?;
                }
                Ok(())
            }
            FieldRef::Str(text) => self.write_text(node.name, text, node.null_terminated),
            FieldRef::Record(record) => traverse::run(self, FieldRef::Record(record), node.order),
            FieldRef::Unsupported(name) => Err(Error::UnsupportedKind(name)),
        }
    }
}

impl<'a, W: Write> Visitor<FieldMut<'a>> for Encoder<'_, W> {
    fn config(&self) -> &Config {
        self.config
    }

    fn visit(&mut self, node: &mut Node<FieldMut<'a>>) -> Result<()> {
        let order = node.order;
        match &mut node.value {
            FieldMut::Scalar(slot) => {
                if let Some(len) = node.linked_len {
                    if !slot.set_count(len) {
                        cold_path();
                        return Err(Error::LengthOverflow {
                            field: node.name,
                            len,
                        });
                    }
                }
                self.write_scalar(slot.get(), order)
            }
            FieldMut::Array(seq) => {
                for element in seq.elements_mut() {
                    traverse::run(self, element, order)?;
                }
                Ok(())
            }
            FieldMut::Seq(seq) => {
                for element in seq.elements_mut() {
                    traverse::run(self, element, order)?;
                }
                Ok(())
            }
            FieldMut::Str(text) => self.write_text(node.name, text.as_str(), node.null_terminated),
            FieldMut::Record(record) => traverse::run(self, FieldMut::Record(&mut **record), order),
            FieldMut::Unsupported(name) => Err(Error::UnsupportedKind(*name)),
        }
    }
}

/// Returns the number of bytes `value` encodes to.
///
/// Nothing is written and the value is not modified.
///
/// # Example
///
/// ```
/// assert_eq!(tagwire::measure(&[0u32; 4]).unwrap(), 16);
/// assert_eq!(tagwire::measure(&String::from("hello")).unwrap(), 5);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedKind`] if any field has no wire
/// representation.
#[inline]
pub fn measure<T: Wire + ?Sized>(value: &T) -> Result<usize> {
    Codec::default().measure(value)
}

/// Encodes `value` to `writer`, using `O` for fields without a byte order
/// directive.
///
/// Length sources are written from the live length of the collection they
/// describe; the stored value of the length field is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - a field has no wire representation ([`Error::UnsupportedKind`])
/// - a collection is too long for its length source ([`Error::LengthOverflow`])
/// - the writer fails ([`Error::IO`]); bytes already written stay written
#[inline]
pub fn encode<O: ByteOrder>(writer: impl Write, value: &(impl Wire + ?Sized)) -> Result<()> {
    Codec::new(Config::default().with_order(O::ENDIAN)).encode(writer, value)
}

/// Convenience function for encoding with little-endian byte order.
#[inline]
pub fn encode_le(writer: impl Write, value: &(impl Wire + ?Sized)) -> Result<()> {
    encode::<crate::LittleEndian>(writer, value)
}

/// Convenience function for encoding with big-endian byte order.
#[inline]
pub fn encode_be(writer: impl Write, value: &(impl Wire + ?Sized)) -> Result<()> {
    encode::<crate::BigEndian>(writer, value)
}

/// Like [`encode`], but first overwrites every length source in `value`
/// with the live length of its collection.
///
/// # Example
///
/// ```
/// tagwire::record! {
///     #[derive(Default)]
///     pub struct Items {
///         pub count: u16 => "sizeof=items",
///         pub items: Vec<u8>,
///     }
/// }
///
/// let mut value = Items { count: 0, items: vec![1, 2, 3] };
/// let mut out = Vec::new();
/// tagwire::encode_patched::<tagwire::LittleEndian>(&mut out, &mut value)?;
/// assert_eq!(value.count, 3);
/// assert_eq!(out, [3, 0, 1, 2, 3]);
/// # Ok::<(), tagwire::Error>(())
/// ```
#[inline]
pub fn encode_patched<O: ByteOrder>(
    writer: impl Write,
    value: &mut (impl Wire + ?Sized),
) -> Result<()> {
    Codec::new(Config::default().with_order(O::ENDIAN)).encode_patched(writer, value)
}

/// Encodes `value` into a new `Vec<u8>`.
#[inline]
pub fn to_vec<O: ByteOrder>(value: &(impl Wire + ?Sized)) -> Result<Vec<u8>> {
    Codec::new(Config::default().with_order(O::ENDIAN)).to_vec(value)
}

/// Convenience function for serializing with little-endian byte order.
#[inline]
pub fn to_vec_le(value: &(impl Wire + ?Sized)) -> Result<Vec<u8>> {
    to_vec::<crate::LittleEndian>(value)
}

/// Convenience function for serializing with big-endian byte order.
#[inline]
pub fn to_vec_be(value: &(impl Wire + ?Sized)) -> Result<Vec<u8>> {
    to_vec::<crate::BigEndian>(value)
}
