use std::io::{Read, Write};

use crate::{
    Config, Error, Result, Wire, cold_path, de::Decoder, ser::Encoder, size::LengthCalculator,
    traverse,
};

/// Runtime-configured entry point for measuring, encoding and decoding.
///
/// The free functions ([`to_vec_le`](crate::to_vec_le),
/// [`decode_be`](crate::decode_be), ...) are shorthands for a `Codec` with
/// the default [`Config`] and a fixed byte order.
///
/// # Example
///
/// ```
/// use tagwire::{Codec, Config, Endian};
///
/// let codec = Codec::new(Config::default().with_order(Endian::Big));
/// assert_eq!(codec.to_vec(&0x1122u16)?, [0x11, 0x22]);
///
/// let value: u16 = codec.from_slice(&[0x11, 0x22])?;
/// assert_eq!(value, 0x1122);
/// # Ok::<(), tagwire::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    config: Config,
}

impl Codec {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of bytes `value` encodes to.
    pub fn measure<T: Wire + ?Sized>(&self, value: &T) -> Result<usize> {
        let mut calculator = LengthCalculator::new(&self.config);
        traverse::run(&mut calculator, value.field(), self.config.order)?;
        tracing::debug!(
            ty = std::any::type_name::<T>(),
            bytes = calculator.size,
            "measured value"
        );
        Ok(calculator.size)
    }

    /// Encodes `value` without modifying it; see [`encode`](crate::encode).
    pub fn encode<T: Wire + ?Sized>(&self, writer: impl Write, value: &T) -> Result<()> {
        tracing::debug!(
            ty = std::any::type_name::<T>(),
            order = ?self.config.order,
            "encoding value"
        );
        let mut encoder = Encoder::new(writer, &self.config);
        traverse::run(&mut encoder, value.field(), self.config.order)
    }

    /// Encodes `value` after storing live lengths into its length sources;
    /// see [`encode_patched`](crate::encode_patched).
    pub fn encode_patched<T: Wire + ?Sized>(
        &self,
        writer: impl Write,
        value: &mut T,
    ) -> Result<()> {
        tracing::debug!(
            ty = std::any::type_name::<T>(),
            order = ?self.config.order,
            "encoding value with length patching"
        );
        let mut encoder = Encoder::new(writer, &self.config);
        traverse::run(&mut encoder, value.field_mut(), self.config.order)
    }

    /// Decodes into `value`; see [`decode`](crate::decode).
    pub fn decode<T: Wire + ?Sized>(&self, reader: impl Read, value: &mut T) -> Result<()> {
        tracing::debug!(
            ty = std::any::type_name::<T>(),
            order = ?self.config.order,
            "decoding value"
        );
        let mut decoder = Decoder::new(reader, &self.config);
        traverse::run(&mut decoder, value.field_mut(), self.config.order)
    }

    /// Encodes `value` into a `Vec<u8>` sized up front by [`measure`](Self::measure).
    pub fn to_vec<T: Wire + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut vec = Vec::with_capacity(self.measure(value)?);
        self.encode(&mut vec, value)?;
        Ok(vec)
    }

    /// Decodes a complete value from `bytes`, rejecting leftover input.
    pub fn from_slice<T: Wire + Default>(&self, bytes: &[u8]) -> Result<T> {
        let mut input = bytes;
        let mut value = T::default();
        self.decode(&mut input, &mut value)?;
        if !input.is_empty() {
            cold_path();
            return Err(Error::TrailingData(input.len()));
        }
        tracing::debug!(bytes = bytes.len(), "decoded slice");
        Ok(value)
    }

    /// Encodes `value` into a frozen [`Bytes`](bytes::Bytes) buffer.
    #[cfg(feature = "bytes")]
    pub fn to_bytes<T: Wire + ?Sized>(&self, value: &T) -> Result<bytes::Bytes> {
        use bytes::BufMut;

        let mut writer = bytes::BytesMut::with_capacity(self.measure(value)?).writer();
        self.encode(&mut writer, value)?;
        Ok(writer.into_inner().freeze())
    }

    /// Decodes into `value` from any [`Buf`](bytes::Buf).
    #[cfg(feature = "bytes")]
    pub fn decode_buf<T: Wire + ?Sized>(&self, buf: impl bytes::Buf, value: &mut T) -> Result<()> {
        use bytes::Buf;

        self.decode(buf.reader(), value)
    }
}
