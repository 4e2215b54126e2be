use zerocopy::byteorder;

use crate::{BigEndian, ByteOrder, Complex32, Complex64, LittleEndian, Scalar, ScalarMut};

/// Runtime byte order, used for call defaults and per-field overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    #[default]
    Little,
}

/// Largest fixed-width encoding.
pub(crate) const MAX_WIDTH: usize = 16;

impl Endian {
    /// Writes `scalar` into the front of `out`, returning the number of bytes used.
    pub(crate) fn put(self, scalar: Scalar, out: &mut [u8; MAX_WIDTH]) -> usize {
        match self {
            Endian::Big => put::<BigEndian>(scalar, out),
            Endian::Little => put::<LittleEndian>(scalar, out),
        }
    }

    /// Decodes `bytes` into `slot`. `bytes` holds exactly the slot's width.
    pub(crate) fn load(self, slot: &mut ScalarMut<'_>, bytes: &[u8]) {
        match self {
            Endian::Big => load::<BigEndian>(slot, bytes),
            Endian::Little => load::<LittleEndian>(slot, bytes),
        }
    }
}

fn put<O: ByteOrder>(scalar: Scalar, out: &mut [u8; MAX_WIDTH]) -> usize {
    let width = scalar.kind().fixed_width().unwrap_or(0);
    let dst = &mut out[..width];
    match scalar {
        Scalar::Bool(v) => dst[0] = v as u8,
        Scalar::I8(v) => dst[0] = v as u8,
        Scalar::U8(v) => dst[0] = v,
        Scalar::I16(v) => dst.copy_from_slice(&byteorder::I16::<O>::new(v).to_bytes()),
        Scalar::U16(v) => dst.copy_from_slice(&byteorder::U16::<O>::new(v).to_bytes()),
        Scalar::I32(v) => dst.copy_from_slice(&byteorder::I32::<O>::new(v).to_bytes()),
        Scalar::U32(v) => dst.copy_from_slice(&byteorder::U32::<O>::new(v).to_bytes()),
        Scalar::I64(v) => dst.copy_from_slice(&byteorder::I64::<O>::new(v).to_bytes()),
        Scalar::U64(v) => dst.copy_from_slice(&byteorder::U64::<O>::new(v).to_bytes()),
        #[cfg(feature = "i128")]
        Scalar::I128(v) => dst.copy_from_slice(&byteorder::I128::<O>::new(v).to_bytes()),
        #[cfg(feature = "i128")]
        Scalar::U128(v) => dst.copy_from_slice(&byteorder::U128::<O>::new(v).to_bytes()),
        Scalar::F32(v) => dst.copy_from_slice(&byteorder::F32::<O>::new(v).to_bytes()),
        Scalar::F64(v) => dst.copy_from_slice(&byteorder::F64::<O>::new(v).to_bytes()),
        Scalar::C64(v) => {
            dst[..4].copy_from_slice(&byteorder::F32::<O>::new(v.re).to_bytes());
            dst[4..].copy_from_slice(&byteorder::F32::<O>::new(v.im).to_bytes());
        }
        Scalar::C128(v) => {
            dst[..8].copy_from_slice(&byteorder::F64::<O>::new(v.re).to_bytes());
            dst[8..].copy_from_slice(&byteorder::F64::<O>::new(v.im).to_bytes());
        }
    }
    width
}

#[inline]
fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

fn load<O: ByteOrder>(slot: &mut ScalarMut<'_>, bytes: &[u8]) {
    match slot {
        ScalarMut::Bool(v) => **v = bytes[0] != 0,
        ScalarMut::I8(v) => **v = bytes[0] as i8,
        ScalarMut::U8(v) => **v = bytes[0],
        ScalarMut::I16(v) => **v = byteorder::I16::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::U16(v) => **v = byteorder::U16::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::I32(v) => **v = byteorder::I32::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::U32(v) => **v = byteorder::U32::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::I64(v) => **v = byteorder::I64::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::U64(v) => **v = byteorder::U64::<O>::from_bytes(array(bytes)).get(),
        #[cfg(feature = "i128")]
        ScalarMut::I128(v) => **v = byteorder::I128::<O>::from_bytes(array(bytes)).get(),
        #[cfg(feature = "i128")]
        ScalarMut::U128(v) => **v = byteorder::U128::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::F32(v) => **v = byteorder::F32::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::F64(v) => **v = byteorder::F64::<O>::from_bytes(array(bytes)).get(),
        ScalarMut::C64(v) => {
            **v = Complex32 {
                re: byteorder::F32::<O>::from_bytes(array(bytes)).get(),
                im: byteorder::F32::<O>::from_bytes(array(&bytes[4..])).get(),
            }
        }
        ScalarMut::C128(v) => {
            **v = Complex64 {
                re: byteorder::F64::<O>::from_bytes(array(bytes)).get(),
                im: byteorder::F64::<O>::from_bytes(array(&bytes[8..])).get(),
            }
        }
    }
}
