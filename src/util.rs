use crate::Endian;

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Compile-time byte order, implemented for zerocopy's [`BigEndian`] and
/// [`LittleEndian`] markers.
///
/// [`BigEndian`]: zerocopy::BigEndian
/// [`LittleEndian`]: zerocopy::LittleEndian
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {
    /// The runtime equivalent of this order.
    const ENDIAN: Endian;
}

impl ByteOrder for zerocopy::BigEndian {
    const ENDIAN: Endian = Endian::Big;
}

impl ByteOrder for zerocopy::LittleEndian {
    const ENDIAN: Endian = Endian::Little;
}
