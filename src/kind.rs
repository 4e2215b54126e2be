use std::fmt;

/// The wire category of a field.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    #[cfg(feature = "i128")]
    I128,
    U8,
    U16,
    U32,
    U64,
    #[cfg(feature = "i128")]
    U128,
    F32,
    F64,
    /// Two `f32` components.
    C64,
    /// Two `f64` components.
    C128,
    /// Fixed-size array, element count known from the type.
    Array,
    /// Variable-length sequence, element count supplied by a length source.
    Seq,
    /// Text, sized by a length source or terminated by a zero byte.
    Str,
    /// A nested record, walked field by field.
    Record,
    /// A type without a wire representation.
    Unsupported,
}

impl Kind {
    /// Returns the encoded width in bytes, or `None` when the width depends
    /// on the value.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::Kind;
    ///
    /// assert_eq!(Kind::U16.fixed_width(), Some(2));
    /// assert_eq!(Kind::C128.fixed_width(), Some(16));
    /// assert_eq!(Kind::Str.fixed_width(), None);
    /// ```
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::I64 | Self::U64 | Self::F64 | Self::C64 => Some(8),
            Self::C128 => Some(16),
            #[cfg(feature = "i128")]
            Self::I128 | Self::U128 => Some(16),
            Self::Array | Self::Seq | Self::Str | Self::Record | Self::Unsupported => None,
        }
    }

    /// Returns `true` if a field of this kind can act as a length source.
    pub const fn is_integer(self) -> bool {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => true,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => true,
            #[cfg(feature = "i128")]
            Self::I128 | Self::U128 => true,
            _ => false,
        }
    }

    /// Returns `true` for kinds whose length is taken from a length source
    /// or a terminator when decoding.
    pub const fn is_variable(self) -> bool {
        matches!(self, Self::Seq | Self::Str)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            #[cfg(feature = "i128")]
            Self::I128 => "i128",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            #[cfg(feature = "i128")]
            Self::U128 => "u128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::C64 => "complex64",
            Self::C128 => "complex128",
            Self::Array => "array",
            Self::Seq => "sequence",
            Self::Str => "string",
            Self::Record => "record",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
