use crate::Kind;

/// A complex number made of two `f32` components, encoded real part first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

/// A complex number made of two `f64` components, encoded real part first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

/// A fixed-width value read out of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    #[cfg(feature = "i128")]
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    #[cfg(feature = "i128")]
    U128(u128),
    F32(f32),
    F64(f64),
    C64(Complex32),
    C128(Complex64),
}

/// A mutable view of a fixed-width field.
#[derive(Debug)]
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    #[cfg(feature = "i128")]
    I128(&'a mut i128),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    #[cfg(feature = "i128")]
    U128(&'a mut u128),
    F32(&'a mut f32),
    F64(&'a mut f64),
    C64(&'a mut Complex32),
    C128(&'a mut Complex64),
}

impl Scalar {
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            #[cfg(feature = "i128")]
            Self::I128(_) => Kind::I128,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            #[cfg(feature = "i128")]
            Self::U128(_) => Kind::U128,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::C64(_) => Kind::C64,
            Self::C128(_) => Kind::C128,
        }
    }

    /// Interprets an integer value as an element count.
    ///
    /// Returns `None` for non-integers and for negative values.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::Scalar;
    ///
    /// assert_eq!(Scalar::U16(3).as_count(), Some(3));
    /// assert_eq!(Scalar::I8(-1).as_count(), None);
    /// assert_eq!(Scalar::F32(1.0).as_count(), None);
    /// ```
    pub fn as_count(&self) -> Option<u64> {
        match *self {
            Self::I8(v) => u64::try_from(v).ok(),
            Self::I16(v) => u64::try_from(v).ok(),
            Self::I32(v) => u64::try_from(v).ok(),
            Self::I64(v) => u64::try_from(v).ok(),
            #[cfg(feature = "i128")]
            Self::I128(v) => u64::try_from(v).ok(),
            Self::U8(v) => Some(u64::from(v)),
            Self::U16(v) => Some(u64::from(v)),
            Self::U32(v) => Some(u64::from(v)),
            Self::U64(v) => Some(v),
            #[cfg(feature = "i128")]
            Self::U128(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Builds a value of the same kind holding `count`.
    ///
    /// Returns `None` if `self` is not an integer or `count` does not fit.
    pub fn with_count(&self, count: usize) -> Option<Self> {
        Some(match self {
            Self::I8(_) => Self::I8(i8::try_from(count).ok()?),
            Self::I16(_) => Self::I16(i16::try_from(count).ok()?),
            Self::I32(_) => Self::I32(i32::try_from(count).ok()?),
            Self::I64(_) => Self::I64(i64::try_from(count).ok()?),
            #[cfg(feature = "i128")]
            Self::I128(_) => Self::I128(i128::try_from(count).ok()?),
            Self::U8(_) => Self::U8(u8::try_from(count).ok()?),
            Self::U16(_) => Self::U16(u16::try_from(count).ok()?),
            Self::U32(_) => Self::U32(u32::try_from(count).ok()?),
            Self::U64(_) => Self::U64(u64::try_from(count).ok()?),
            #[cfg(feature = "i128")]
            Self::U128(_) => Self::U128(u128::try_from(count).ok()?),
            _ => return None,
        })
    }
}

impl ScalarMut<'_> {
    pub fn kind(&self) -> Kind {
        self.get().kind()
    }

    pub fn get(&self) -> Scalar {
        match self {
            Self::Bool(v) => Scalar::Bool(**v),
            Self::I8(v) => Scalar::I8(**v),
            Self::I16(v) => Scalar::I16(**v),
            Self::I32(v) => Scalar::I32(**v),
            Self::I64(v) => Scalar::I64(**v),
            #[cfg(feature = "i128")]
            Self::I128(v) => Scalar::I128(**v),
            Self::U8(v) => Scalar::U8(**v),
            Self::U16(v) => Scalar::U16(**v),
            Self::U32(v) => Scalar::U32(**v),
            Self::U64(v) => Scalar::U64(**v),
            #[cfg(feature = "i128")]
            Self::U128(v) => Scalar::U128(**v),
            Self::F32(v) => Scalar::F32(**v),
            Self::F64(v) => Scalar::F64(**v),
            Self::C64(v) => Scalar::C64(**v),
            Self::C128(v) => Scalar::C128(**v),
        }
    }

    /// Stores `value` if it has the same kind as the field.
    ///
    /// Returns `false` and leaves the field untouched on a kind mismatch.
    pub fn set(&mut self, value: Scalar) -> bool {
        match (self, value) {
            (Self::Bool(slot), Scalar::Bool(v)) => **slot = v,
            (Self::I8(slot), Scalar::I8(v)) => **slot = v,
            (Self::I16(slot), Scalar::I16(v)) => **slot = v,
            (Self::I32(slot), Scalar::I32(v)) => **slot = v,
            (Self::I64(slot), Scalar::I64(v)) => **slot = v,
            #[cfg(feature = "i128")]
            (Self::I128(slot), Scalar::I128(v)) => **slot = v,
            (Self::U8(slot), Scalar::U8(v)) => **slot = v,
            (Self::U16(slot), Scalar::U16(v)) => **slot = v,
            (Self::U32(slot), Scalar::U32(v)) => **slot = v,
            (Self::U64(slot), Scalar::U64(v)) => **slot = v,
            #[cfg(feature = "i128")]
            (Self::U128(slot), Scalar::U128(v)) => **slot = v,
            (Self::F32(slot), Scalar::F32(v)) => **slot = v,
            (Self::F64(slot), Scalar::F64(v)) => **slot = v,
            (Self::C64(slot), Scalar::C64(v)) => **slot = v,
            (Self::C128(slot), Scalar::C128(v)) => **slot = v,
            _ => return false,
        }
        true
    }

    /// Overwrites an integer field with `count`.
    ///
    /// Returns `false` if the field is not an integer or `count` does not fit.
    pub fn set_count(&mut self, count: usize) -> bool {
        match self.get().with_count(count) {
            Some(value) => self.set(value),
            None => false,
        }
    }
}
