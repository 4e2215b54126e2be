//! Field handles and the traits that expose a value's layout.
//!
//! Records describe themselves through a static table of [`FieldDesc`] plus
//! one handle per field. Handles come in a read-only flavour ([`FieldRef`],
//! used for measuring and encoding) and a mutable one ([`FieldMut`], used for
//! decoding and for encoding with length patching).
//!
//! Most records are declared with the [`record!`](crate::record) macro, which
//! writes the [`Record`] and [`Wire`] impls. Implementing [`Record`] by hand is
//! equivalent:
//!
//! ```
//! use tagwire::{FieldDesc, FieldMut, FieldRef, Record, Wire};
//!
//! #[derive(Default)]
//! struct Packet {
//!     len: u8,
//!     body: Vec<u8>,
//! }
//!
//! impl Record for Packet {
//!     fn schema(&self) -> &'static [FieldDesc] {
//!         const SCHEMA: &[FieldDesc] = &[
//!             FieldDesc::new("len", "sizeof=body"),
//!             FieldDesc::new("body", ""),
//!         ];
//!         SCHEMA
//!     }
//!
//!     fn fields(&self) -> Vec<FieldRef<'_>> {
//!         vec![self.len.field(), self.body.field()]
//!     }
//!
//!     fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
//!         vec![self.len.field_mut(), self.body.field_mut()]
//!     }
//! }
//!
//! impl Wire for Packet {
//!     fn field(&self) -> FieldRef<'_> {
//!         FieldRef::Record(self)
//!     }
//!
//!     fn field_mut(&mut self) -> FieldMut<'_> {
//!         FieldMut::Record(self)
//!     }
//! }
//!
//! let bytes = tagwire::to_vec_le(&Packet { len: 0, body: vec![7, 8] }).unwrap();
//! assert_eq!(bytes, [2, 7, 8]);
//! ```

use std::fmt;

use crate::{Complex32, Complex64, Kind, Scalar, ScalarMut};

/// Static description of one record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDesc {
    /// Field name, used to resolve `sizeof=` directives.
    pub name: &'static str,
    /// Raw directive text, see [`Directives`](crate::Directives).
    pub tag: &'static str,
}

impl FieldDesc {
    pub const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// A type that has a wire representation.
pub trait Wire {
    /// Encoded width when it does not depend on the value.
    const FIXED_WIDTH: Option<usize> = None;

    fn field(&self) -> FieldRef<'_>;

    fn field_mut(&mut self) -> FieldMut<'_>;
}

/// A composite value, walked field by field in declaration order.
pub trait Record {
    /// One descriptor per field, in declaration order.
    fn schema(&self) -> &'static [FieldDesc];

    /// One handle per field, in the same order as [`schema`](Record::schema).
    fn fields(&self) -> Vec<FieldRef<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Read access to the elements of an array or sequence.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoded width of every element, when it is fixed.
    fn element_width(&self) -> Option<usize>;

    fn elements(&self) -> Vec<FieldRef<'_>>;
}

/// Element-wise write access to an array or sequence.
pub trait SequenceMut {
    fn as_sequence(&self) -> &dyn Sequence;

    fn elements_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// A sequence whose length is decided at decode time.
///
/// Decoding clears the sequence and then appends one element at a time, so
/// a length read from untrusted input never sizes an allocation by itself.
pub trait Growable: SequenceMut {
    /// Removes every element.
    fn clear(&mut self);

    /// Reserves room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Appends a default element and returns a handle to it.
    fn push_default(&mut self) -> FieldMut<'_>;
}

/// Read-only handle to a field.
#[derive(Clone, Copy)]
pub enum FieldRef<'a> {
    Scalar(Scalar),
    Array(&'a dyn Sequence),
    Seq(&'a dyn Sequence),
    Str(&'a str),
    Record(&'a dyn Record),
    /// A type without a wire representation, carrying its name.
    Unsupported(&'static str),
}

/// Mutable handle to a field.
pub enum FieldMut<'a> {
    Scalar(ScalarMut<'a>),
    Array(&'a mut dyn SequenceMut),
    Seq(&'a mut dyn Growable),
    Str(&'a mut String),
    Record(&'a mut dyn Record),
    Unsupported(&'static str),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::Array(_) => Kind::Array,
            Self::Seq(_) => Kind::Seq,
            Self::Str(_) => Kind::Str,
            Self::Record(_) => Kind::Record,
            Self::Unsupported(_) => Kind::Unsupported,
        }
    }

    /// Live element count of a collection, or byte length of text.
    pub fn live_len(&self) -> Option<usize> {
        match self {
            Self::Array(seq) | Self::Seq(seq) => Some(seq.len()),
            Self::Str(text) => Some(text.len()),
            _ => None,
        }
    }

    /// The field's value as an element count, if it is a non-negative integer.
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Scalar(scalar) => scalar.as_count(),
            _ => None,
        }
    }
}

impl FieldMut<'_> {
    pub fn kind(&self) -> Kind {
        self.to_ref().kind()
    }

    /// Reborrows this handle as a read-only one.
    pub fn to_ref(&self) -> FieldRef<'_> {
        match self {
            Self::Scalar(slot) => FieldRef::Scalar(slot.get()),
            Self::Array(seq) => FieldRef::Array(seq.as_sequence()),
            Self::Seq(seq) => FieldRef::Seq(seq.as_sequence()),
            Self::Str(text) => FieldRef::Str(text.as_str()),
            Self::Record(record) => FieldRef::Record(&**record),
            Self::Unsupported(name) => FieldRef::Unsupported(*name),
        }
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Str(text) => f.debug_tuple("Str").field(text).finish(),
            Self::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
            other => f
                .debug_struct(other.kind().name())
                .field("len", &other.live_len())
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_ref().fmt(f)
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Wire for $ty {
            const FIXED_WIDTH: Option<usize> = Kind::$variant.fixed_width();

            #[inline]
            fn field(&self) -> FieldRef<'_> {
                FieldRef::Scalar(Scalar::$variant(*self))
            }

            #[inline]
            fn field_mut(&mut self) -> FieldMut<'_> {
                FieldMut::Scalar(ScalarMut::$variant(self))
            }
        }
    )*};
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Complex32 => C64,
    Complex64 => C128,
}

#[cfg(feature = "i128")]
impl_scalar! {
    i128 => I128,
    u128 => U128,
}

macro_rules! impl_unsupported {
    ($($ty:ty),* $(,)?) => {$(
        impl Wire for $ty {
            fn field(&self) -> FieldRef<'_> {
                FieldRef::Unsupported(stringify!($ty))
            }

            fn field_mut(&mut self) -> FieldMut<'_> {
                FieldMut::Unsupported(stringify!($ty))
            }
        }
    )*};
}

// platform-dependent width
impl_unsupported!(usize, isize, char);

impl Wire for String {
    fn field(&self) -> FieldRef<'_> {
        FieldRef::Str(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Str(self)
    }
}

impl<T: Wire + ?Sized> Wire for Box<T> {
    const FIXED_WIDTH: Option<usize> = T::FIXED_WIDTH;

    fn field(&self) -> FieldRef<'_> {
        (**self).field()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        (**self).field_mut()
    }
}

impl<T: Wire> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_width(&self) -> Option<usize> {
        T::FIXED_WIDTH
    }

    fn elements(&self) -> Vec<FieldRef<'_>> {
        self.iter().map(Wire::field).collect()
    }
}

impl<T: Wire> SequenceMut for Vec<T> {
    fn as_sequence(&self) -> &dyn Sequence {
        self
    }

    fn elements_mut(&mut self) -> Vec<FieldMut<'_>> {
        self.iter_mut().map(Wire::field_mut).collect()
    }
}

impl<T: Wire + Default> Growable for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn push_default(&mut self) -> FieldMut<'_> {
        let index = self.len();
        self.push(T::default());
        self[index].field_mut()
    }
}

impl<T: Wire + Default> Wire for Vec<T> {
    fn field(&self) -> FieldRef<'_> {
        FieldRef::Seq(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Seq(self)
    }
}

impl<T: Wire, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element_width(&self) -> Option<usize> {
        T::FIXED_WIDTH
    }

    fn elements(&self) -> Vec<FieldRef<'_>> {
        self.iter().map(Wire::field).collect()
    }
}

impl<T: Wire, const N: usize> SequenceMut for [T; N] {
    fn as_sequence(&self) -> &dyn Sequence {
        self
    }

    fn elements_mut(&mut self) -> Vec<FieldMut<'_>> {
        self.iter_mut().map(Wire::field_mut).collect()
    }
}

impl<T: Wire, const N: usize> Wire for [T; N] {
    const FIXED_WIDTH: Option<usize> = match T::FIXED_WIDTH {
        Some(width) => Some(width * N),
        None => None,
    };

    fn field(&self) -> FieldRef<'_> {
        FieldRef::Array(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Array(self)
    }
}
