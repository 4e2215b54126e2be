//! Annotation-driven binary marshalling for fixed-layout records.
//!
//! A record is a struct whose fields are written one after another in
//! declaration order. Per-field directives control byte order, text
//! termination and length links between siblings:
//!
//! ```
//! tagwire::record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Example {
//!         pub cmd: u8,
//!         pub username_len: u16 => "sizeof=username,big",
//!         pub username: String,
//!         pub password: String => "nullterm",
//!     }
//! }
//!
//! let value = Example {
//!     cmd: 1,
//!     username_len: 0,
//!     username: "dajoh".into(),
//!     password: "x".into(),
//! };
//!
//! let bytes = tagwire::to_vec_le(&value)?;
//! assert_eq!(bytes.len(), tagwire::measure(&value)?);
//!
//! let decoded: Example = tagwire::from_slice_le(&bytes)?;
//! assert_eq!(decoded.username, "dajoh");
//! assert_eq!(decoded.username_len, 5);
//! # Ok::<(), tagwire::Error>(())
//! ```
//!
//! The default byte order is little-endian; use the `_be` functions, the
//! generic versions with [`BigEndian`], or a [`Codec`] to change it.

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

mod codec;
mod config;
pub mod de;
mod directive;
mod endian;
mod error;
mod field;
mod kind;
mod record;
mod scalar;
pub mod ser;
mod size;
mod traverse;
mod util;

pub use codec::*;
pub use config::*;
pub use de::{decode, decode_be, decode_le, from_slice, from_slice_be, from_slice_le};
pub use directive::*;
pub use endian::Endian;
pub use error::*;
pub use field::*;
pub use kind::*;
pub use scalar::*;
pub use ser::{encode, encode_be, encode_le, encode_patched, measure, to_vec, to_vec_be, to_vec_le};
pub use util::*;
