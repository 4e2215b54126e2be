/// Declares a struct together with its [`Record`](crate::Record) and
/// [`Wire`](crate::Wire) impls.
///
/// Fields are encoded in declaration order. A field may carry a directive
/// string after its type (`name: Type => "directives"`), see
/// [`Directives`](crate::Directives) for the grammar. Attributes and doc
/// comments on the struct and its fields are passed through.
///
/// # Example
///
/// ```
/// tagwire::record! {
///     /// A chat message.
///     #[derive(Debug, Default, Clone, PartialEq)]
///     pub struct Message {
///         pub kind: u8,
///         /// Length of `body` in bytes.
///         pub body_len: u32 => "sizeof=body,big",
///         pub body: String,
///         pub sender: Sender,
///     }
/// }
///
/// tagwire::record! {
///     #[derive(Debug, Default, Clone, PartialEq)]
///     pub struct Sender {
///         pub id: u64,
///         pub nick: String => "nullterm",
///     }
/// }
///
/// let message = Message {
///     kind: 2,
///     body_len: 0,
///     body: "hi".into(),
///     sender: Sender { id: 7, nick: "bo".into() },
/// };
/// let bytes = tagwire::to_vec_le(&message)?;
/// assert_eq!(bytes.len(), tagwire::measure(&message)?);
///
/// let decoded: Message = tagwire::from_slice_le(&bytes)?;
/// assert_eq!(decoded.body_len, 2);
/// assert_eq!(decoded.sender, message.sender);
/// # Ok::<(), tagwire::Error>(())
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn schema(&self) -> &'static [$crate::FieldDesc] {
                const SCHEMA: &[$crate::FieldDesc] = &[
                    $($crate::FieldDesc::new(stringify!($field), concat!("" $(, $tag)?)),)*
                ];
                SCHEMA
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                ::std::vec![$($crate::Wire::field(&self.$field),)*]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                ::std::vec![$($crate::Wire::field_mut(&mut self.$field),)*]
            }
        }

        impl $crate::Wire for $name {
            fn field(&self) -> $crate::FieldRef<'_> {
                $crate::FieldRef::Record(self)
            }

            fn field_mut(&mut self) -> $crate::FieldMut<'_> {
                $crate::FieldMut::Record(self)
            }
        }
    };
}
