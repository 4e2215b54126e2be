use crate::Endian;

/// Default cap on the bytes read for one null-terminated text field.
pub const DEFAULT_MAX_TEXT_LEN: usize = 64 * 1024;

/// Settings shared by every traversal of one [`Codec`](crate::Codec).
///
/// # Example
///
/// ```
/// use tagwire::{Config, Endian};
///
/// let config = Config::default()
///     .with_order(Endian::Big)
///     .strict()
///     .with_max_text_len(None);
/// assert_eq!(config.order, Endian::Big);
/// assert!(config.strict_directives);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Byte order for fields without a `big`/`little` directive.
    pub order: Endian,
    /// Reject unknown directive tokens instead of ignoring them.
    pub strict_directives: bool,
    /// Upper bound for null-terminated text when decoding; `None` reads
    /// until a terminator or the end of input.
    ///
    /// Encoding does not enforce this limit, so a value with longer text
    /// encodes successfully but fails to decode with
    /// [`Error::TextTooLong`](crate::Error::TextTooLong) under the same
    /// configuration.
    pub max_text_len: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: Endian::Little,
            strict_directives: false,
            max_text_len: Some(DEFAULT_MAX_TEXT_LEN),
        }
    }
}

impl Config {
    pub const fn with_order(mut self, order: Endian) -> Self {
        self.order = order;
        self
    }

    pub const fn strict(mut self) -> Self {
        self.strict_directives = true;
        self
    }

    pub const fn with_max_text_len(mut self, max: Option<usize>) -> Self {
        self.max_text_len = max;
        self
    }
}
