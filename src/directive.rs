//! Per-field directive parsing.
//!
//! A directive string is a comma-separated list of tokens:
//!
//! | Token | Effect |
//! |-------|--------|
//! | `big` | encode this field (and its descendants) big-endian |
//! | `little` | encode this field (and its descendants) little-endian |
//! | `nullterm` | text ends with a zero byte instead of using a length source |
//! | `sizeof=<name>` | this integer holds the length of sibling `<name>` |
//!
//! When tokens conflict the last one wins, so `big,little` is little-endian.

use crate::{Endian, Error, Result};

/// The parsed directives of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directives<'t> {
    /// Byte order override for the field and everything below it.
    pub order: Option<Endian>,
    /// Text is terminated by a zero byte.
    pub null_terminated: bool,
    /// Name of the sibling whose length this field carries.
    pub size_of: Option<&'t str>,
}

impl<'t> Directives<'t> {
    /// Parses `tag`, silently skipping anything that is not a directive.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::{Directives, Endian};
    ///
    /// let d = Directives::parse("little, sizeof=username, shiny");
    /// assert_eq!(d.order, Some(Endian::Little));
    /// assert_eq!(d.size_of, Some("username"));
    /// assert!(!d.null_terminated);
    /// ```
    pub fn parse(tag: &'t str) -> Self {
        let mut directives = Self::default();
        for token in tokens(tag) {
            // unknown tokens are ignored in lenient mode
            let _ = directives.apply(token);
        }
        directives
    }

    /// Parses `tag`, rejecting any token that is not a directive.
    ///
    /// # Example
    ///
    /// ```
    /// use tagwire::{Directives, Error};
    ///
    /// assert!(Directives::parse_strict("big,nullterm").is_ok());
    /// assert!(matches!(
    ///     Directives::parse_strict("bigg"),
    ///     Err(Error::MalformedAnnotation { .. })
    /// ));
    /// ```
    pub fn parse_strict(tag: &'t str) -> Result<Self> {
        let mut directives = Self::default();
        for token in tokens(tag) {
            if !directives.apply(token) {
                return Err(Error::MalformedAnnotation {
                    tag: tag.to_owned(),
                    token: token.to_owned(),
                });
            }
        }
        Ok(directives)
    }

    /// Parses `tag` strictly or leniently.
    pub(crate) fn parse_with(tag: &'t str, strict: bool) -> Result<Self> {
        if strict {
            Self::parse_strict(tag)
        } else {
            Ok(Self::parse(tag))
        }
    }

    fn apply(&mut self, token: &'t str) -> bool {
        match token {
            "big" => self.order = Some(Endian::Big),
            "little" => self.order = Some(Endian::Little),
            "nullterm" => self.null_terminated = true,
            _ => match token.strip_prefix("sizeof=") {
                Some(name) if is_identifier(name) => self.size_of = Some(name),
                _ => return false,
            },
        }
        true
    }
}

fn tokens(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
