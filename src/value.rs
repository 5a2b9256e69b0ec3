//! Classified representation of a formattable value.
//!
//! This module provides the [`IpValue`] enum, the owned result of deciding
//! which dotted rendering a value gets. [`to_value`](crate::to_value) builds
//! one from any `Serialize` type; its `Display` impl renders the line body.
//!
//! ## Core Types
//!
//! - [`IpValue`]: octets of a scalar, verbatim text, or a sequence of integers or strings
//! - [`Integer`]: a whole sequence element, signed or unsigned
//!
//! ## Usage Patterns
//!
//! ```rust
//! use serde_ipfmt::IpValue;
//!
//! let value = IpValue::from(2130706433_i32);
//! assert!(value.is_octets());
//! assert_eq!(value.to_string(), "127.0.0.1");
//!
//! let value = IpValue::from("10.0.0.1");
//! assert!(value.is_text());
//! assert_eq!(value.len(), 1);
//! ```

use crate::SEPARATOR;
use std::fmt;

/// A value classified into one of the dotted renderings.
///
/// # Examples
///
/// ```rust
/// use serde_ipfmt::{Integer, IpValue};
///
/// let octets = IpValue::Octets(vec![192, 168, 0, 1]);
/// let numbers = IpValue::Integers(vec![Integer::Signed(-1), Integer::Unsigned(300)]);
/// let texts = IpValue::Texts(vec!["a".to_string(), "b".to_string()]);
///
/// assert_eq!(octets.to_string(), "192.168.0.1");
/// assert_eq!(numbers.to_string(), "-1.300");
/// assert_eq!(texts.to_string(), "a.b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IpValue {
    /// Bytes of an integer scalar, most significant first.
    Octets(Vec<u8>),
    /// A string scalar, rendered unchanged.
    Text(String),
    /// Sequence elements rendered as whole decimal numbers.
    Integers(Vec<Integer>),
    /// Sequence elements rendered verbatim.
    Texts(Vec<String>),
}

/// A sequence element kept at its full value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integer {
    Signed(i128),
    Unsigned(u128),
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Signed(i) => write!(f, "{}", i),
            Integer::Unsigned(u) => write!(f, "{}", u),
        }
    }
}

macro_rules! integer_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Integer::$variant(value.into())
                }
            }

            impl From<$ty> for IpValue {
                fn from(value: $ty) -> Self {
                    IpValue::Octets(value.to_be_bytes().to_vec())
                }
            }
        )*
    };
}

integer_from!(Signed: i8, i16, i32, i64, i128);
integer_from!(Unsigned: u8, u16, u32, u64, u128);

impl From<&str> for IpValue {
    fn from(value: &str) -> Self {
        IpValue::Text(value.to_string())
    }
}

impl From<String> for IpValue {
    fn from(value: String) -> Self {
        IpValue::Text(value)
    }
}

impl IpValue {
    /// Returns `true` if the value is a byte-wise scalar.
    #[inline]
    #[must_use]
    pub const fn is_octets(&self) -> bool {
        matches!(self, IpValue::Octets(_))
    }

    /// Returns `true` if the value is a string scalar.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, IpValue::Text(_))
    }

    /// Returns `true` if the value came from a sequence of either element kind.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, IpValue::Integers(_) | IpValue::Texts(_))
    }

    /// Number of dot-joined components in the rendering.
    ///
    /// A string scalar counts as one component regardless of the dots it
    /// contains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ipfmt::IpValue;
    ///
    /// assert_eq!(IpValue::from(7_u64).len(), 8);
    /// assert_eq!(IpValue::from("1.2.3").len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            IpValue::Octets(bytes) => bytes.len(),
            IpValue::Text(_) => 1,
            IpValue::Integers(items) => items.len(),
            IpValue::Texts(items) => items.len(),
        }
    }

    /// Returns `true` for sequences without elements, which produce no output.
    ///
    /// Scalars are never empty: an empty string still produces a line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            IpValue::Octets(_) | IpValue::Text(_) => false,
            IpValue::Integers(items) => items.is_empty(),
            IpValue::Texts(items) => items.is_empty(),
        }
    }

    /// Short name of the rendering, used in trace events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            IpValue::Octets(_) => "octets",
            IpValue::Text(_) => "text",
            IpValue::Integers(_) => "integers",
            IpValue::Texts(_) => "texts",
        }
    }
}

fn write_joined<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Renders the line body without the terminator.
impl fmt::Display for IpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpValue::Octets(bytes) => write_joined(f, bytes),
            IpValue::Text(s) => f.write_str(s),
            IpValue::Integers(items) => write_joined(f, items),
            IpValue::Texts(items) => write_joined(f, items),
        }
    }
}
