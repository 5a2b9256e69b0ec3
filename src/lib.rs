//! # serde_ipfmt
//!
//! A Serde-compatible formatter that prints values the way IP addresses are
//! written: dot-separated decimal components, one line per value.
//!
//! ## Renderings
//!
//! - **Integer scalars** are split into bytes, most significant first:
//!   `2130706433_i32` prints as `127.0.0.1`, `-1_i8` as `255`
//! - **Strings** print verbatim: `"1.2.3.4.5.6.7.8.99"` stays as is
//! - **Sequences of integers** print each element whole:
//!   `vec![0x012345, 0x987654]` prints as `74565.9991764`
//! - **Sequences of strings** print each element verbatim, dot-joined
//!
//! The rendering is picked by the value's `Serialize` implementation, so any
//! type serde knows how to serialize as one of these categories works:
//! arrays, slices, `VecDeque`, `LinkedList`, tuples, newtype wrappers.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_ipfmt::{to_string, to_writer};
//!
//! assert_eq!(to_string(&2130706433_i32).unwrap(), "127.0.0.1\n");
//! assert_eq!(to_string(&vec!["91", "82", "73", "214"]).unwrap(), "91.82.73.214\n");
//!
//! let mut out = Vec::new();
//! to_writer(&mut out, &0_i16).unwrap();
//! assert_eq!(out, b"0.0\n");
//! ```
//!
//! ## Empty Sequences
//!
//! An empty sequence writes nothing at all, not even the line terminator.
//! Every other value writes exactly one terminated line.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Byte extraction uses `to_be_bytes`, so output does not depend on the
//!   host's endianness
//! - A value that fails to format writes nothing to the sink

pub mod error;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use ser::Serializer;
pub use value::{Integer, IpValue};

use serde::Serialize;
use std::io;

/// Joins the components of a line.
pub const SEPARATOR: &str = ".";

/// Ends every non-empty line.
pub const TERMINATOR: &str = "\n";

/// Classify any `T: Serialize` into an [`IpValue`] without rendering it.
///
/// # Examples
///
/// ```rust
/// use serde_ipfmt::{to_value, IpValue};
///
/// let value = to_value(&0x7F000001_u32).unwrap();
/// assert_eq!(value, IpValue::Octets(vec![127, 0, 0, 1]));
/// ```
///
/// # Errors
///
/// Returns an error if the value has no dotted rendering (floats, maps,
/// structs, nested or mixed sequences).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<IpValue>
where
    T: ?Sized + Serialize,
{
    let value = value.serialize(Serializer)?;
    tracing::trace!(kind = value.kind(), components = value.len(), "classified value");
    Ok(value)
}

/// Format any `T: Serialize` into a terminated line.
///
/// Returns an empty string for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use serde_ipfmt::to_string;
///
/// assert_eq!(to_string(&vec![0x11_u8, 0x22, 0x33, 0x44]).unwrap(), "17.34.51.68\n");
/// assert_eq!(to_string(&Vec::<u8>::new()).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no dotted rendering.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(render_line(&value))
}

/// Format any `T: Serialize` and write the line to `writer`.
///
/// The line is built in full before the first write, so a value that fails
/// to format leaves the writer untouched. An empty sequence writes zero
/// bytes and no terminator.
///
/// # Examples
///
/// ```rust
/// use serde_ipfmt::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "1.2.3.4.5.6.7.8.99").unwrap();
/// to_writer(&mut buffer, &-1_i8).unwrap();
/// assert_eq!(buffer, b"1.2.3.4.5.6.7.8.99\n255\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no dotted rendering or writing to the
/// writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let line = to_string(value)?;
    if line.is_empty() {
        return Ok(());
    }
    writer.write_all(line.as_bytes())?;
    Ok(())
}

fn render_line(value: &IpValue) -> String {
    if value.is_empty() {
        return String::new();
    }
    let mut line = value.to_string();
    line.push_str(TERMINATOR);
    line
}
