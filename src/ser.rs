//! Dotted-format serialization.
//!
//! This module provides the [`Serializer`] that classifies a Rust value into
//! an [`IpValue`]. Serde calls exactly one `serialize_*` method per value,
//! chosen by the value's type, so the category is fixed at compile time:
//!
//! - **Integer scalars** (`serialize_i8` .. `serialize_u128`) become octets
//! - **Strings and chars** (`serialize_str`, `serialize_char`) become text
//! - **Sequences** (`serialize_seq`, tuples, tuple structs, byte slices) become
//!   integer or text sequences, depending on their elements
//!
//! Strings reach `serialize_str` before anything could iterate their
//! characters, so a string is never mistaken for a sequence.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_ipfmt::Serializer;
//!
//! let value = vec![0x11_u8, 0x22, 0x33, 0x44].serialize(Serializer).unwrap();
//! assert!(value.is_sequence());
//! assert_eq!(value.to_string(), "17.34.51.68");
//! ```

use crate::value::Integer;
use crate::{Error, IpValue, Result};
use serde::ser::{self, Impossible};
use serde::Serialize;

/// Classifies a top-level value into an [`IpValue`].
///
/// `i8` and `u8` are integers and print as numbers, both alone and inside
/// sequences. `char` is a Unicode scalar rather than a byte, so it takes the
/// text path: `'a'` prints as `a` and `vec!['a', 'b']` as `a.b`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serializer;

impl ser::Serializer for Serializer {
    type Ok = IpValue;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = Impossible<IpValue, Error>;
    type SerializeMap = Impossible<IpValue, Error>;
    type SerializeStruct = Impossible<IpValue, Error>;
    type SerializeStructVariant = Impossible<IpValue, Error>;

    fn serialize_bool(self, _v: bool) -> Result<IpValue> {
        Err(Error::unsupported_type("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_f32(self, _v: f32) -> Result<IpValue> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<IpValue> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, v: char) -> Result<IpValue> {
        Ok(IpValue::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<IpValue> {
        Ok(IpValue::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<IpValue> {
        Ok(IpValue::Integers(v.iter().copied().map(Integer::from).collect()))
    }

    fn serialize_none(self) -> Result<IpValue> {
        Err(Error::unsupported_type("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<IpValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<IpValue> {
        Err(Error::unsupported_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<IpValue> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<IpValue> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<IpValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<IpValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqSerializer> {
        Ok(SeqSerializer::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer> {
        Ok(SeqSerializer::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqSerializer> {
        Ok(SeqSerializer::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }
}

/// Upper bound on the elements reserved up front from a length hint.
const MAX_PREALLOCATED: usize = 1024;

/// A single sequence element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Element {
    /// An integer element, kept at its full value.
    Integer(Integer),
    /// A string or char element, kept verbatim.
    Text(String),
}

impl Element {
    const fn kind(&self) -> &'static str {
        match self {
            Element::Integer(_) => "integer",
            Element::Text(_) => "string",
        }
    }
}

/// Collects the elements of a sequence, tuple or tuple struct.
///
/// The first element fixes the kind of the sequence; every later element
/// must match it.
pub struct SeqSerializer {
    integers: Vec<Integer>,
    texts: Vec<String>,
    index: usize,
}

impl SeqSerializer {
    fn with_capacity(len: usize) -> Self {
        SeqSerializer {
            integers: Vec::with_capacity(len.min(MAX_PREALLOCATED)),
            texts: Vec::new(),
            index: 0,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let element = value.serialize(ElementSerializer)?;
        let index = self.index;
        self.index += 1;

        match element {
            Element::Integer(n) if self.texts.is_empty() => {
                self.integers.push(n);
                Ok(())
            }
            Element::Text(s) if self.integers.is_empty() => {
                self.texts.push(s);
                Ok(())
            }
            other => {
                let expected = if self.texts.is_empty() {
                    "integer"
                } else {
                    "string"
                };
                Err(Error::mixed_sequence(index, expected, other.kind()))
            }
        }
    }

    fn finish(self) -> IpValue {
        // An empty sequence carries no element kind; both render to nothing.
        if self.texts.is_empty() {
            IpValue::Integers(self.integers)
        } else {
            IpValue::Texts(self.texts)
        }
    }
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = IpValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<IpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = IpValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<IpValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = IpValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<IpValue> {
        Ok(self.finish())
    }
}

/// Classifies one sequence element. Integers keep their full value here
/// instead of being split into octets.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ElementSerializer;

impl ser::Serializer for ElementSerializer {
    type Ok = Element;
    type Error = Error;

    type SerializeSeq = Impossible<Element, Error>;
    type SerializeTuple = Impossible<Element, Error>;
    type SerializeTupleStruct = Impossible<Element, Error>;
    type SerializeTupleVariant = Impossible<Element, Error>;
    type SerializeMap = Impossible<Element, Error>;
    type SerializeStruct = Impossible<Element, Error>;
    type SerializeStructVariant = Impossible<Element, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Element> {
        Err(Error::unsupported_type("bool element"))
    }

    fn serialize_i8(self, v: i8) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Element> {
        Ok(Element::Integer(Integer::from(v)))
    }

    fn serialize_f32(self, _v: f32) -> Result<Element> {
        Err(Error::unsupported_type("f32 element"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Element> {
        Err(Error::unsupported_type("f64 element"))
    }

    fn serialize_char(self, v: char) -> Result<Element> {
        Ok(Element::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Element> {
        Ok(Element::Text(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Element> {
        Err(Error::unsupported_type("nested sequence"))
    }

    fn serialize_none(self) -> Result<Element> {
        Err(Error::unsupported_type("none element"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Element> {
        Err(Error::unsupported_type("unit element"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Element> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Element> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("nested sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("nested sequence"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("nested sequence"))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("map element"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("{}::{}", name, variant)))
    }
}
