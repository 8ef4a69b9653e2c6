mod ser;

use std::fmt;

use crate::{
    error::{Error, Result},
    Compound, List, Tag,
};

/// Value is a complete NBT value. It owns its data; compounds and lists own
/// their children outright, so cloning a `Value` produces a fully independent
/// deep copy.
///
/// Equality is only ever true between values of the same tag. Floats and
/// doubles compare by their bit patterns, so a decoded `NaN` equals the `NaN`
/// that was encoded and `0.0` does not equal `-0.0`.
///
/// ```
/// use safenbt::Value;
///
/// assert_eq!(Value::Float(3.9).as_i32(), Some(3));
/// assert_eq!(Value::Int(0x1_2345).as_i16(), Some(0x2345));
/// assert_eq!(Value::String("no".into()).as_i32(), None);
/// assert_ne!(Value::Int(1), Value::Long(1));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Marks the end of a compound on the wire. It only appears in a tree as
    /// the element of a list whose element type is end.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Value {
    /// Build a string value, refusing an absent string.
    ///
    /// ```
    /// use safenbt::{error::ErrorKind, Value};
    ///
    /// assert!(Value::from_optional_string(Some("x")).is_ok());
    /// let err = Value::from_optional_string(None::<String>).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn from_optional_string<S: Into<String>>(s: Option<S>) -> Result<Value> {
        s.map(|s| Value::String(s.into()))
            .ok_or_else(Error::absent_string)
    }

    /// The tag identifying this value on the wire.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    /// The tag as its raw type ID.
    pub fn id(&self) -> u8 {
        self.tag() as u8
    }

    // Floating point goes to integers via floor (saturating), except float to
    // long which truncates. Narrowing integers keeps only the low bits.

    pub fn as_i64(&self) -> Option<i64> {
        Some(match *self {
            Value::Byte(v) => v.into(),
            Value::Short(v) => v.into(),
            Value::Int(v) => v.into(),
            Value::Long(v) => v,
            Value::Float(v) => v as i64,
            Value::Double(v) => v.floor() as i64,
            _ => return None,
        })
    }

    pub fn as_i32(&self) -> Option<i32> {
        Some(match *self {
            Value::Byte(v) => v.into(),
            Value::Short(v) => v.into(),
            Value::Int(v) => v,
            Value::Long(v) => v as i32,
            Value::Float(v) => v.floor() as i32,
            Value::Double(v) => v.floor() as i32,
            _ => return None,
        })
    }

    pub fn as_i16(&self) -> Option<i16> {
        Some(match *self {
            Value::Byte(v) => v.into(),
            Value::Short(v) => v,
            Value::Int(v) => v as i16,
            Value::Long(v) => v as i16,
            Value::Float(_) | Value::Double(_) => self.as_i32()? as i16,
            _ => return None,
        })
    }

    pub fn as_i8(&self) -> Option<i8> {
        Some(match *self {
            Value::Byte(v) => v,
            Value::Short(v) => v as i8,
            Value::Int(v) => v as i8,
            Value::Long(v) => v as i8,
            Value::Float(_) | Value::Double(_) => self.as_i32()? as i8,
            _ => return None,
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        Some(match *self {
            Value::Byte(v) => v.into(),
            Value::Short(v) => v.into(),
            Value::Int(v) => v.into(),
            Value::Long(v) => v as f64,
            Value::Float(v) => v.into(),
            Value::Double(v) => v,
            _ => return None,
        })
    }

    pub fn as_f32(&self) -> Option<f32> {
        Some(match *self {
            Value::Byte(v) => v.into(),
            Value::Short(v) => v.into(),
            Value::Int(v) => v as f32,
            Value::Long(v) => v as f32,
            Value::Float(v) => v,
            Value::Double(v) => v as f32,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (End, End) => true,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            (ByteArray(a), ByteArray(b)) => a == b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Compound(a), Compound(b)) => a == b,
            (IntArray(a), IntArray(b)) => a == b,
            _ => false,
        }
    }
}

fn write_array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, data: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for v in data {
        write!(f, "{},", v)?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::End => f.write_str("END"),
            Value::Byte(v) => write!(f, "{}b", v),
            Value::Short(v) => write!(f, "{}s", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}L", v),
            // Debug keeps the trailing `.0` on whole numbers and switches to
            // Rust's exponent form for very large or small ones, eg `1e20f`.
            Value::Float(v) => write!(f, "{:?}f", v),
            Value::Double(v) => write!(f, "{:?}d", v),
            Value::ByteArray(v) => write_array(f, v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::List(v) => fmt::Display::fmt(v, f),
            Value::Compound(v) => fmt::Display::fmt(v, f),
            Value::IntArray(v) => write_array(f, v),
        }
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::List => List(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
        })
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<&bool> for Value {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}
