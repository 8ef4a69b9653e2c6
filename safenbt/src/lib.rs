//! safenbt reads and writes NBT, the tagged binary tree format used by
//! *Minecraft* and the mods built around it, with a read budget that guards
//! decoding against oversized or maliciously crafted input.
//!
//! * For the tree of values see [`Value`], [`Compound`] and [`List`].
//! * For decoding see [`de`], which is re-exported at the crate root.
//! * For encoding see [`ser`], also re-exported.
//! * For the allocation budget see [`ReadLimiter`].
//! * For GZip compressed data see [`gzip`] (enabled by default).
//!
//! ```toml
//! [dependencies]
//! safenbt = "0.1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use safenbt::{compound, from_bytes, to_bytes, ReadLimiter};
//!
//! let player = compound! {
//!     "hp" => 20,
//!     "name" => "Bob",
//! };
//!
//! let bytes = to_bytes(&player).unwrap();
//!
//! // Refuse anything that would need more than 2 MiB to hold in memory.
//! let mut limiter = ReadLimiter::new(2 * 1024 * 1024);
//! let decoded = from_bytes(&bytes, &mut limiter).unwrap();
//!
//! assert_eq!(decoded, player);
//! assert_eq!(decoded.get_int("hp"), 20);
//! assert_eq!(decoded.get_string("name"), "Bob");
//!
//! // Absent or mistyped keys fall back to a default rather than failing.
//! assert_eq!(decoded.get_int("mana"), 0);
//! assert_eq!(decoded.get_string("hp"), "");
//! ```
//!
//! # Read budget
//!
//! Every decode charges a [`ReadLimiter`] with an estimate of the memory the
//! decoded tree will occupy. Once the estimate passes the budget, decoding
//! stops with [`ErrorKind::ResourceLimitExceeded`][`error::ErrorKind`].
//! Nesting of compounds and lists is additionally capped at
//! [`MAX_DEPTH`] levels.

pub mod de;
pub mod error;
pub mod ser;

#[cfg(feature = "gzip")]
pub mod gzip;

mod compound;
mod input;
mod limiter;
mod list;
mod macros;
mod value;

pub use compound::Compound;
pub use de::{
    from_bytes, from_bytes_named, from_bytes_unlimited, from_reader, from_reader_named,
    from_reader_unlimited,
};
pub use limiter::ReadLimiter;
pub use list::List;
pub use ser::{to_bytes, to_writer};
pub use value::Value;

#[cfg(test)]
mod test;

/// Deepest level of compound or list nesting a decode will enter. The root
/// compound sits at depth 0.
pub const MAX_DEPTH: usize = 512;

/// Wildcard accepted by [`Compound::contains_key_of_type`] that matches any of
/// the numeric tags.
pub const ANY_NUMERIC: u8 = 99;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
}

impl Tag {
    /// Whether values of this tag support the numeric coercions, eg
    /// [`Value::as_i32`].
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }
}

// The tags will very rarely change, so we write the conversions out by hand
// rather than pulling in a derive crate for them.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
