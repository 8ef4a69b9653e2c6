//! Encoding of NBT trees to their binary form.
//!
//! The root of an NBT document is always a compound, written as a single
//! named entry whose name is the empty string:
//!
//! ```
//! use safenbt::{compound, to_bytes};
//!
//! let bytes = to_bytes(&compound! { "hp" => 20 }).unwrap();
//!
//! assert_eq!(
//!     bytes,
//!     [
//!         10, 0, 0, // root compound, empty name
//!         3, 0, 2, b'h', b'p', 0, 0, 0, 20, // int "hp" = 20
//!         0, // end of root
//!     ]
//! );
//! ```
//!
//! Encoding only fails if the writer fails, or if a string or key is longer
//! than the 65535 bytes its length prefix can describe.
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    error::{Error, Result},
    Compound, List, Tag, Value,
};

/// Encode `root` as a complete NBT document.
pub fn to_bytes(root: &Compound) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(&mut result, root)?;
    Ok(result)
}

/// Encode `root` as a complete NBT document into `writer`. The writer is not
/// flushed.
pub fn to_writer<W: Write>(mut writer: W, root: &Compound) -> Result<()> {
    writer.write_tag(Tag::Compound)?;
    writer.write_size_prefixed_str("")?;
    writer.write_compound(root)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len_bytes: u16 = key.len().try_into().map_err(|_| {
            Error::bespoke(format!("string too long: {} encoded bytes", key.len()))
        })?;
        self.write_u16::<BigEndian>(len_bytes)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke("len too large".to_owned()))?,
        )?;

        Ok(())
    }

    /// Write only the payload of `value`. The tag and any name belong to the
    /// enclosing container.
    fn write_payload(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::End => {}
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Value::ByteArray(bs) => {
                self.write_len(bs.len())?;
                for b in bs {
                    self.write_i8(*b)?;
                }
            }
            Value::String(s) => self.write_size_prefixed_str(s)?,
            Value::List(list) => self.write_list(list)?,
            Value::Compound(c) => self.write_compound(c)?,
            Value::IntArray(is) => {
                self.write_len(is.len())?;
                for i in is {
                    self.write_i32::<BigEndian>(*i)?;
                }
            }
        }
        Ok(())
    }

    fn write_compound(&mut self, c: &Compound) -> Result<()> {
        for (key, value) in c.iter() {
            let tag = value.tag();
            self.write_tag(tag)?;
            if tag != Tag::End {
                self.write_size_prefixed_str(key)?;
                self.write_payload(value)?;
            }
        }
        self.write_tag(Tag::End)
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        // The element type on the wire comes from the elements themselves
        // rather than the list's lock, so an emptied list is written as a
        // list of end.
        let tag = list.get(0).map_or(Tag::End, Value::tag);

        self.write_tag(tag)?;
        self.write_len(list.len())?;
        for value in list {
            self.write_payload(value)?;
        }
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
