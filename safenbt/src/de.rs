//! Decoding of NBT trees from their binary form.
//!
//! Every decode is given a [`ReadLimiter`] and charges it with an estimate
//! of what it allocates:
//!
//! | Data | Charge (bits) |
//! | ---- | ------------- |
//! | Byte | 8 |
//! | Short | 16 |
//! | Int, Float | 32 |
//! | Long, Double | 64 |
//! | Byte Array | 8 per element |
//! | Int Array | 32 per element |
//! | String | 16 per UTF-16 unit |
//! | Compound | 8 per entry tag read (including the end), plus 16 per UTF-16 unit of each key |
//! | List | 8 for the element tag |
//! | End (as a list element) | 8 |
//!
//! Fixed width values and arrays are charged before they are read, so a
//! forged array length is refused before anything is allocated for it.
//! Strings are at most 65535 bytes on the wire and are charged once read.
//!
//! Compounds and lists may nest at most [`MAX_DEPTH`] levels below the root.
//!
//! ```
//! use safenbt::{error::ErrorKind, from_bytes, ReadLimiter};
//!
//! // A root compound holding an int array that claims a billion elements.
//! let mut input = vec![10, 0, 0, 11, 0, 1, b'a'];
//! input.extend_from_slice(&1_000_000_000i32.to_be_bytes());
//!
//! let mut limiter = ReadLimiter::new(1024 * 1024);
//! let err = from_bytes(&input, &mut limiter).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
//! ```
use std::io::Read;

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    input::{Input, PREALLOC_LIMIT},
    Compound, List, ReadLimiter, Tag, Value, MAX_DEPTH,
};

/// Decode a complete NBT document from `input`, charging `limiter`.
///
/// Fails with [`ErrorKind::SchemaViolation`][`crate::error::ErrorKind`] if
/// the root is not a compound. Any data after the root is ignored.
pub fn from_bytes(input: &[u8], limiter: &mut ReadLimiter) -> Result<Compound> {
    from_reader(input, limiter)
}

/// Decode a complete NBT document from `input` without a budget. Only use
/// this for trusted data.
pub fn from_bytes_unlimited(input: &[u8]) -> Result<Compound> {
    from_reader(input, &mut ReadLimiter::unlimited())
}

/// Decode a complete NBT document from `input`, also returning the name of
/// the root entry. The name is usually empty.
pub fn from_bytes_named(input: &[u8], limiter: &mut ReadLimiter) -> Result<(String, Compound)> {
    from_reader_named(input, limiter)
}

/// Decode a complete NBT document from `reader`, charging `limiter`. The
/// reader is read up to the end of the root compound and no further.
///
/// Reading is done in many small reads, so wrap unbuffered readers such as
/// files in a [`BufReader`][`std::io::BufReader`].
pub fn from_reader<R: Read>(reader: R, limiter: &mut ReadLimiter) -> Result<Compound> {
    from_reader_named(reader, limiter).map(|(_, root)| root)
}

/// Like [`from_reader`] without a budget.
pub fn from_reader_unlimited<R: Read>(reader: R) -> Result<Compound> {
    from_reader(reader, &mut ReadLimiter::unlimited())
}

/// Like [`from_reader`], also returning the name of the root entry.
pub fn from_reader_named<R: Read>(
    reader: R,
    limiter: &mut ReadLimiter,
) -> Result<(String, Compound)> {
    let mut input = Input::new(reader, limiter);

    let tag = input.consume_tag()?;
    if tag != Tag::Compound {
        debug!("refusing NBT with {:?} root", tag);
        return Err(Error::no_root_compound());
    }

    let name = input.consume_str()?;
    trace!("decoding root compound {:?}", name);

    let root = read_compound(&mut input, 0)?;
    Ok((name, root))
}

fn utf16_len(s: &str) -> u64 {
    s.encode_utf16().count() as u64
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        debug!("refusing NBT nested {} levels deep", depth);
        return Err(Error::too_deep(depth));
    }
    Ok(())
}

/// Read the payload of a value of type `tag`. `depth` is the depth the value
/// itself sits at.
fn read_payload<R: Read>(input: &mut Input<'_, R>, tag: Tag, depth: usize) -> Result<Value> {
    Ok(match tag {
        // Only reached for list elements. End has no payload, so it is charged
        // like a byte to keep a list of them from claiming billions for free.
        Tag::End => {
            input.charge(8)?;
            Value::End
        }
        Tag::Byte => {
            input.charge(8)?;
            Value::Byte(input.consume_i8()?)
        }
        Tag::Short => {
            input.charge(16)?;
            Value::Short(input.consume_i16()?)
        }
        Tag::Int => {
            input.charge(32)?;
            Value::Int(input.consume_i32()?)
        }
        Tag::Long => {
            input.charge(64)?;
            Value::Long(input.consume_i64()?)
        }
        Tag::Float => {
            input.charge(32)?;
            Value::Float(input.consume_f32()?)
        }
        Tag::Double => {
            input.charge(64)?;
            Value::Double(input.consume_f64()?)
        }
        Tag::ByteArray => {
            let len = input.consume_len()?;
            input.charge(8 * len as u64)?;
            Value::ByteArray(input.consume_bytes(len)?)
        }
        Tag::String => {
            let s = input.consume_str()?;
            input.charge(16 * utf16_len(&s))?;
            Value::String(s)
        }
        Tag::List => Value::List(read_list(input, depth)?),
        Tag::Compound => Value::Compound(read_compound(input, depth)?),
        Tag::IntArray => {
            let len = input.consume_len()?;
            input.charge(32 * len as u64)?;
            Value::IntArray(input.consume_ints(len)?)
        }
    })
}

fn read_compound<R: Read>(input: &mut Input<'_, R>, depth: usize) -> Result<Compound> {
    check_depth(depth)?;

    let mut compound = Compound::new();
    loop {
        input.charge(8)?;
        let tag = input.consume_tag()?;
        if tag == Tag::End {
            break;
        }

        let key = input.consume_str()?;
        input.charge(16 * utf16_len(&key))?;

        let value = read_payload(input, tag, depth + 1)?;

        // A repeated key replaces the earlier value.
        compound.insert(key, value);
    }

    Ok(compound)
}

fn read_list<R: Read>(input: &mut Input<'_, R>, depth: usize) -> Result<List> {
    check_depth(depth)?;

    input.charge(8)?;
    let element_tag = input.consume_tag()?;
    let len = input.consume_len()?;

    let mut list = List::with_capacity(element_tag, len.min(PREALLOC_LIMIT));
    for _ in 0..len {
        list.push(read_payload(input, element_tag, depth + 1)?);
    }

    Ok(list)
}
