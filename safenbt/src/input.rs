use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    ReadLimiter, Tag,
};

// Most elements reserved up front for a length read off the input.
pub(crate) const PREALLOC_LIMIT: usize = 4096;

/// Source of NBT primitives for the decoder, paired with the limiter it is
/// charging. Nothing here charges the limiter by itself; the decoder decides
/// what each value costs and calls [`Input::charge`].
pub(crate) struct Input<'l, R: Read> {
    reader: R,
    limiter: &'l mut ReadLimiter,
}

impl<'l, R: Read> Input<'l, R> {
    pub fn new(reader: R, limiter: &'l mut ReadLimiter) -> Self {
        Self { reader, limiter }
    }

    pub fn charge(&mut self, bits: u64) -> Result<()> {
        self.limiter.charge(bits)
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.reader.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.reader.read_i8()?)
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }

    /// Read a signed 32 bit length prefix, rejecting negative lengths.
    pub fn consume_len(&mut self) -> Result<usize> {
        let len = self.consume_i32()?;
        usize::try_from(len).map_err(|_| Error::negative_len(len))
    }

    /// Read a size prefixed string in Java's modified UTF-8.
    pub fn consume_str(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;
        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf)?;

        let s = cesu8::from_java_cesu8(&buf).map_err(|_| Error::nonunicode_string(&buf))?;
        Ok(s.into_owned())
    }

    pub fn consume_bytes(&mut self, len: usize) -> Result<Vec<i8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;

        if buf.len() != len {
            return Err(Error::unexpected_eof());
        }

        Ok(buf.into_iter().map(|b| b as i8).collect())
    }

    pub fn consume_ints(&mut self, len: usize) -> Result<Vec<i32>> {
        let mut ints = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            ints.push(self.consume_i32()?);
        }
        Ok(ints)
    }
}
