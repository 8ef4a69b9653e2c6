//! GZip compressed NBT, the form most NBT files are stored in.
//!
//! These are thin wrappers that put a [`flate2`] stream around the plain
//! codec. Compression is not part of the format itself, so data that arrives
//! already decompressed should go straight to [`from_bytes`][`crate::from_bytes`].
//!
//! ```
//! use safenbt::{compound, gzip, ReadLimiter};
//!
//! let level = compound! { "LevelName" => "world" };
//! let compressed = gzip::to_gzip_bytes(&level).unwrap();
//!
//! let mut limiter = ReadLimiter::new(1024);
//! let decoded = gzip::from_gzip_bytes(&compressed, &mut limiter).unwrap();
//! assert_eq!(decoded, level);
//! ```
use std::io::{BufReader, BufWriter, Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::{de, error::Result, ser, Compound, ReadLimiter};

/// Decode a GZip compressed NBT document from `reader`, charging `limiter`.
/// The limiter sees the decompressed data.
pub fn from_gzip_reader<R: Read>(reader: R, limiter: &mut ReadLimiter) -> Result<Compound> {
    from_gzip_reader_named(reader, limiter).map(|(_, root)| root)
}

/// Like [`from_gzip_reader`], also returning the name of the root entry.
pub fn from_gzip_reader_named<R: Read>(
    reader: R,
    limiter: &mut ReadLimiter,
) -> Result<(String, Compound)> {
    de::from_reader_named(BufReader::new(GzDecoder::new(reader)), limiter)
}

/// Like [`from_gzip_reader`] without a budget. Only use this for trusted
/// data.
pub fn from_gzip_reader_unlimited<R: Read>(reader: R) -> Result<Compound> {
    from_gzip_reader(reader, &mut ReadLimiter::unlimited())
}

/// Decode a GZip compressed NBT document held in memory.
pub fn from_gzip_bytes(input: &[u8], limiter: &mut ReadLimiter) -> Result<Compound> {
    from_gzip_reader(input, limiter)
}

/// Encode `root` and write it GZip compressed to `writer`.
pub fn to_gzip_writer<W: Write>(writer: W, root: &Compound) -> Result<()> {
    let mut encoder = BufWriter::new(GzEncoder::new(writer, Compression::default()));
    ser::to_writer(&mut encoder, root)?;

    // Flush the buffer and write the GZip trailer.
    let encoder = encoder.into_inner().map_err(|e| e.into_error())?;
    encoder.finish()?;
    Ok(())
}

/// Encode `root` as GZip compressed bytes.
pub fn to_gzip_bytes(root: &Compound) -> Result<Vec<u8>> {
    let mut out = vec![];
    to_gzip_writer(&mut out, root)?;
    Ok(out)
}
