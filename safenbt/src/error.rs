//! Contains the Error and Result type used by the codec.
use std::fmt::Display;

/// Various errors that can occur while encoding or decoding NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input ended part way through a value, nesting went past
    /// [`MAX_DEPTH`][`crate::MAX_DEPTH`], or the bytes do not describe valid
    /// NBT (unknown tag, negative length, undecodable string).
    MalformedInput,

    /// The [`ReadLimiter`][`crate::ReadLimiter`] budget was exceeded.
    ResourceLimitExceeded,

    /// The decoded root was not a compound.
    SchemaViolation,

    /// A value could not be constructed from the given argument.
    InvalidArgument,

    /// An index passed to [`List::remove`][`crate::List::remove`] was past
    /// the end of the list.
    IndexOutOfRange,

    /// The underlying reader or writer failed, or a string was too long to
    /// be written.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::unexpected_eof(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Error {
        Error::new(
            ErrorKind::MalformedInput,
            format!("invalid nbt tag value: {}", tag),
        )
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error::new(
            ErrorKind::MalformedInput,
            "eof: unexpectedly ran out of input",
        )
    }

    pub(crate) fn too_deep(depth: usize) -> Error {
        Error::new(
            ErrorKind::MalformedInput,
            format!(
                "tried to read NBT tag with too high complexity, depth {} > {}",
                depth,
                crate::MAX_DEPTH
            ),
        )
    }

    pub(crate) fn negative_len(len: i32) -> Error {
        Error::new(
            ErrorKind::MalformedInput,
            format!("invalid nbt: negative length {}", len),
        )
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Error {
        Error::new(
            ErrorKind::MalformedInput,
            format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
        )
    }

    pub(crate) fn too_big(allocated: u64, max: u64) -> Error {
        Error::new(
            ErrorKind::ResourceLimitExceeded,
            format!(
                "tried to read NBT tag that was too big; tried to allocate: {} bytes where max allowed: {}",
                allocated, max
            ),
        )
    }

    pub(crate) fn no_root_compound() -> Error {
        Error::new(
            ErrorKind::SchemaViolation,
            "root tag must be a named compound",
        )
    }

    pub(crate) fn absent_string() -> Error {
        Error::new(
            ErrorKind::InvalidArgument,
            "string tag cannot be built from an absent value",
        )
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Error {
        Error::new(
            ErrorKind::IndexOutOfRange,
            format!("index {} out of range for list of length {}", index, len),
        )
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error::new(ErrorKind::Io, msg)
    }
}
