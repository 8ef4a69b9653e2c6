use log::debug;

use crate::error::{Error, Result};

/// Budget on the memory a single decode may allocate.
///
/// Decoding charges the limiter with an estimate, in bits, of every value it
/// is about to materialize. The charge is converted to whole bytes (rounding
/// down) and added to a running total; once that total passes the budget the
/// decode is aborted with
/// [`ErrorKind::ResourceLimitExceeded`][`crate::error::ErrorKind`].
///
/// The estimates are deliberately rough. Strings and compound keys cost 16
/// bits per UTF-16 unit regardless of how many bytes they took on the wire,
/// so the accept/reject boundary for a given input does not depend on its
/// encoding.
///
/// A limiter is used by one decode at a time and is never reset. Reusing one
/// across several decodes makes it a budget for all of them combined.
///
/// ```
/// use safenbt::ReadLimiter;
///
/// let mut limiter = ReadLimiter::new(4);
/// assert!(limiter.charge(32).is_ok()); // 4 bytes, at the limit.
/// assert!(limiter.charge(8).is_err()); // 5 bytes, over it.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadLimiter {
    max: Option<u64>,
    read: u64,
}

impl ReadLimiter {
    /// Create a limiter allowing at most `max_bytes` bytes to be charged.
    pub const fn new(max_bytes: u64) -> Self {
        Self {
            max: Some(max_bytes),
            read: 0,
        }
    }

    /// Create a limiter that never fails. Charges are still tallied so
    /// [`read`][`ReadLimiter::read`] reports the estimated size.
    pub const fn unlimited() -> Self {
        Self {
            max: None,
            read: 0,
        }
    }

    /// Charge the limiter with `bits` bits.
    pub fn charge(&mut self, bits: u64) -> Result<()> {
        self.read = self.read.saturating_add(bits / 8);

        match self.max {
            Some(max) if self.read > max => {
                debug!("read budget exceeded: {} > {}", self.read, max);
                Err(Error::too_big(self.read, max))
            }
            _ => Ok(()),
        }
    }

    /// Bytes charged so far.
    pub fn read(&self) -> u64 {
        self.read
    }

    /// The budget, or `None` if unlimited.
    pub fn max(&self) -> Option<u64> {
        self.max
    }

    pub fn is_unlimited(&self) -> bool {
        self.max.is_none()
    }
}

impl Default for ReadLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}
