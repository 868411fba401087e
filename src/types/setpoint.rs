//! Qualifier of set-point command (QOS).
//!
//! See companion standard 101, subclause 7.2.6.39.

use crate::error::{InfoError, Result};

/// Highest qualifier of set-point command.
pub const MAX_SETPOINT_QUAL: u8 = 127;

const SELECT: u8 = 0x80;

/// Qualifier of a set-point command with select/execute flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct SetpointCmd(u8);

impl SetpointCmd {
    /// Create a new set-point command qualifier.
    ///
    /// Fails with [`InfoError::QualifierOutOfRange`] when `qual` exceeds 127.
    pub fn new(qual: u8, exec: bool) -> Result<Self> {
        if qual > MAX_SETPOINT_QUAL {
            return Err(InfoError::QualifierOutOfRange {
                qual,
                max: MAX_SETPOINT_QUAL,
            });
        }
        Ok(if exec { Self(qual) } else { Self(qual | SELECT) })
    }

    /// Wrap a received QOS byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Qualifier of set-point command:
    ///
    /// - 0: default
    /// - 0‥63: reserved for standard definitions (compatible range)
    /// - 64‥127: reserved for special use (private range)
    #[inline]
    pub const fn qual(&self) -> u8 {
        self.0 & MAX_SETPOINT_QUAL
    }

    /// Execute (`true`) or select (`false`), see section 5, subclause 6.8.
    #[inline]
    pub const fn exec(&self) -> bool {
        self.0 & SELECT == 0
    }
}
