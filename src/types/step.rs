//! Step position information (VTI) with quality descriptor.
//!
//! See companion standard 101, subclause 7.2.6.5.

use super::QualDesc;

const VALUE_MASK: u16 = 0x7F;
const TRANSIENT: u16 = 0x80;

/// Step position: a 7-bit signed value with transient state indication in
/// the low byte and the quality descriptor in the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct StepPos(u16);

impl StepPos {
    /// Lowest representable step.
    pub const MIN_VALUE: i8 = -64;

    /// Highest representable step.
    pub const MAX_VALUE: i8 = 63;

    /// Create a new step position.
    ///
    /// Values outside `-64..=63` overflow silently: only the low 7 bits of
    /// the two's complement are kept.
    #[inline]
    pub const fn new(value: i32, transient: bool, quality: QualDesc) -> Self {
        let mut raw = (value & VALUE_MASK as i32) as u16;
        if transient {
            raw |= TRANSIENT;
        }
        raw |= (quality.bits() as u16) << 8;
        Self(raw)
    }

    /// Wrap a received value. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// The step in `-64..=63`, sign extended from bit 6.
    #[inline]
    pub const fn value(&self) -> i8 {
        (((self.0 & VALUE_MASK) as u8) << 1) as i8 >> 1
    }

    /// Whether the equipment is in transient state.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.0 & TRANSIENT != 0
    }

    #[inline]
    pub const fn quality(&self) -> QualDesc {
        QualDesc::from_bits((self.0 >> 8) as u8)
    }

    /// Returns the value, the transient flag and the quality descriptor.
    #[inline]
    pub const fn split(&self) -> (i8, bool, QualDesc) {
        (self.value(), self.is_transient(), self.quality())
    }
}
