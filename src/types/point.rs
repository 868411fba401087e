//! Single-point and double-point information with quality descriptor.
//!
//! Both elements carry the state in the low bits and the quality flags
//! Blocked, Substituted, NotTopical and Invalid in bits 4 to 7. Bits in
//! between are ignored when decoding and never set when encoding.

use super::QualDesc;

const QUALITY_MASK: u8 = 0xF0;

/// State of a single-point switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinglePointState {
    /// Off (0)
    Off = 0,
    /// On (1)
    On = 1,
}

impl SinglePointState {
    /// Parse from byte (bit 0).
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        if value & 0x01 == 0 {
            Self::Off
        } else {
            Self::On
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// State of a determination aware switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoublePointState {
    /// Indeterminate or intermediate (00)
    IndeterminateOrIntermediate = 0,
    /// Determined OFF (01)
    DeterminedOff = 1,
    /// Determined ON (10)
    DeterminedOn = 2,
    /// Indeterminate (11)
    Indeterminate = 3,
}

impl DoublePointState {
    /// Parse from byte (lower 2 bits).
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::IndeterminateOrIntermediate,
            1 => Self::DeterminedOff,
            2 => Self::DeterminedOn,
            _ => Self::Indeterminate,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Single-point information with quality descriptor (SIQ).
///
/// See companion standard 101, subclause 7.2.6.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct SinglePoint(u8);

impl SinglePoint {
    /// Off with OK quality.
    pub const OFF: Self = Self(0);

    /// On with OK quality.
    pub const ON: Self = Self(1);

    /// Encode a state with its quality flags.
    #[inline]
    pub const fn new(state: SinglePointState, quality: QualDesc) -> Self {
        Self(state.as_u8() | (quality.bits() & QUALITY_MASK))
    }

    /// Wrap a received SIQ byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn state(&self) -> SinglePointState {
        SinglePointState::from_u8(self.0)
    }

    #[inline]
    pub const fn quality(&self) -> QualDesc {
        QualDesc::from_bits(self.0 & QUALITY_MASK)
    }

    /// Returns the state and the quality descriptor flags separated.
    #[inline]
    pub const fn split(&self) -> (SinglePointState, QualDesc) {
        (self.state(), self.quality())
    }
}

/// Double-point information with quality descriptor (DIQ).
///
/// See companion standard 101, subclause 7.2.6.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct DoublePoint(u8);

impl DoublePoint {
    /// Encode a state with its quality flags.
    #[inline]
    pub const fn new(state: DoublePointState, quality: QualDesc) -> Self {
        Self(state.as_u8() | (quality.bits() & QUALITY_MASK))
    }

    /// Wrap a received DIQ byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn state(&self) -> DoublePointState {
        DoublePointState::from_u8(self.0)
    }

    #[inline]
    pub const fn quality(&self) -> QualDesc {
        QualDesc::from_bits(self.0 & QUALITY_MASK)
    }

    /// Returns the state and the quality descriptor flags separated.
    #[inline]
    pub const fn split(&self) -> (DoublePointState, QualDesc) {
        (self.state(), self.quality())
    }
}
