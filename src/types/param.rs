//! Qualifier of parameter of measured values (QPM).
//!
//! See companion standard 101, subclause 7.2.6.24.

const KIND_MASK: u8 = 0x3F;

/// Kind of parameter.
///
/// Kinds outside the four standard ones are passed through unchanged so that
/// newer or private definitions survive decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Not used (0)
    Unused,
    /// Threshold value (1)
    Threshold,
    /// Smoothing factor, filter time constant (2)
    Smoothing,
    /// Low limit for transmission of measured values (3)
    LowLimit,
    /// High limit for transmission of measured values (4)
    HighLimit,
    /// Reserved for standard definitions, compatible range (5‥31)
    Reserved(u8),
    /// Reserved for special use, private range (32‥63)
    Private(u8),
}

impl ParamKind {
    /// Parse from byte (lower 6 bits).
    pub const fn from_u8(value: u8) -> Self {
        match value & KIND_MASK {
            0 => Self::Unused,
            1 => Self::Threshold,
            2 => Self::Smoothing,
            3 => Self::LowLimit,
            4 => Self::HighLimit,
            k @ 5..=31 => Self::Reserved(k),
            k => Self::Private(k),
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Threshold => 1,
            Self::Smoothing => 2,
            Self::LowLimit => 3,
            Self::HighLimit => 4,
            Self::Reserved(k) | Self::Private(k) => k & KIND_MASK,
        }
    }
}

/// Qualifier of parameter of measured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct QualParam(u8);

impl QualParam {
    /// Flags local parameter change (LPC).
    pub const CHANGE: u8 = 0x40;

    /// Flags parameter operation (POP).
    pub const IN_OPERATION: u8 = 0x80;

    pub const fn new(kind: ParamKind, change: bool, in_operation: bool) -> Self {
        let mut raw = kind.as_u8();
        if change {
            raw |= Self::CHANGE;
        }
        if in_operation {
            raw |= Self::IN_OPERATION;
        }
        Self(raw)
    }

    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Returns the kind and the flags separated.
    #[inline]
    pub const fn split(&self) -> (ParamKind, bool, bool) {
        (
            ParamKind::from_u8(self.0),
            self.0 & Self::CHANGE != 0,
            self.0 & Self::IN_OPERATION != 0,
        )
    }
}
