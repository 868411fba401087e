//! Quality descriptor flags attached to measured values.
//!
//! See companion standard 101, subclause 7.2.6.3.

use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Quality descriptor flags.
///
/// Bit layout (bits 1 and 2 are reserved and always zero):
/// - Bit 0: overflow (OV)
/// - Bit 3: elapsed time invalid (EI)
/// - Bit 4: blocked (BL)
/// - Bit 5: substituted (SB)
/// - Bit 6: not topical (NT)
/// - Bit 7: invalid (IV)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct QualDesc(u8);

impl QualDesc {
    /// No flags, no problems.
    pub const OK: Self = Self(0);

    /// Value is beyond a predefined range.
    pub const OVERFLOW: Self = Self(0x01);

    /// Elapsed time was incorrectly acquired. Only valid for events of
    /// protection equipment, see subclause 7.2.6.4.
    pub const TIME_INVALID: Self = Self(0x08);

    /// Value is blocked for transmission and remains in the state acquired
    /// before it was blocked.
    pub const BLOCKED: Self = Self(0x10);

    /// Value was provided by an operator instead of an automatic source.
    pub const SUBSTITUTED: Self = Self(0x20);

    /// Most recent update was unsuccessful.
    pub const NOT_TOPICAL: Self = Self(0x40);

    /// Value was incorrectly acquired.
    pub const INVALID: Self = Self(0x80);

    const RESERVED_MASK: u8 = 0x06;

    /// Create from raw bits, dropping the reserved bits.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & !Self::RESERVED_MASK)
    }

    /// Get the raw packed byte value.
    #[inline(always)]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check whether all flags of `other` are set.
    #[inline(always)]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no flags are set.
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for QualDesc {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for QualDesc {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for QualDesc {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

const NAMES: [(QualDesc, &str); 6] = [
    (QualDesc::OVERFLOW, "OV"),
    (QualDesc::TIME_INVALID, "EI"),
    (QualDesc::BLOCKED, "BL"),
    (QualDesc::SUBSTITUTED, "SB"),
    (QualDesc::NOT_TOPICAL, "NT"),
    (QualDesc::INVALID, "IV"),
];

impl std::fmt::Debug for QualDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QualDesc({self})")
    }
}

impl std::fmt::Display for QualDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            return f.write_str("OK");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qual_desc_bit_positions() {
        assert_eq!(QualDesc::OVERFLOW.bits(), 0x01);
        assert_eq!(QualDesc::TIME_INVALID.bits(), 0x08);
        assert_eq!(QualDesc::BLOCKED.bits(), 0x10);
        assert_eq!(QualDesc::SUBSTITUTED.bits(), 0x20);
        assert_eq!(QualDesc::NOT_TOPICAL.bits(), 0x40);
        assert_eq!(QualDesc::INVALID.bits(), 0x80);
        assert_eq!(QualDesc::OK.bits(), 0);
    }

    #[test]
    fn test_qual_desc_reserved_bits_dropped() {
        assert_eq!(QualDesc::from_bits(0x06), QualDesc::OK);
        assert_eq!(QualDesc::from_bits(0xFF).bits(), 0xF9);
    }

    #[test]
    fn test_qual_desc_contains() {
        let q = QualDesc::BLOCKED | QualDesc::INVALID;
        assert!(q.contains(QualDesc::BLOCKED));
        assert!(q.contains(QualDesc::INVALID));
        assert!(!q.contains(QualDesc::SUBSTITUTED));
        assert!(q.contains(QualDesc::OK));
        assert!(!q.is_ok());
        assert_eq!(q & QualDesc::INVALID, QualDesc::INVALID);
    }

    #[test]
    fn test_qual_desc_bitor_assign() {
        let mut q = QualDesc::OK;
        q |= QualDesc::NOT_TOPICAL;
        q |= QualDesc::OVERFLOW;
        assert_eq!(q.bits(), 0x41);
    }

    #[test]
    fn test_qual_desc_display() {
        assert_eq!(QualDesc::OK.to_string(), "OK");
        assert_eq!(QualDesc::INVALID.to_string(), "IV");
        assert_eq!((QualDesc::OVERFLOW | QualDesc::INVALID).to_string(), "OV|IV");
        assert_eq!(QualDesc::from_bits(0xF9).to_string(), "OV|EI|BL|SB|NT|IV");
        assert_eq!(format!("{:?}", QualDesc::BLOCKED), "QualDesc(BL)");
    }

    #[test]
    fn test_qual_desc_packed_size() {
        assert_eq!(std::mem::size_of::<QualDesc>(), 1);
    }
}
