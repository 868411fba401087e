//! Normalized value (NVA).
//!
//! See companion standard 101, subclause 7.2.6.6.

/// A 16-bit normalized value, a fixed-point fraction of 32768.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Normal(pub i16);

impl Normal {
    /// -1.0
    pub const MIN: Self = Self(i16::MIN);

    /// 1.0 − 2⁻¹⁵
    pub const MAX: Self = Self(i16::MAX);

    #[inline]
    pub const fn raw(&self) -> i16 {
        self.0
    }

    /// Returns the actual value in the range `[-1, 1 − 2⁻¹⁵]`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.0) / 32768.0
    }

    #[inline]
    pub fn to_f32(&self) -> f32 {
        f32::from(self.0) / 32768.0
    }
}

impl From<i16> for Normal {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Normal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_bounds() {
        assert_eq!(Normal(32767).to_f64(), 0.999969482421875);
        assert_eq!(Normal(-32768).to_f64(), -1.0);
        assert_eq!(Normal(0).to_f64(), 0.0);
        assert_eq!(Normal::MIN.to_f64(), -1.0);
        assert_eq!(Normal::MAX.to_f64(), 1.0 - 1.0 / 32768.0);
    }

    #[test]
    fn test_normal_half() {
        assert_eq!(Normal(16384).to_f64(), 0.5);
        assert_eq!(Normal(-16384).to_f32(), -0.5);
        assert_eq!(Normal::from(8192).to_string(), "0.25");
    }

    #[test]
    fn test_normal_stays_in_range() {
        for raw in (i16::MIN..=i16::MAX).step_by(97) {
            let v = Normal(raw).to_f64();
            assert!((-1.0..1.0).contains(&v), "{raw} -> {v}");
        }
    }
}
