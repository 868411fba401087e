//! Single, double and regulating step commands.
//!
//! All three share the qualifier of command (QOC) in bits 2 to 7; they only
//! differ in the state carried by the low bits.

use super::{DoublePointState, SinglePointState};
use crate::error::{InfoError, Result};

/// Highest qualifier of command.
pub const MAX_CMD_QUAL: u8 = 31;

const SELECT: u8 = 0x80;

/// Qualifier of command with select/execute flag merged with the state bits
/// of the wrapping command.
///
/// See companion standard 101, subclause 7.2.6.26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
struct Cmd(u8);

impl Cmd {
    fn new(state: u8, qual: u8, exec: bool) -> Result<Self> {
        if qual > MAX_CMD_QUAL {
            return Err(InfoError::QualifierOutOfRange {
                qual,
                max: MAX_CMD_QUAL,
            });
        }
        let mut raw = state | (qual << 2);
        if !exec {
            raw |= SELECT;
        }
        Ok(Self(raw))
    }

    /// Qualifier of command:
    ///
    /// - 0: no additional definition
    /// - 1: short pulse duration, determined by a system parameter in the outstation
    /// - 2: long pulse duration, determined by a system parameter in the outstation
    /// - 3: persistent output
    /// - 4‥8: reserved for standard definitions
    /// - 9‥15: reserved for the selection of other predefined functions
    /// - 16‥31: reserved for special use (private range)
    #[inline]
    const fn qual(&self) -> u8 {
        (self.0 >> 2) & MAX_CMD_QUAL
    }

    /// Execute (`true`) or select (`false`), see section 5, subclause 6.8.
    #[inline]
    const fn exec(&self) -> bool {
        self.0 & SELECT == 0
    }
}

/// Single command (SCO).
///
/// See companion standard 101, subclause 7.2.6.15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SingleCmd(Cmd);

impl SingleCmd {
    /// Create a new single command.
    ///
    /// Fails with [`InfoError::QualifierOutOfRange`] when `qual` exceeds 31.
    pub fn new(state: SinglePointState, qual: u8, exec: bool) -> Result<Self> {
        Cmd::new(state.as_u8(), qual, exec).map(Self)
    }

    /// Wrap a received SCO byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(Cmd(raw))
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0 .0
    }

    #[inline]
    pub const fn state(&self) -> SinglePointState {
        SinglePointState::from_u8(self.0 .0)
    }

    #[inline]
    pub const fn qual(&self) -> u8 {
        self.0.qual()
    }

    #[inline]
    pub const fn exec(&self) -> bool {
        self.0.exec()
    }
}

/// Double command (DCO).
///
/// See companion standard 101, subclause 7.2.6.16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DoubleCmd(Cmd);

impl DoubleCmd {
    /// Create a new double command.
    ///
    /// Fails with [`InfoError::QualifierOutOfRange`] when `qual` exceeds 31.
    pub fn new(state: DoublePointState, qual: u8, exec: bool) -> Result<Self> {
        Cmd::new(state.as_u8(), qual, exec).map(Self)
    }

    /// Wrap a received DCO byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(Cmd(raw))
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0 .0
    }

    #[inline]
    pub const fn state(&self) -> DoublePointState {
        DoublePointState::from_u8(self.0 .0)
    }

    #[inline]
    pub const fn qual(&self) -> u8 {
        self.0.qual()
    }

    #[inline]
    pub const fn exec(&self) -> bool {
        self.0.exec()
    }
}

/// Regulating step command (RCO).
///
/// The direction reuses the double-point states: `DeterminedOff` is the
/// next step lower, `DeterminedOn` the next step higher, the other two are
/// not permitted by the standard but still decode.
///
/// See companion standard 101, subclause 7.2.6.17.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StepCmd(Cmd);

impl StepCmd {
    /// Create a new regulating step command.
    ///
    /// Fails with [`InfoError::QualifierOutOfRange`] when `qual` exceeds 31.
    pub fn new(higher: DoublePointState, qual: u8, exec: bool) -> Result<Self> {
        Cmd::new(higher.as_u8(), qual, exec).map(Self)
    }

    /// Wrap a received RCO byte. Every bit pattern is accepted.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(Cmd(raw))
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0 .0
    }

    /// Whether the next step is higher (or lower).
    #[inline]
    pub const fn higher(&self) -> DoublePointState {
        DoublePointState::from_u8(self.0 .0)
    }

    #[inline]
    pub const fn qual(&self) -> u8 {
        self.0.qual()
    }

    #[inline]
    pub const fn exec(&self) -> bool {
        self.0.exec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_single_cmd_encoding() {
        let c = SingleCmd::new(SinglePointState::On, 3, true).unwrap();
        assert_eq!(c.raw(), 0x0D);
        assert_eq!(c.state(), SinglePointState::On);
        assert_eq!(c.qual(), 3);
        assert!(c.exec());

        let c = SingleCmd::new(SinglePointState::Off, 1, false).unwrap();
        assert_eq!(c.raw(), 0x84);
        assert!(!c.exec());
    }

    #[rstest]
    #[case(32)]
    #[case(100)]
    #[case(u8::MAX)]
    fn test_cmd_qualifier_rejected(#[case] qual: u8) {
        let err = InfoError::QualifierOutOfRange { qual, max: 31 };
        assert_eq!(SingleCmd::new(SinglePointState::On, qual, true), Err(err.clone()));
        assert_eq!(
            DoubleCmd::new(DoublePointState::DeterminedOn, qual, false),
            Err(err.clone())
        );
        assert_eq!(StepCmd::new(DoublePointState::DeterminedOff, qual, true), Err(err));
    }

    #[test]
    fn test_cmd_highest_qualifier() {
        for exec in [true, false] {
            assert_eq!(SingleCmd::new(SinglePointState::On, 31, exec).unwrap().qual(), 31);
            assert_eq!(
                DoubleCmd::new(DoublePointState::Indeterminate, 31, exec).unwrap().qual(),
                31
            );
            assert_eq!(
                StepCmd::new(DoublePointState::DeterminedOn, 31, exec).unwrap().qual(),
                31
            );
        }
    }

    #[test]
    fn test_double_cmd_all_fields() {
        for raw_state in 0u8..4 {
            let state = DoublePointState::from_u8(raw_state);
            for qual in 0..=MAX_CMD_QUAL {
                for exec in [true, false] {
                    let c = DoubleCmd::new(state, qual, exec).unwrap();
                    assert_eq!((c.state(), c.qual(), c.exec()), (state, qual, exec));
                    assert_eq!(DoubleCmd::from_raw(c.raw()), c);
                }
            }
        }
    }

    #[test]
    fn test_step_cmd_direction() {
        let lower = StepCmd::new(DoublePointState::DeterminedOff, 0, true).unwrap();
        assert_eq!(lower.raw(), 0x01);
        assert_eq!(lower.higher(), DoublePointState::DeterminedOff);

        let higher = StepCmd::new(DoublePointState::DeterminedOn, 2, false).unwrap();
        assert_eq!(higher.raw(), 0x8A);
        assert_eq!(higher.higher(), DoublePointState::DeterminedOn);
        assert_eq!(higher.qual(), 2);
        assert!(!higher.exec());
    }

    #[test]
    fn test_cmd_from_raw_any_byte() {
        let c = SingleCmd::from_raw(0xFF);
        assert_eq!(c.state(), SinglePointState::On);
        assert_eq!(c.qual(), 31);
        assert!(!c.exec());

        let c = DoubleCmd::from_raw(0x7E);
        assert_eq!(c.state(), DoublePointState::DeterminedOn);
        assert_eq!(c.qual(), 31);
        assert!(c.exec());
    }
}
