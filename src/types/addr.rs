//! Station and information object addressing.

use std::num::NonZeroU16;

use super::TypeId;
use crate::error::{InfoError, Result};

/// Common address of ASDU (station address). Zero is not used.
///
/// The wire width is controlled by [`Params::common_addr_size`](crate::Params).
/// See companion standard 101, subclause 7.2.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CommonAddr(NonZeroU16);

impl CommonAddr {
    /// The broadcast address. Use is restricted to C_IC_NA_1, C_CI_NA_1,
    /// C_CS_NA_1 and C_RP_NA_1. In 8-bit mode 255 maps to this value.
    pub const GLOBAL: Self = Self(NonZeroU16::MAX);

    /// Create a common address, rejecting zero.
    #[inline]
    pub const fn new(value: u16) -> Result<Self> {
        match NonZeroU16::new(value) {
            Some(v) => Ok(Self(v)),
            None => Err(InfoError::CommonAddrZero),
        }
    }

    #[inline]
    pub const fn get(&self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn is_global(&self) -> bool {
        self.0.get() == u16::MAX
    }

    /// Check that this address may be used with the given type.
    pub fn check_type(&self, type_id: TypeId) -> Result<()> {
        if self.is_global() && !type_id.permits_global_addr() {
            return Err(InfoError::GlobalAddrNotPermitted(type_id));
        }
        Ok(())
    }
}

impl TryFrom<u16> for CommonAddr {
    type Error = InfoError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CommonAddr> for u16 {
    fn from(addr: CommonAddr) -> Self {
        addr.get()
    }
}

impl std::fmt::Display for CommonAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Information object address (IOA).
///
/// The wire width is controlled by [`Params::obj_addr_size`](crate::Params).
/// See companion standard 101, subclause 7.2.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ObjAddr(pub u32);

impl ObjAddr {
    /// The address is irrelevant.
    pub const IRRELEVANT: Self = Self(0);

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_irrelevant(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for ObjAddr {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ObjAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
