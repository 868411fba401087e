//! Address width configuration and wire coding of addresses.
//!
//! The companion standard lets a system choose the byte width of the common
//! address and of the information object address. IEC 104 fixes them at 2
//! and 3 bytes.

use bytes::{Buf, BufMut};

use crate::error::{InfoError, Result};
use crate::types::{CommonAddr, ObjAddr};

/// Default common address width in bytes (IEC 104).
pub const DEFAULT_COMMON_ADDR_SIZE: usize = 2;

/// Default information object address width in bytes (IEC 104).
pub const DEFAULT_OBJ_ADDR_SIZE: usize = 3;

/// 8-bit encoding of [`CommonAddr::GLOBAL`].
const NARROW_GLOBAL: u8 = 255;

/// Address width configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Common address width: 1 or 2 bytes
    pub common_addr_size: usize,
    /// Information object address width: 1, 2 or 3 bytes
    pub obj_addr_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self::wide()
    }
}

impl Params {
    /// IEC 104 widths.
    pub const fn wide() -> Self {
        Self {
            common_addr_size: DEFAULT_COMMON_ADDR_SIZE,
            obj_addr_size: DEFAULT_OBJ_ADDR_SIZE,
        }
    }

    /// Smallest widths permitted by IEC 101.
    pub const fn narrow() -> Self {
        Self {
            common_addr_size: 1,
            obj_addr_size: 1,
        }
    }

    /// Set common address width.
    pub fn common_addr_size(mut self, size: usize) -> Self {
        self.common_addr_size = size;
        self
    }

    /// Set information object address width.
    pub fn obj_addr_size(mut self, size: usize) -> Self {
        self.obj_addr_size = size;
        self
    }

    /// Check the widths against the companion standard.
    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.common_addr_size) {
            return Err(InfoError::invalid_params(format!(
                "common address size {} not in 1..=2",
                self.common_addr_size
            )));
        }
        if !(1..=3).contains(&self.obj_addr_size) {
            return Err(InfoError::invalid_params(format!(
                "object address size {} not in 1..=3",
                self.obj_addr_size
            )));
        }
        Ok(())
    }

    /// Highest station address, excluding the broadcast address.
    pub fn max_common_addr(&self) -> u16 {
        if self.common_addr_size == 1 {
            u16::from(NARROW_GLOBAL) - 1
        } else {
            u16::MAX - 1
        }
    }

    /// Highest information object address.
    pub fn max_obj_addr(&self) -> u32 {
        match self.obj_addr_size {
            1 => 0xFF,
            2 => 0xFFFF,
            _ => 0x00FF_FFFF,
        }
    }

    /// Encode a common address at the configured width (little-endian).
    pub fn put_common_addr<B: BufMut>(&self, buf: &mut B, addr: CommonAddr) -> Result<()> {
        self.validate()?;
        if addr.is_global() {
            match self.common_addr_size {
                1 => buf.put_u8(NARROW_GLOBAL),
                _ => buf.put_u16_le(addr.get()),
            }
            return Ok(());
        }
        if addr.get() > self.max_common_addr() {
            return Err(InfoError::CommonAddrFit {
                addr: addr.get(),
                size: self.common_addr_size,
            });
        }
        match self.common_addr_size {
            1 => buf.put_u8(addr.get() as u8),
            _ => buf.put_u16_le(addr.get()),
        }
        Ok(())
    }

    /// Decode a common address at the configured width (little-endian).
    ///
    /// In 8-bit mode 255 is mapped to [`CommonAddr::GLOBAL`]. Zero yields
    /// [`InfoError::CommonAddrZero`].
    pub fn get_common_addr<B: Buf>(&self, buf: &mut B) -> Result<CommonAddr> {
        self.validate()?;
        ensure_remaining(buf, self.common_addr_size)?;

        let raw = match self.common_addr_size {
            1 => match buf.get_u8() {
                NARROW_GLOBAL => {
                    #[cfg(feature = "tracing-support")]
                    tracing::debug!("8-bit common address 255 mapped to global address");
                    return Ok(CommonAddr::GLOBAL);
                }
                b => u16::from(b),
            },
            _ => buf.get_u16_le(),
        };

        match CommonAddr::new(raw) {
            Ok(addr) => Ok(addr),
            Err(e) => {
                #[cfg(feature = "tracing-support")]
                tracing::warn!("received common address 0");
                Err(e)
            }
        }
    }

    /// Encode an information object address at the configured width
    /// (little-endian).
    pub fn put_obj_addr<B: BufMut>(&self, buf: &mut B, addr: ObjAddr) -> Result<()> {
        self.validate()?;
        if addr.get() > self.max_obj_addr() {
            return Err(InfoError::ObjAddrFit {
                addr: addr.get(),
                size: self.obj_addr_size,
            });
        }
        buf.put_uint_le(u64::from(addr.get()), self.obj_addr_size);
        Ok(())
    }

    /// Decode an information object address at the configured width
    /// (little-endian).
    pub fn get_obj_addr<B: Buf>(&self, buf: &mut B) -> Result<ObjAddr> {
        self.validate()?;
        ensure_remaining(buf, self.obj_addr_size)?;
        Ok(ObjAddr(buf.get_uint_le(self.obj_addr_size) as u32))
    }
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(InfoError::BufferTooShort {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use rstest::rstest;

    #[test]
    fn test_params_default() {
        let params = Params::default();
        assert_eq!(params.common_addr_size, 2);
        assert_eq!(params.obj_addr_size, 3);
        assert!(params.validate().is_ok());
        assert!(Params::narrow().validate().is_ok());
    }

    #[rstest]
    #[case(0, 3)]
    #[case(3, 3)]
    #[case(2, 0)]
    #[case(2, 4)]
    fn test_params_invalid(#[case] common: usize, #[case] obj: usize) {
        let params = Params::wide().common_addr_size(common).obj_addr_size(obj);
        assert!(matches!(params.validate(), Err(InfoError::InvalidParams(_))));

        let mut buf = BytesMut::new();
        assert!(params.put_obj_addr(&mut buf, ObjAddr(1)).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_common_addr_wide() {
        let params = Params::wide();
        let mut buf = BytesMut::new();
        params.put_common_addr(&mut buf, CommonAddr::new(0x1234).unwrap()).unwrap();
        params.put_common_addr(&mut buf, CommonAddr::GLOBAL).unwrap();
        assert_eq!(&buf[..], &[0x34, 0x12, 0xFF, 0xFF]);

        let mut data = &buf[..];
        assert_eq!(params.get_common_addr(&mut data).unwrap().get(), 0x1234);
        assert_eq!(params.get_common_addr(&mut data).unwrap(), CommonAddr::GLOBAL);
        assert!(data.is_empty());
    }

    #[test]
    fn test_common_addr_narrow_broadcast_mapping() {
        let params = Params::narrow();

        let mut data: &[u8] = &[0xFF];
        assert_eq!(params.get_common_addr(&mut data).unwrap(), CommonAddr::GLOBAL);

        let mut buf = BytesMut::new();
        params.put_common_addr(&mut buf, CommonAddr::GLOBAL).unwrap();
        assert_eq!(&buf[..], &[0xFF]);
    }

    #[test]
    fn test_common_addr_narrow_fit() {
        let params = Params::narrow();
        let mut buf = BytesMut::new();

        params.put_common_addr(&mut buf, CommonAddr::new(254).unwrap()).unwrap();
        assert_eq!(&buf[..], &[0xFE]);

        assert_eq!(
            params.put_common_addr(&mut buf, CommonAddr::new(255).unwrap()),
            Err(InfoError::CommonAddrFit { addr: 255, size: 1 })
        );
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_common_addr_zero_on_wire() {
        let mut data: &[u8] = &[0x00, 0x00];
        assert_eq!(
            Params::wide().get_common_addr(&mut data),
            Err(InfoError::CommonAddrZero)
        );

        let mut data: &[u8] = &[0x00];
        assert_eq!(
            Params::narrow().get_common_addr(&mut data),
            Err(InfoError::CommonAddrZero)
        );
    }

    #[test]
    fn test_common_addr_short_buffer() {
        let mut data: &[u8] = &[0x01];
        assert_eq!(
            Params::wide().get_common_addr(&mut data),
            Err(InfoError::BufferTooShort {
                needed: 2,
                available: 1
            })
        );
    }

    #[rstest]
    #[case(1, 0xAB, &[0xAB])]
    #[case(2, 0xABCD, &[0xCD, 0xAB])]
    #[case(3, 0x123456, &[0x56, 0x34, 0x12])]
    fn test_obj_addr_widths(#[case] size: usize, #[case] addr: u32, #[case] wire: &[u8]) {
        let params = Params::wide().obj_addr_size(size);
        let mut buf = BytesMut::new();
        params.put_obj_addr(&mut buf, ObjAddr(addr)).unwrap();
        assert_eq!(&buf[..], wire);

        let mut data = &buf[..];
        assert_eq!(params.get_obj_addr(&mut data).unwrap(), ObjAddr(addr));
    }

    #[test]
    fn test_obj_addr_fit() {
        let params = Params::wide().obj_addr_size(2);
        let mut buf = BytesMut::new();
        assert_eq!(
            params.put_obj_addr(&mut buf, ObjAddr(0x10000)),
            Err(InfoError::ObjAddrFit {
                addr: 0x10000,
                size: 2
            })
        );
        assert_eq!(params.max_obj_addr(), 0xFFFF);
        assert_eq!(Params::wide().max_obj_addr(), 0xFF_FFFF);
    }

    #[test]
    fn test_obj_addr_irrelevant_on_wire() {
        let mut data: &[u8] = &[0, 0, 0];
        assert!(Params::wide().get_obj_addr(&mut data).unwrap().is_irrelevant());
    }

    #[test]
    fn test_max_common_addr() {
        assert_eq!(Params::narrow().max_common_addr(), 254);
        assert_eq!(Params::wide().max_common_addr(), 65534);
    }
}
