//! # iec60870_info
//!
//! Information element encoding of the IEC 60870-5-101/104 presentation layer.
//!
//! Every element is a small newtype over the fixed-width integer that travels
//! in an information object. Constructors pack the fields, `split` and the
//! accessors unpack them. Framing, byte placement inside an ASDU and
//! transport are left to the caller.
//!
//! ## Features
//!
//! - **Bit exact**: encodings follow companion standard 101, subclause 7.2.6
//! - **Type Safe**: distinct types for points, step positions and commands
//! - **Lenient decoding**: any received bit pattern decodes, reserved bits are ignored
//! - **Strict encoding**: out-of-range command qualifiers are an error, never clamped
//!
//! ## Quick Start
//!
//! ```rust
//! use iec60870_info::{QualDesc, SingleCmd, SinglePointState, StepPos};
//!
//! # fn main() -> iec60870_info::Result<()> {
//! let cmd = SingleCmd::new(SinglePointState::On, 1, true)?;
//! assert_eq!(cmd.raw(), 0x05);
//!
//! let pos = StepPos::new(-3, true, QualDesc::BLOCKED);
//! assert_eq!(pos.split(), (-3, true, QualDesc::BLOCKED));
//! # Ok(())
//! # }
//! ```
//!
//! ## Element Layout
//!
//! ```text
//! SIQ / DIQ:   | IV | NT | SB | BL | reserved | SPI or DPI  |
//! SCO / DCO:   | S/E|     QU (0..31)          | SCS or DCS  |
//! QOS:         | S/E|          QL (0..127)                 |
//! VTI + QDS:   | quality (8) | T | value (7, signed)       |
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod params;
pub mod types;

// Re-export main types
pub use error::{InfoError, Result};
pub use params::Params;
pub use types::*;
