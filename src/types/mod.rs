//! IEC 60870-5 information element types.
//!
//! This module contains the value types of the presentation layer:
//!
//! - `CommonAddr`, `ObjAddr` - Station and information object addresses
//! - `TypeId` - Type identification (M_SP_NA_1, etc.)
//! - `QualDesc` - Quality descriptor flags
//! - `SinglePoint`, `DoublePoint` - Switch states with quality
//! - `StepPos` - Step position with transient flag and quality
//! - `Normal` - Normalized value
//! - `QualParam` - Qualifier of parameter of measured values
//! - `SingleCmd`, `DoubleCmd`, `StepCmd` - Commands with qualifier
//! - `SetpointCmd` - Qualifier of set-point command

mod addr;
mod command;
mod normal;
mod param;
mod point;
mod quality;
mod setpoint;
mod step;
mod type_id;

pub use addr::*;
pub use command::*;
pub use normal::*;
pub use param::*;
pub use point::*;
pub use quality::*;
pub use setpoint::*;
pub use step::*;
pub use type_id::*;
