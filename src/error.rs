//! Error types for IEC 60870-5 information elements.

use thiserror::Error;

use crate::types::TypeId;

/// Result type alias for information element operations.
pub type Result<T> = std::result::Result<T, InfoError>;

/// IEC 60870-5 information element error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    /// Common address 0 is reserved
    #[error("Common address 0 is not used")]
    CommonAddrZero,

    /// Broadcast address used with a type that does not allow it
    #[error("Global address not permitted for {0}")]
    GlobalAddrNotPermitted(TypeId),

    /// Common address does not fit the configured width
    #[error("Common address {addr} does not fit in {size} byte(s)")]
    CommonAddrFit { addr: u16, size: usize },

    /// Object address does not fit the configured width
    #[error("Object address {addr} does not fit in {size} byte(s)")]
    ObjAddrFit { addr: u32, size: usize },

    /// Command qualifier exceeds its range
    #[error("Qualifier out of range: {qual} > {max}")]
    QualifierOutOfRange { qual: u8, max: u8 },

    /// Unknown type identifier
    #[error("Unknown type ID: {0}")]
    UnknownTypeId(u8),

    /// Invalid address width configuration
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Not enough bytes to decode a field
    #[error("Buffer too short: need {needed}, have {available}")]
    BufferTooShort { needed: usize, available: usize },
}

impl InfoError {
    /// Create an invalid params error with a message.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Check if this error concerns a common or object address.
    pub fn is_addr_error(&self) -> bool {
        matches!(
            self,
            Self::CommonAddrZero
                | Self::GlobalAddrNotPermitted(_)
                | Self::CommonAddrFit { .. }
                | Self::ObjAddrFit { .. }
        )
    }

    /// Check if this error is a caller contract violation rather than bad
    /// data received from a peer.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::QualifierOutOfRange { .. })
    }
}
