use serde::{Deserialize, Serialize};
use crate::constant::{CAN_ACC_CODE_NONE, CAN_ACC_MASK_NONE};

/// Acceptance code and mask of a controller channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AcceptanceFilter {
    pub code: u32,
    pub mask: u32,
}

impl AcceptanceFilter {
    /// Rejects every identifier.
    pub const NONE: Self = Self { code: CAN_ACC_CODE_NONE, mask: CAN_ACC_MASK_NONE };
    /// Accepts every identifier.
    pub const ALL: Self = Self { code: 0, mask: 0 };

    #[inline]
    pub const fn new(code: u32, mask: u32) -> Self {
        Self { code, mask }
    }

    #[inline]
    pub fn is_reject_all(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for AcceptanceFilter {
    fn default() -> Self {
        Self::ALL
    }
}
