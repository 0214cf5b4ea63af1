//! Scoped secret buffer for the session's transient secret

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret slot that is zeroed before reuse and on drop
///
/// Models the device's transient secret memory: one buffer, one owner,
/// cleared explicitly between sessions rather than relying on any
/// object-lifecycle mechanism.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSlot<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SecretSlot<N> {
    /// Create a zeroed slot
    pub fn zeroed() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Zero the slot in place
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }

    /// Read access to the slot contents
    pub fn expose(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Write access for the operation filling the slot
    pub fn as_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }
}

impl<const N: usize> fmt::Debug for SecretSlot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretSlot<{}>([REDACTED])", N)
    }
}
