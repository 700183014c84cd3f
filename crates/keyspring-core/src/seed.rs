//! Seed material and its packed byte layout.
//!
//! [`SeedMaterial`] holds one sample from every entropy source the collector
//! knows; [`SeedMaterial::pack`] concatenates them into the byte sequence fed
//! to the CSPRNG primitive. Packing is pure assembly — field order and widths
//! are fixed, all unpredictability comes from the inputs.
//!
//! ```text
//! offset  width  field
//!      0      4  wall-clock seconds (u32 LE)
//!      4      4  wall-clock nanoseconds (u32 LE)
//!      8      8  cycle-counter snapshot (u64 LE)
//!     16      2  process id (u16 LE)
//!     18     32  OS entropy block
//!     50      N  seed-file bytes (policy-dependent, possibly empty)
//! ```

use zeroize::Zeroize;

/// Packed length before the variable-length file contribution.
pub const PACKED_PREFIX_LEN: usize = 50;

/// Width of the OS entropy block.
pub const OS_ENTROPY_LEN: usize = 32;

/// One sample from every entropy source, ready for packing.
///
/// File bytes may be a passphrase, so the whole struct is wiped on drop.
pub struct SeedMaterial {
    /// Wall-clock seconds since the Unix epoch, truncated to the field width.
    pub secs: u32,
    /// Sub-second component of the same clock reading.
    pub nanos: u32,
    /// One cycle-counter sample.
    pub counter: u64,
    /// Process id, truncated to the field width.
    pub pid: u16,
    /// Fresh OS entropy.
    pub os_entropy: [u8; OS_ENTROPY_LEN],
    /// Seed-file contribution (empty in degraded mode).
    pub file_bytes: Vec<u8>,
}

impl SeedMaterial {
    /// Total packed length for this material.
    pub fn packed_len(&self) -> usize {
        PACKED_PREFIX_LEN + self.file_bytes.len()
    }

    /// Concatenate every field in layout order.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.packed_len());
        out.extend_from_slice(&self.secs.to_le_bytes());
        out.extend_from_slice(&self.nanos.to_le_bytes());
        out.extend_from_slice(&self.counter.to_le_bytes());
        out.extend_from_slice(&self.pid.to_le_bytes());
        out.extend_from_slice(&self.os_entropy);
        out.extend_from_slice(&self.file_bytes);
        out
    }
}

impl Zeroize for SeedMaterial {
    fn zeroize(&mut self) {
        self.secs.zeroize();
        self.nanos.zeroize();
        self.counter.zeroize();
        self.pid.zeroize();
        self.os_entropy.zeroize();
        self.file_bytes.zeroize();
    }
}

impl Drop for SeedMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}
