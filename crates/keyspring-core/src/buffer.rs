//! Output buffer for generated key material.

use std::fs;
use std::path::Path;

use crate::csprng::Csprng;
use crate::error::Error;
use crate::generator::GeneratorCore;

/// Byte store the generator fills on demand.
///
/// Backing storage is zero-initialized at construction, grows to the largest
/// fill ever requested, and never shrinks. Only the first
/// [`filled_len`](Self::filled_len) bytes hold freshly generated data; the
/// tail is stale and carries no guarantee.
pub struct OutputBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl OutputBuffer {
    /// Buffer with `capacity` bytes of zeroed backing storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            filled: 0,
        }
    }

    /// Grow backing storage to at least `n` bytes. Growth is to exactly the
    /// requested size; the buffer never shrinks.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.data.len() < n {
            self.data.resize(n, 0);
        }
    }

    /// Backing storage length.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Length of the freshly generated prefix.
    pub fn filled_len(&self) -> usize {
        self.filled
    }

    /// The freshly generated prefix.
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Fill the first `n` bytes with fresh output from `core`, growing the
    /// backing storage first if needed.
    ///
    /// On error the filled length does not advance and the prefix must not
    /// be used as generated data.
    pub fn fill<P: Csprng>(&mut self, core: &mut GeneratorCore<P>, n: usize) -> Result<(), Error> {
        self.ensure_capacity(n);
        core.fill(&mut self.data[..n])?;
        self.filled = n;
        Ok(())
    }

    /// Write the full backing contents — not just the filled prefix — to
    /// `path`, replacing any existing file.
    pub fn persist(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, &self.data)?;
        Ok(())
    }
}
