//! Generator core and the public facade.
//!
//! [`GeneratorCore`] owns the CSPRNG primitive for its whole lifetime: seeded
//! exactly once at construction, a fixed warm-up prefix discarded, then every
//! byte request served from the same stream. [`RandomGenerator`] wires the
//! collector, the packed seed, the core, and the output buffer together and
//! carries the public operations.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use log::debug;
use zeroize::Zeroize;

use crate::buffer::OutputBuffer;
use crate::collector::{EntropyCollector, SeedFilePolicy};
use crate::csprng::{ChaChaCsprng, Csprng};
use crate::error::Error;
use crate::seed::SeedMaterial;

/// Output bytes discarded immediately after seeding, guarding against bias
/// in the primitive's earliest state.
pub const WARMUP_BYTES: usize = 65;

/// Backing capacity selected when the configured capacity is zero: 256 MiB.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256 << 20;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Construction parameters for [`RandomGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Advisory key size in bits. Recorded for callers; the seeding protocol
    /// does not consult it.
    pub key_size_bits: usize,
    /// Output buffer backing capacity in bytes. `0` selects
    /// [`DEFAULT_BUFFER_CAPACITY`].
    pub buffer_capacity: usize,
    /// Seed or passphrase file, interpreted per `policy`.
    pub seed_file: PathBuf,
    /// Seed-file resolution policy.
    pub policy: SeedFilePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            key_size_bits: 2048,
            buffer_capacity: 0,
            seed_file: PathBuf::from("random.key"),
            policy: SeedFilePolicy::Bootstrap,
        }
    }
}

impl GeneratorConfig {
    /// The capacity the output buffer will actually be built with.
    pub fn effective_capacity(&self) -> usize {
        if self.buffer_capacity == 0 {
            DEFAULT_BUFFER_CAPACITY
        } else {
            self.buffer_capacity
        }
    }
}

// ---------------------------------------------------------------------------
// Core
// ---------------------------------------------------------------------------

/// Owns the seeded CSPRNG primitive and serves byte requests.
pub struct GeneratorCore<P: Csprng> {
    primitive: P,
}

impl<P: Csprng> GeneratorCore<P> {
    /// Seed `primitive` with `material` and discard the warm-up prefix.
    ///
    /// Seed rejection is unrecoverable for this primitive instance. The
    /// packed copy of the material is wiped either way.
    pub fn new(mut primitive: P, material: &SeedMaterial) -> Result<Self, Error> {
        let mut packed = material.pack();
        let seeded = primitive.seed(&packed);
        packed.zeroize();
        seeded.map_err(Error::Seed)?;

        let mut core = Self { primitive };
        core.discard_warmup()?;
        Ok(core)
    }

    fn discard_warmup(&mut self) -> Result<(), Error> {
        let mut discard = [0u8; WARMUP_BYTES];
        self.primitive
            .generate(&mut discard)
            .map_err(Error::Generate)?;
        discard.zeroize();
        Ok(())
    }

    /// Fill `dest` with fresh output. On error no byte of `dest` may be
    /// treated as generated data.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.primitive.generate(dest).map_err(Error::Generate)
    }

    /// Exactly `n` fresh bytes, or an error — never a zero-filled fallback.
    pub fn next_bytes(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        let mut out = vec![0u8; n];
        self.fill(&mut out)?;
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Facade
// ---------------------------------------------------------------------------

/// Process-local generator for cryptographic key material.
///
/// Construction runs the whole seeding protocol — collect environmental
/// entropy, pack it, seed the primitive, discard warm-up output — and every
/// later operation draws from the seeded stream. All methods take
/// `&mut self`: one instance serves one thread. For shared use, keep one
/// generator per thread or wrap it in an external mutex; there is no global
/// instance and no internal locking.
pub struct RandomGenerator<P: Csprng = ChaChaCsprng> {
    core: GeneratorCore<P>,
    buffer: OutputBuffer,
    config: GeneratorConfig,
}

// Manual impl: primitive state and buffer contents are key material and must
// never reach diagnostic output.
impl<P: Csprng> std::fmt::Debug for RandomGenerator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RandomGenerator {
    /// Generator backed by the ChaCha20 primitive.
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        Self::init(config)
    }
}

impl<P: Csprng> RandomGenerator<P> {
    /// Initialize a fresh primitive `P` and run the seeding protocol.
    pub fn init(config: GeneratorConfig) -> Result<Self, Error> {
        let primitive = P::init().map_err(Error::Init)?;
        Self::with_primitive(primitive, config)
    }

    /// Run the seeding protocol around an already-constructed primitive.
    pub fn with_primitive(primitive: P, config: GeneratorConfig) -> Result<Self, Error> {
        Self::with_parts(primitive, EntropyCollector::new(), config)
    }

    /// Fully explicit construction: primitive and collector supplied by the
    /// caller.
    pub fn with_parts(
        primitive: P,
        collector: EntropyCollector,
        config: GeneratorConfig,
    ) -> Result<Self, Error> {
        let material = collector.collect(&config.seed_file, config.policy)?;
        let core = GeneratorCore::new(primitive, &material)?;
        let buffer = OutputBuffer::with_capacity(config.effective_capacity());
        debug!(
            "generator ready: policy={}, counter={}, buffer={} bytes",
            config.policy,
            collector.counter_name(),
            buffer.capacity()
        );
        Ok(Self {
            core,
            buffer,
            config,
        })
    }

    /// Fill the buffer's first `bytes` bytes with fresh output, growing the
    /// buffer if the request exceeds its capacity.
    pub fn fill_buffer(&mut self, bytes: usize) -> Result<(), Error> {
        self.buffer.fill(&mut self.core, bytes)
    }

    /// A freshly allocated sequence of exactly `size` random bytes. Does not
    /// touch the persistent buffer.
    pub fn get_random_bytes(&mut self, size: usize) -> Result<Vec<u8>, Error> {
        self.core.next_bytes(size)
    }

    /// Lower-case hex encoding of `size` fresh random bytes; two characters
    /// per byte.
    pub fn get_random_hex_bytes(&mut self, size: usize) -> Result<String, Error> {
        let bytes = self.get_random_bytes(size)?;
        let mut hex = String::with_capacity(bytes.len() * 2);
        for b in &bytes {
            write!(hex, "{b:02x}").unwrap();
        }
        Ok(hex)
    }

    /// Persist the buffer's full backing contents to `path`. A failure here
    /// does not poison the generator.
    pub fn save_key(&self, path: &Path) -> Result<(), Error> {
        self.buffer.persist(path)
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Read-only view of the output buffer.
    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }
}
