//! # keyspring-core
//!
//! **Environmental entropy in, key bytes out.**
//!
//! `keyspring-core` seeds a ChaCha20 CSPRNG from the host environment — wall
//! clock, cycle counter, process id, OS entropy, and an optional seed file —
//! then serves random bytes, hex strings, and a persistable key buffer from
//! that one seeded stream.
//!
//! ## Quick Start
//!
//! ```no_run
//! use keyspring_core::{GeneratorConfig, RandomGenerator};
//!
//! let config = GeneratorConfig {
//!     buffer_capacity: 4096,
//!     seed_file: "random.key".into(),
//!     ..GeneratorConfig::default()
//! };
//! let mut generator = RandomGenerator::new(config)?;
//!
//! // Fresh key bytes, straight from the seeded stream
//! let key = generator.get_random_bytes(32)?;
//! assert_eq!(key.len(), 32);
//!
//! // Hex tokens for text protocols
//! let token = generator.get_random_hex_bytes(16)?;
//! assert_eq!(token.len(), 32);
//!
//! // Fill the persistent buffer and write it out as a key file
//! generator.fill_buffer(4096)?;
//! generator.save_key("session.key".as_ref())?;
//! # Ok::<(), keyspring_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Collector → SeedMaterial (pack) → Core (seed + warm-up) → Buffer
//!
//! - The **collector** samples every entropy source once per construction.
//!   Seed-file problems degrade with a warning; a broken clock or OS CSPRNG
//!   is an error.
//! - **Seed material** is packed into a fixed byte layout and wiped after
//!   the primitive consumes it.
//! - The **core** seeds the primitive exactly once, discards a warm-up
//!   prefix, and serves every later request from the same stream. A failed
//!   request is an error, never silently zeroed output.
//! - The **buffer** keeps the last filled key material and persists its full
//!   backing to disk.
//!
//! There is no global instance and no internal locking: every
//! [`RandomGenerator`] owns its primitive, and `&mut self` enforces one user
//! at a time. Keep one generator per thread, or serialize access externally.

pub mod buffer;
pub mod collector;
pub mod counter;
pub mod csprng;
pub mod error;
pub mod generator;
pub mod seed;

pub use buffer::OutputBuffer;
pub use collector::{BOOTSTRAP_FILE_LEN, EntropyCollector, MAX_SUPPLEMENT_BYTES, SeedFilePolicy};
pub use counter::{
    ArmCounter, CycleCounter, TickCounter, TscCounter, all_counters, detect_cycle_counter,
};
pub use csprng::{ChaChaCsprng, Csprng};
pub use error::{CsprngError, Error};
pub use generator::{
    DEFAULT_BUFFER_CAPACITY, GeneratorConfig, GeneratorCore, RandomGenerator, WARMUP_BYTES,
};
pub use seed::{OS_ENTROPY_LEN, PACKED_PREFIX_LEN, SeedMaterial};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
