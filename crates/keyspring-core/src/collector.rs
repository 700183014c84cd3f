//! Environmental entropy collection.
//!
//! [`EntropyCollector`] gathers one sample from each host source — wall
//! clock, cycle counter, process id, OS entropy — plus bytes from a seed
//! file, and assembles them into [`SeedMaterial`]. Seed-file problems
//! degrade: the collector warns and the file contributes nothing. A broken
//! clock or OS CSPRNG is an error, because the remaining sources cannot
//! carry the seed on their own.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use crate::counter::{CycleCounter, detect_cycle_counter};
use crate::error::Error;
use crate::seed::{OS_ENTROPY_LEN, SeedMaterial};

/// Length of the random block written to a missing seed file under
/// [`SeedFilePolicy::Bootstrap`].
pub const BOOTSTRAP_FILE_LEN: usize = 256;

/// Upper bound on bytes read from a passphrase file under
/// [`SeedFilePolicy::Supplement`].
pub const MAX_SUPPLEMENT_BYTES: usize = 1024;

/// How the seed file contributes to the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedFilePolicy {
    /// The file is the generator's durable seed store: read whole when
    /// present, created with fresh OS randomness when absent.
    #[default]
    Bootstrap,
    /// The file is an optional passphrase: a bounded prefix is read when
    /// possible, nothing is contributed otherwise. Never created.
    Supplement,
}

impl std::fmt::Display for SeedFilePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bootstrap => write!(f, "bootstrap"),
            Self::Supplement => write!(f, "supplement"),
        }
    }
}

/// Gathers host-environment entropy into [`SeedMaterial`].
pub struct EntropyCollector {
    counter: Box<dyn CycleCounter>,
}

impl EntropyCollector {
    /// Collector using the cycle counter picked for this machine.
    pub fn new() -> Self {
        let counter = detect_cycle_counter();
        debug!("cycle counter: {}", counter.name());
        Self { counter }
    }

    /// Collector with an explicit counter.
    pub fn with_counter(counter: Box<dyn CycleCounter>) -> Self {
        Self { counter }
    }

    /// Name of the counter backing this collector.
    pub fn counter_name(&self) -> &'static str {
        self.counter.name()
    }

    /// Gather one sample from every source.
    pub fn collect(&self, seed_file: &Path, policy: SeedFilePolicy) -> Result<SeedMaterial, Error> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?;

        let mut os_entropy = [0u8; OS_ENTROPY_LEN];
        getrandom::fill(&mut os_entropy).map_err(Error::OsEntropy)?;

        let file_bytes = match policy {
            SeedFilePolicy::Bootstrap => self.bootstrap_file(seed_file)?,
            SeedFilePolicy::Supplement => self.supplement_file(seed_file),
        };

        // SAFETY: getpid() cannot fail and has no preconditions.
        let pid = unsafe { libc::getpid() } as u16;

        Ok(SeedMaterial {
            secs: now.as_secs() as u32,
            nanos: now.subsec_nanos(),
            counter: self.counter.read(),
            pid,
            os_entropy,
            file_bytes,
        })
    }

    /// Bootstrap policy: whole-file read, create-with-fresh-randomness when
    /// the file does not exist. Only the OS entropy draw is an error; file
    /// problems degrade.
    fn bootstrap_file(&self, path: &Path) -> Result<Vec<u8>, Error> {
        match fs::read(path) {
            Ok(bytes) => {
                debug!("read {} seed bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let mut fresh = vec![0u8; BOOTSTRAP_FILE_LEN];
                getrandom::fill(&mut fresh).map_err(Error::OsEntropy)?;
                match fs::write(path, &fresh) {
                    Ok(()) => info!(
                        "created seed file {} ({BOOTSTRAP_FILE_LEN} bytes)",
                        path.display()
                    ),
                    // The fresh bytes still feed the seed even when they
                    // could not be persisted.
                    Err(e) => warn!("failed to create seed file {}: {e}", path.display()),
                }
                Ok(fresh)
            }
            Err(e) => {
                warn!("failed to read seed file {}: {e}", path.display());
                Ok(Vec::new())
            }
        }
    }

    /// Supplement policy: bounded prefix of an optional passphrase file.
    fn supplement_file(&self, path: &Path) -> Vec<u8> {
        let file = match fs::File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("failed to open password file {}: {e}", path.display());
                return Vec::new();
            }
        };

        let mut bytes = Vec::new();
        match file.take(MAX_SUPPLEMENT_BYTES as u64).read_to_end(&mut bytes) {
            Ok(n) => {
                debug!("read {n} bytes from password file {}", path.display());
                bytes
            }
            Err(e) => {
                warn!("failed to read password file {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}

impl Default for EntropyCollector {
    fn default() -> Self {
        Self::new()
    }
}
