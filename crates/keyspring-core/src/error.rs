//! Error taxonomy for the generator.
//!
//! Failures fall into three classes with different handling contracts:
//!
//! - **Fatal environment faults** — broken wall clock, unavailable OS
//!   entropy, a primitive that will not initialize or accept its seed.
//!   Returned as errors from construction; there is no degraded mode for
//!   an unseedable generator. The top-level caller decides whether to
//!   terminate.
//! - **Degraded entropy** — seed-file problems. Handled inside the
//!   collector with a warning; never surfaced as an error.
//! - **Per-call failures** — a single generation request or a persistence
//!   write. Surfaced to the caller of that call and nothing else; the
//!   generator stays usable.

use thiserror::Error;

/// Failures reported by the CSPRNG primitive itself.
#[derive(Debug, Error)]
pub enum CsprngError {
    /// The primitive could not be allocated or initialized.
    #[error("primitive failed to initialize: {0}")]
    InitFailed(String),

    /// Output was requested before any seed material was supplied.
    #[error("primitive is not seeded")]
    NotSeeded,

    /// The primitive refused the supplied seed material.
    #[error("primitive rejected seed material: {0}")]
    RejectedSeed(String),

    /// The primitive could not satisfy a generation request.
    #[error("primitive could not produce output: {0}")]
    Exhausted(String),
}

/// Errors surfaced by the generator and its components.
#[derive(Debug, Error)]
pub enum Error {
    /// The wall clock reports a time before the Unix epoch. Seeding cannot
    /// proceed without a functioning time source.
    #[error("wall clock unavailable: {0}")]
    Clock(#[from] std::time::SystemTimeError),

    /// The OS CSPRNG refused to hand out entropy.
    #[error("OS entropy unavailable: {0}")]
    OsEntropy(getrandom::Error),

    /// The CSPRNG primitive failed to initialize.
    #[error("CSPRNG initialization failed")]
    Init(#[source] CsprngError),

    /// The CSPRNG primitive rejected the seed material.
    #[error("CSPRNG seeding failed")]
    Seed(#[source] CsprngError),

    /// One generation request failed. No bytes were produced; the output
    /// destination must not be treated as random data.
    #[error("random byte generation failed")]
    Generate(#[source] CsprngError),

    /// A file read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
