//! Cycle counters, selected per platform.
//!
//! The seeding protocol wants one raw cycle-counter snapshot. Which register
//! backs it depends on the machine: x86_64 has the time-stamp counter,
//! aarch64 exposes the generic timer, everything else falls back to a
//! monotonic tick count. Selection happens once via [`detect_cycle_counter`];
//! the rest of the library never touches `cfg` directly.

use std::sync::OnceLock;
use std::time::Instant;

/// A counter sampled once per seeding round.
///
/// Implementations must be cheap to read and monotonic enough that two
/// reads in one process rarely collide. They are an entropy contribution,
/// not a clock: nothing downstream interprets the value.
pub trait CycleCounter: Send + Sync {
    /// Short identifier, e.g. `"tsc"`.
    fn name(&self) -> &'static str;

    /// Whether this counter can be read on the current machine.
    fn is_available(&self) -> bool;

    /// Read one sample.
    fn read(&self) -> u64;
}

// ---------------------------------------------------------------------------
// x86_64: time-stamp counter
// ---------------------------------------------------------------------------

/// The x86_64 time-stamp counter, read via `rdtsc`.
pub struct TscCounter;

#[cfg(target_arch = "x86_64")]
fn read_tsc() -> u64 {
    // SAFETY: RDTSC is unprivileged on every x86_64 target Rust supports;
    // it reads a counter register and has no side effects.
    unsafe { std::arch::x86_64::_rdtsc() }
}

#[cfg(not(target_arch = "x86_64"))]
fn read_tsc() -> u64 {
    0
}

impl CycleCounter for TscCounter {
    fn name(&self) -> &'static str {
        "tsc"
    }

    fn is_available(&self) -> bool {
        cfg!(target_arch = "x86_64")
    }

    fn read(&self) -> u64 {
        read_tsc()
    }
}

// ---------------------------------------------------------------------------
// aarch64: generic timer
// ---------------------------------------------------------------------------

/// The ARM generic timer counter (CNTVCT_EL0).
pub struct ArmCounter;

#[cfg(target_arch = "aarch64")]
fn read_cntvct() -> u64 {
    let val: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on the aarch64 targets Rust
    // supports; a read-only system register access with no side effects.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) val, options(nostack, nomem));
    }
    val
}

#[cfg(not(target_arch = "aarch64"))]
fn read_cntvct() -> u64 {
    0
}

impl CycleCounter for ArmCounter {
    fn name(&self) -> &'static str {
        "cntvct"
    }

    fn is_available(&self) -> bool {
        cfg!(target_arch = "aarch64")
    }

    fn read(&self) -> u64 {
        read_cntvct()
    }
}

// ---------------------------------------------------------------------------
// Portable fallback: monotonic ticks
// ---------------------------------------------------------------------------

/// Nanosecond ticks relative to a process-local epoch. Always available.
pub struct TickCounter;

fn tick_count() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}

impl CycleCounter for TickCounter {
    fn name(&self) -> &'static str {
        "tick"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn read(&self) -> u64 {
        tick_count()
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Every counter implementation, preferred order first.
pub fn all_counters() -> Vec<Box<dyn CycleCounter>> {
    vec![
        Box::new(TscCounter),
        Box::new(ArmCounter),
        Box::new(TickCounter),
    ]
}

/// The first counter available on this machine. [`TickCounter`] closes the
/// list, so there is always one.
pub fn detect_cycle_counter() -> Box<dyn CycleCounter> {
    all_counters()
        .into_iter()
        .find(|c| c.is_available())
        .unwrap_or_else(|| Box::new(TickCounter))
}
