//! Subcommand implementations and shared helpers.

pub mod keygen;
pub mod probe;
pub mod stream;

use std::path::PathBuf;

use keyspring_core::{Error, GeneratorConfig, RandomGenerator, SeedFilePolicy};

/// Parse a policy flag value. Unknown values fall back to bootstrap with a
/// warning, mirroring the library's degrade-don't-die posture.
pub fn parse_policy(s: &str) -> SeedFilePolicy {
    match s {
        "supplement" => SeedFilePolicy::Supplement,
        "bootstrap" => SeedFilePolicy::Bootstrap,
        _ => {
            eprintln!("Unknown policy '{s}', using bootstrap");
            SeedFilePolicy::Bootstrap
        }
    }
}

/// Generator config from the common CLI flags.
pub fn build_config(seed_file: &str, policy: &str, capacity: usize) -> GeneratorConfig {
    GeneratorConfig {
        buffer_capacity: capacity,
        seed_file: PathBuf::from(seed_file),
        policy: parse_policy(policy),
        ..GeneratorConfig::default()
    }
}

/// Build a generator or exit. Construction failures are the fatal class —
/// clock, OS entropy, primitive init/seed — and the exit decision lives
/// here, not in the library.
pub fn make_generator(config: GeneratorConfig) -> RandomGenerator {
    match RandomGenerator::new(config) {
        Ok(g) => g,
        Err(e) => fatal(&e),
    }
}

/// Print the error chain and terminate.
pub fn fatal(e: &Error) -> ! {
    eprintln!("Error: {e}");
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_known_values() {
        assert_eq!(parse_policy("bootstrap"), SeedFilePolicy::Bootstrap);
        assert_eq!(parse_policy("supplement"), SeedFilePolicy::Supplement);
    }

    #[test]
    fn parse_policy_unknown_falls_back_to_bootstrap() {
        assert_eq!(parse_policy("???"), SeedFilePolicy::Bootstrap);
        assert_eq!(parse_policy(""), SeedFilePolicy::Bootstrap);
    }

    #[test]
    fn build_config_carries_the_flags() {
        let config = build_config("pass.txt", "supplement", 512);
        assert_eq!(config.seed_file.to_str(), Some("pass.txt"));
        assert_eq!(config.policy, SeedFilePolicy::Supplement);
        assert_eq!(config.buffer_capacity, 512);
    }
}
