//! End-to-end tests with the real ChaCha20 primitive: entropy collection,
//! seeding, generation, buffering, persistence.

use keyspring_core::{BOOTSTRAP_FILE_LEN, GeneratorConfig, RandomGenerator, SeedFilePolicy};

fn config_in(dir: &tempfile::TempDir, policy: SeedFilePolicy) -> GeneratorConfig {
    GeneratorConfig {
        buffer_capacity: 4096,
        seed_file: dir.path().join("seed.key"),
        policy,
        ..GeneratorConfig::default()
    }
}

#[test]
fn bootstrap_creates_seed_file_with_fixed_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, SeedFilePolicy::Bootstrap);
    let _generator = RandomGenerator::new(config.clone()).unwrap();
    let seed = std::fs::read(&config.seed_file).unwrap();
    assert_eq!(seed.len(), BOOTSTRAP_FILE_LEN);
}

#[test]
fn requested_byte_counts_are_exact() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = RandomGenerator::new(config_in(&dir, SeedFilePolicy::Bootstrap)).unwrap();
    for size in [0, 1, 20, 32, 64, 256, 1024] {
        assert_eq!(g.get_random_bytes(size).unwrap().len(), size);
    }
}

#[test]
fn successive_outputs_differ() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = RandomGenerator::new(config_in(&dir, SeedFilePolicy::Bootstrap)).unwrap();
    let a = g.get_random_bytes(32).unwrap();
    let b = g.get_random_bytes(32).unwrap();
    assert_ne!(a, b, "two draws from one generator repeated");
}

#[test]
fn same_seed_file_different_instances_differ() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, SeedFilePolicy::Bootstrap);
    let mut g1 = RandomGenerator::new(config.clone()).unwrap();
    let mut g2 = RandomGenerator::new(config).unwrap();
    // The file contributes identical bytes to both; clock, counter, and OS
    // entropy still have to separate the streams.
    assert_ne!(
        g1.get_random_bytes(32).unwrap(),
        g2.get_random_bytes(32).unwrap()
    );
}

#[test]
fn supplement_with_missing_file_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, SeedFilePolicy::Supplement);
    let mut g = RandomGenerator::new(config.clone()).unwrap();
    assert_eq!(g.get_random_bytes(20).unwrap().len(), 20);
    assert!(
        !config.seed_file.exists(),
        "supplement must not create the file"
    );
}

#[test]
fn supplement_reads_passphrase_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, SeedFilePolicy::Supplement);
    std::fs::write(&config.seed_file, b"correct horse battery staple").unwrap();
    let mut g = RandomGenerator::new(config).unwrap();
    assert_eq!(g.get_random_bytes(20).unwrap().len(), 20);
}

#[test]
fn hex_output_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = RandomGenerator::new(config_in(&dir, SeedFilePolicy::Bootstrap)).unwrap();
    let hex = g.get_random_hex_bytes(20).unwrap();
    assert_eq!(hex.len(), 40);
    assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
}

#[test]
fn fill_and_persist_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = RandomGenerator::new(config_in(&dir, SeedFilePolicy::Bootstrap)).unwrap();
    g.fill_buffer(128).unwrap();
    let filled = g.buffer().filled().to_vec();

    let key_path = dir.path().join("out.key");
    g.save_key(&key_path).unwrap();

    let on_disk = std::fs::read(&key_path).unwrap();
    assert_eq!(on_disk.len(), 4096, "the whole backing goes to disk");
    assert_eq!(&on_disk[..128], &filled[..]);
}

#[test]
fn persist_failure_reports_without_poisoning() {
    let dir = tempfile::tempdir().unwrap();
    let mut g = RandomGenerator::new(config_in(&dir, SeedFilePolicy::Bootstrap)).unwrap();
    g.fill_buffer(16).unwrap();
    let bogus = dir.path().join("no-such-dir").join("out.key");
    assert!(g.save_key(&bogus).is_err());
    // The generator still serves requests after a failed persist.
    assert_eq!(g.get_random_bytes(8).unwrap().len(), 8);
}

#[test]
fn buffer_grows_to_largest_fill_and_never_shrinks() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir, SeedFilePolicy::Bootstrap);
    config.buffer_capacity = 64;
    let mut g = RandomGenerator::new(config).unwrap();
    g.fill_buffer(32).unwrap();
    assert_eq!(g.buffer().capacity(), 64);
    g.fill_buffer(512).unwrap();
    assert_eq!(g.buffer().capacity(), 512);
    g.fill_buffer(8).unwrap();
    assert_eq!(g.buffer().capacity(), 512);
    assert_eq!(g.buffer().filled_len(), 8);
}

#[test]
fn bootstrap_reuses_the_seed_file_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, SeedFilePolicy::Bootstrap);
    let _g1 = RandomGenerator::new(config.clone()).unwrap();
    let first = std::fs::read(&config.seed_file).unwrap();
    let _g2 = RandomGenerator::new(config.clone()).unwrap();
    let second = std::fs::read(&config.seed_file).unwrap();
    assert_eq!(first, second, "an existing seed file must not be rewritten");
}
