use std::path::Path;

use keyspring_core::{
    BOOTSTRAP_FILE_LEN, DEFAULT_BUFFER_CAPACITY, MAX_SUPPLEMENT_BYTES, WARMUP_BYTES,
    all_counters, detect_cycle_counter,
};

pub fn run(seed_file: &str) {
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!();

    let selected = detect_cycle_counter();
    println!("Cycle counters:");
    for counter in all_counters() {
        let marker = if counter.is_available() {
            "\u{2705}"
        } else {
            "\u{274C}"
        };
        let tag = if counter.name() == selected.name() {
            "  (selected)"
        } else {
            ""
        };
        println!("  {marker} {:<8}{tag}", counter.name());
    }
    println!();

    let path = Path::new(seed_file);
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            println!("Seed file:       {seed_file} ({} bytes)", meta.len());
        }
        Ok(_) => {
            println!("Seed file:       {seed_file} (not a regular file)");
        }
        Err(_) => {
            println!(
                "Seed file:       {seed_file} (absent; bootstrap would create it with {BOOTSTRAP_FILE_LEN} bytes)"
            );
        }
    }

    println!("Warm-up discard: {WARMUP_BYTES} bytes");
    println!("Passphrase cap:  {MAX_SUPPLEMENT_BYTES} bytes");
    println!(
        "Default buffer:  {} MiB",
        DEFAULT_BUFFER_CAPACITY / (1024 * 1024)
    );
}
