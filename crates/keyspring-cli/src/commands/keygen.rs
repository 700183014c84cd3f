use std::path::PathBuf;

use log::debug;

pub fn run(output: &str, bytes: usize, seed_file: &str, policy: &str, capacity: usize) {
    // Zero capacity would select the library's 256 MiB default and the key
    // file is the whole backing, so size the buffer to the request instead.
    let capacity = if capacity == 0 { bytes.max(1) } else { capacity };
    let config = super::build_config(seed_file, policy, capacity);
    debug!("keygen: {bytes} bytes into {output} (buffer {capacity})");

    let mut generator = super::make_generator(config);

    if let Err(e) = generator.fill_buffer(bytes) {
        super::fatal(&e);
    }

    let path = PathBuf::from(output);
    match generator.save_key(&path) {
        Ok(()) => println!(
            "Wrote {} bytes of key material to {output}",
            generator.buffer().capacity()
        ),
        Err(e) => {
            eprintln!("Failed to save key to {output}: {e}");
            std::process::exit(1);
        }
    }
}
