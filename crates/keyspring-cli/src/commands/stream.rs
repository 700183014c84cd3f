use std::io::{self, Write};

pub fn run(bytes: usize, format: &str, seed_file: &str, policy: &str) {
    // The stream path never touches the persistent buffer; keep it tiny.
    let config = super::build_config(seed_file, policy, 1);
    let mut generator = super::make_generator(config);

    let data = match generator.get_random_bytes(bytes) {
        Ok(data) => data,
        Err(e) => super::fatal(&e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match format {
        "raw" => out.write_all(&data),
        _ => {
            let hex: String = data.iter().map(|b| format!("{b:02x}")).collect();
            out.write_all(hex.as_bytes())
                .and_then(|()| out.write_all(b"\n"))
        }
    };

    match result {
        // Downstream closed the pipe (e.g. `keyspring stream | head -c 16`).
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            std::process::exit(1);
        }
        Ok(()) => {}
    }
    let _ = out.flush();
}
