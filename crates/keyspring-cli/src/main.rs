//! CLI for keyspring — seeded random bytes and key files.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keyspring")]
#[command(about = "keyspring — seeded random generator for cryptographic key material")]
#[command(version = keyspring_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate key material into the buffer and write it to a file
    Keygen {
        /// Output path for the key file
        #[arg(default_value = "random.key")]
        output: String,

        /// Freshly generated bytes in the key
        #[arg(long, default_value = "256")]
        bytes: usize,

        /// Seed or passphrase file
        #[arg(long, default_value = "random.key")]
        seed_file: String,

        /// Seed-file policy: bootstrap (create if missing) or supplement (optional passphrase)
        #[arg(long, default_value = "bootstrap", value_parser = ["bootstrap", "supplement"])]
        policy: String,

        /// Buffer capacity in bytes (0 = same as --bytes); the whole buffer goes to the file
        #[arg(long, default_value = "0")]
        capacity: usize,
    },

    /// Write random bytes to stdout (pipe-friendly)
    Stream {
        /// Total bytes to emit
        #[arg(long, default_value = "32")]
        bytes: usize,

        /// Output format
        #[arg(long, default_value = "hex", value_parser = ["raw", "hex"])]
        format: String,

        /// Seed or passphrase file
        #[arg(long, default_value = "random.key")]
        seed_file: String,

        /// Seed-file policy: bootstrap (create if missing) or supplement (optional passphrase)
        #[arg(long, default_value = "bootstrap", value_parser = ["bootstrap", "supplement"])]
        policy: String,
    },

    /// Show the cycle counter, seed-file status, and generator defaults for this machine
    Probe {
        /// Seed or passphrase file to inspect
        #[arg(long, default_value = "random.key")]
        seed_file: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen {
            output,
            bytes,
            seed_file,
            policy,
            capacity,
        } => commands::keygen::run(&output, bytes, &seed_file, &policy, capacity),
        Commands::Stream {
            bytes,
            format,
            seed_file,
            policy,
        } => commands::stream::run(bytes, &format, &seed_file, &policy),
        Commands::Probe { seed_file } => commands::probe::run(&seed_file),
    }
}
