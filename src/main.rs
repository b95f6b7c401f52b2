//! hotupdate_bundler - hot-update content stager for hybrid game runtimes.
//!
//! This binary builds asset bundles, stages AOT metadata and hot-update
//! assemblies as `.bytes` files and writes a `Versions.txt` checksum
//! manifest.

use std::process;

use hotupdate_bundler::cli;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse_args();

    // RUST_LOG wins over the verbosity flags
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
