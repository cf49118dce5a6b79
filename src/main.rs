//! Inno Bundler - Inno Setup script generator for multi-component products.
//!
//! This binary renders an installer script from a JSON config, optionally
//! compiles it, and optionally signs the installer.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match inno_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
