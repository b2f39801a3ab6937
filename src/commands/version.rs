//! Version command implementation

use crate::config::{DEFAULT_REGISTRY_URL, config_file_path};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("solmod {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Default registry: {DEFAULT_REGISTRY_URL}");
    if let Some(path) = config_file_path() {
        println!("  Config file: {}", path.display());
    }

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported version declared in Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
