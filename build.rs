//! Build script for the Spotify Playlist Shuffle CLI.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory so that it sits next to where the application looks for
//! its `.env` file:
//! - Linux: `~/.local/share/sporlshuffle/.env.example`
//! - macOS: `~/Library/Application Support/sporlshuffle/.env.example`
//! - Windows: `%LOCALAPPDATA%/sporlshuffle/.env.example`
//!
//! Every failure is reported as a cargo warning; the build itself never fails
//! because of the template.

use std::{env, fs, path::PathBuf};

fn copy_template() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sporlshuffle");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_template() {
        println!("cargo:warning=could not install .env.example: {}", e);
    }
}
