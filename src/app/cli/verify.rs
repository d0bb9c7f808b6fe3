//! `verify` command implementation.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::{AppError, Platform};

pub fn run_verify(dir: PathBuf, names: &str, platform: Platform) -> Result<(), AppError> {
    let found = api::verify_staged(&dir, names, platform)?;
    for path in &found {
        println!("  {}", path.display());
    }
    println!("✅ All {} staged librar{} present", found.len(), if found.len() == 1 { "y" } else { "ies" });
    Ok(())
}
