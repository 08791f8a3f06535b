//! Output module: output directory setup and run reporting

mod report;

pub use report::{print_report, CrawlReport};

use crate::Result;
use std::path::Path;
use tracing::debug;

/// Creates the output directory (and parents) if it does not exist
///
/// An unwritable output directory is a setup-fatal error: no capture can
/// succeed without it.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    debug!("Output directory ready at {}", path.display());
    Ok(())
}
