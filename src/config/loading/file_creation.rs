use std::{fs, path::Path};

use crate::{OverlayError, Result};

const DEFAULT_CONFIG_HEADER: &str = "# nowplaying-overlay configuration file\n\
# Every section is optional. Run `nowplaying-overlay config show` for the\n\
# effective values.\n";

/// Creates a default configuration file if it doesn't exist
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| OverlayError::io_at(e, parent))?;
    }

    fs::write(path, DEFAULT_CONFIG_HEADER).map_err(|e| OverlayError::io_at(e, path))?;

    Ok(())
}
