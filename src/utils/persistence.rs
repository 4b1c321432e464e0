//! Locations of the files the game keeps under `~/.potty-run/`.

use std::fs;
use std::io;
use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".potty-run";

/// Log file written when `--log-file` is not given.
pub const LOG_FILE_NAME: &str = "potty-run.log";

/// Get the ~/.potty-run/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.potty-run/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}
