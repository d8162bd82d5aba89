use std::fs;
use std::path::Path;

use super::ShellError;

/// Read the splash art. A missing, unreadable or blank file is fatal.
pub fn load<P: AsRef<Path>>(path: P) -> Result<String, ShellError> {
    let path = path.as_ref();
    let art = fs::read_to_string(path)
        .map_err(|source| ShellError::MissingAsset { path: path.to_path_buf(), source })?;
    if art.trim().is_empty() {
        return Err(ShellError::EmptyAsset(path.to_path_buf()));
    }
    Ok(art)
}
