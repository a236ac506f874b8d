use crate::error::{DevToolsError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `data` to `path` when one is given, then copies it to `stdout`.
///
/// The file is created or truncated. Stdout always receives the data, with or
/// without a file.
pub fn write_output<W: Write>(path: Option<&Path>, data: &[u8], stdout: &mut W) -> Result<()> {
    if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
        fs::write(path, data).map_err(|source| DevToolsError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", data.len(), path.display());
    }

    stdout
        .write_all(data)
        .and_then(|_| stdout.flush())
        .map_err(DevToolsError::WriteStdout)
}
