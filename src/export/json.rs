use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use crate::foundation::error::{SnapreelError, SnapreelResult};

/// Create `path`'s parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> SnapreelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Pretty-print `value` as JSON into `path`.
pub fn write_json<T: serde::Serialize + ?Sized>(value: &T, path: &Path) -> SnapreelResult<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).map_err(|e| {
        SnapreelError::serde(format!("create '{}': {e}", path.display()))
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)
        .map_err(|e| SnapreelError::serde(format!("write '{}': {e}", path.display())))?;
    w.flush()
        .map_err(|e| SnapreelError::serde(format!("flush '{}': {e}", path.display())))?;
    Ok(())
}
