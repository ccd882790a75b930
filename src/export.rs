use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::entry::ExportRecord;
use crate::error::ConvertError;

/// Renders the entries as a JSON array indented by two spaces.
pub fn render(entries: &[ExportRecord]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Writes the rendered entries to `path`.
///
/// The document is staged in a temporary file next to `path` and renamed
/// over it, so a failure leaves any previous file untouched. An existing
/// file keeps its permissions; a new one is created as 0644.
pub fn write_export(path: &Path, entries: &[ExportRecord]) -> Result<(), ConvertError> {
    let json = render(entries)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o644));
    let mut file = builder
        .tempfile_in(dir)
        .map_err(|e| ConvertError::io(path, e))?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| ConvertError::io(path, e))?;
    }
    file.write_all(json.as_bytes())
        .map_err(|e| ConvertError::io(path, e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| ConvertError::io(path, e))?;
    file.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;

    debug!(path = ?path, entries = entries.len(), "Wrote export file");
    Ok(())
}
