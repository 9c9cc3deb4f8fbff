// File: crates/figure-core/src/render.rs
// Summary: One-shot entry point: validate, draw in memory, then place the page file atomically.

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::chart::Chart;
use crate::error::{RenderError, Result};
use crate::request::RenderRequest;

/// Render `request` to its output path.
///
/// The whole page is encoded in memory first; the file only appears once it is
/// complete, so a failed call leaves nothing behind. The output directory must
/// already exist.
pub fn render(request: RenderRequest) -> Result<()> {
    let chart = Chart::new(&request)?;
    let format = request.format()?;
    let bytes = chart.render_bytes(format)?;
    debug!("encoded '{}' as {:?}: {} bytes", request.dataset().name, format, bytes.len());

    write_atomically(request.output(), &bytes)?;
    info!("wrote {}", request.output().display());
    Ok(())
}

/// Write `bytes` to a temp file beside `path`, then rename it over `path`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(RenderError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("directory {} does not exist", dir.display())),
        ));
    }

    let mut builder = tempfile::Builder::new();
    builder.prefix(".figure-").suffix(".part");
    // the temp file is persisted as-is, so it carries the final mode
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| RenderError::io(path, e))?;
    tmp.write_all(bytes).map_err(|e| RenderError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| RenderError::io(path, e))?;
    tmp.persist(path).map_err(|e| RenderError::io(path, e.error))?;
    Ok(())
}
