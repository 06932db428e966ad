// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::to_export_string;
use crate::dataset::Dataset;
use crate::error::ScrapeError;

/// Write the dataset to `export.out_path()` in `export.format`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, dataset: &Dataset) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    match export.format.delimiter() {
        Some(sep) => {
            let contents = to_export_string(
                &Dataset::headers(),
                &dataset.to_rows(),
                export.include_headers,
                sep,
            );
            fs::write(&path, contents)?;
        }
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            let mut out = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut out, dataset.records())?;
            out.flush()?;
        }
    }

    logf!("Wrote {} creatures to {}", dataset.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Path(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
