use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Write bytes through a sibling temporary file, then rename over `path`
    ///
    /// Readers never observe a partially written file.
    pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<PathBuf> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::ensure_dir(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
        temp.write_all(data)
            .context("Failed to write temporary file")?;
        temp.flush()?;
        temp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to move temporary file to: {}", path.display()))?;

        Ok(path.to_path_buf())
    }

    // @copies: File to destination, creating parent directories
    pub fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(source: P1, destination: P2) -> Result<PathBuf> {
        let source = source.as_ref();
        let destination = destination.as_ref();
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir(parent)?;
            }
        }
        fs::copy(source, destination).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), destination.display())
        })?;
        Ok(destination.to_path_buf())
    }
}
