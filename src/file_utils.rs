use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string, dropping malformed UTF-8 bytes.
    ///
    /// Digitized public-domain texts frequently carry stray bytes from old
    /// encodings; those are replaced rather than failing the whole run.
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    // @generates: Output path for a report artifact
    // @params: results_dir, book_path, kind, extension
    pub fn report_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        results_dir: P1,
        book_path: P2,
        kind: &str,
        extension: &str,
    ) -> PathBuf {
        let results_dir = results_dir.as_ref();
        let stem = book_path.as_ref().file_stem().unwrap_or_default();

        let mut filename = stem.to_string_lossy().to_string();
        filename.push('.');
        filename.push_str(kind);
        filename.push('.');
        filename.push_str(extension);

        results_dir.join(filename)
    }
}
