use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Year value used when the filename gives no hint.
pub const UNKNOWN_YEAR: &str = "unknown";

/// One OCR dump ready for parsing.
pub struct Document {
    pub path: PathBuf,
    pub year: String,
    pub text: String,
}

/// Scans are named like "1975-a1_1-2.txt": the segment before the first
/// dash is the directory year when it is exactly four digits.
pub fn year_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    match name.split('-').next() {
        Some(prefix) if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) => {
            prefix.to_string()
        }
        _ => UNKNOWN_YEAR.to_string(),
    }
}

/// Collect the input files for a run: a single file as-is, or every ".txt"
/// in a directory, in sorted order.
pub fn discover(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .with_context(|| format!("reading input directory {}", input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("txt"))
        .collect();
    files.sort();
    Ok(files)
}

pub fn load(path: &Path, year_override: Option<&str>) -> Result<Document> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let year = year_override
        .map(str::to_string)
        .unwrap_or_else(|| year_from_path(path));
    Ok(Document {
        path: path.to_path_buf(),
        year,
        text,
    })
}

// ── Tests ──
