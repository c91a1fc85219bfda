//! Input resolution and loading.
//!
//! Each side of a comparison is named by a spec string: a file path, a glob
//! pattern, or a directory. Every matched file is read, newline-normalized,
//! and concatenated into one logical text blob per side. The core never
//! sees the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use walkdir::WalkDir;

/// One side's input, fully loaded.
#[derive(Debug)]
pub struct LoadedSide {
    /// Concatenated, newline-normalized content of every matched file.
    pub text: String,
    /// Human-readable label: the file name for a single match, the spec
    /// plus a match count otherwise.
    pub label: String,
    pub file_count: usize,
}

/// Resolves and reads a side spec.
pub fn load_side(spec: &str, verbose: bool) -> Result<LoadedSide> {
    let files = resolve_files(spec)?;

    let mut parts = Vec::with_capacity(files.len());
    for path in &files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        if verbose {
            eprintln!(
                "{}",
                format!("loaded {} ({} bytes)", path.display(), content.len()).dimmed()
            );
        }
        parts.push(content.replace('\r', ""));
    }

    Ok(LoadedSide {
        text: parts.join("\n"),
        label: label_for(spec, &files),
        file_count: files.len(),
    })
}

fn resolve_files(spec: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(spec);

    let mut files = if path.is_dir() {
        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "js"))
            .collect();
        found.sort();
        found
    } else if spec.contains(['*', '?', '[']) {
        let mut found: Vec<PathBuf> = glob::glob(spec)
            .with_context(|| format!("Invalid glob pattern: {spec}"))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        found.sort();
        found
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        bail!("No such file or directory: {spec}");
    };

    if files.is_empty() {
        bail!("No files matched: {spec}");
    }
    files.dedup();
    Ok(files)
}

fn label_for(spec: &str, files: &[PathBuf]) -> String {
    if files.len() == 1 {
        files[0]
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| spec.to_string())
    } else {
        format!("{spec} ({} files)", files.len())
    }
}
