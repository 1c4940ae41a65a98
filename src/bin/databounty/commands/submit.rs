//! Submit command - send file metadata to a bounty

use crate::client::MarketClient;
use crate::style::*;
use anyhow::{Context, Result};
use data_bounty::types::{format_size, SubmissionFile};
use std::path::{Path, PathBuf};

/// MIME type from the extensions the marketplace accepts, empty if unknown
pub fn guess_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "zip" => "application/zip",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        "json" => "application/json",
        "csv" => "text/csv",
        "parquet" => "application/vnd.apache.parquet",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "",
    }
}

/// Describe a file from file-system metadata only; contents are never read
pub fn describe(path: &Path) -> Result<SubmissionFile> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SubmissionFile::new(name, meta.len(), guess_type(path)))
}

pub async fn run(client: &MarketClient, bounty: &str, paths: &[PathBuf]) -> Result<()> {
    let files = paths
        .iter()
        .map(|p| describe(p))
        .collect::<Result<Vec<_>>>()?;

    let total = SubmissionFile::total_size(&files)
        .ok_or_else(|| anyhow::anyhow!("Total file size is too large"))?;
    print_info(&format!(
        "Submitting {} file(s), {} total",
        files.len(),
        format_size(total)
    ));

    let receipt = client.submit_files(bounty, &files).await?;
    print_success(&receipt.message);
    println!("Submission ID: {}", style_cyan(&receipt.submission.id));
    Ok(())
}
