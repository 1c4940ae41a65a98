//! Marketplace data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MIME type used when an upload does not declare one
pub const DEFAULT_FILE_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Requester,
    Hunter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Requester => "requester",
            Role::Hunter => "hunter",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BountyStatus {
    Active,
    Completed,
    Cancelled,
}

impl BountyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BountyStatus::Active => "active",
            BountyStatus::Completed => "completed",
            BountyStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    Partial,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Accepted => "accepted",
            SubmissionStatus::Partial => "partial",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// Accepted and partial submissions carry a payout amount
    pub fn is_paid(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted | SubmissionStatus::Partial)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounty {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub reward: f64,
    pub requester_id: String,
    pub created_at: DateTime<Utc>,
    pub status: BountyStatus,
    /// Filled from the submission store whenever a bounty is read
    pub submissions_count: u32,
    pub tags: Vec<String>,
}

impl Bounty {
    pub fn is_active(&self) -> bool {
        self.status == BountyStatus::Active
    }
}

/// Metadata of one uploaded file. No bytes are ever captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type", default)]
    pub file_type: String,
}

impl SubmissionFile {
    pub fn new(name: impl Into<String>, size: u64, file_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            file_type: file_type.into(),
        }
    }

    /// Combined size of a batch, `None` if it does not fit in a `u64`
    pub fn total_size(files: &[SubmissionFile]) -> Option<u64> {
        files.iter().try_fold(0u64, |total, f| total.checked_add(f.size))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub bounty_id: String,
    pub hunter_id: String,
    pub hunter_name: String,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub timestamp: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub additional_files: Vec<SubmissionFile>,
}

/// Icon class of a submission, from its MIME type and file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Archive,
    Document,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "7z", "rar", "gz"];

impl FileKind {
    pub fn classify(mime_type: &str, file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if mime_type.contains("image") || IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            FileKind::Image
        } else if mime_type.contains("zip")
            || mime_type.contains("rar")
            || ARCHIVE_EXTENSIONS.contains(&extension.as_str())
        {
            FileKind::Archive
        } else {
            FileKind::Document
        }
    }
}

impl Submission {
    /// More than one file was uploaded together
    pub fn is_batch(&self) -> bool {
        !self.additional_files.is_empty()
    }

    pub fn file_kind(&self) -> FileKind {
        FileKind::classify(&self.file_type, &self.file_name)
    }

    /// Number of files covered by this submission
    pub fn file_count(&self) -> usize {
        1 + self.additional_files.len()
    }
}

/// Input for posting a new bounty. Tags arrive as a comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BountyDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub reward: f64,
    #[serde(default)]
    pub tags: String,
}

/// Split a comma-separated tag list, trimming each element and dropping empties
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutKind {
    Full,
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutReceipt {
    pub submission: Submission,
    pub amount: f64,
    pub hunter_name: String,
    pub requester_balance: f64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission: Submission,
    pub message: String,
}

/// Overview for the logged-in actor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: User,
    /// Requester: bounties posted. Hunter: submissions made.
    pub activity_count: usize,
    /// Requester: total paid out. Hunter: total awarded.
    pub total_settled: f64,
    #[serde(default)]
    pub bounties: Vec<Bounty>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

/// Human readable byte size, base 1024 up to GB
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rendered = format!("{:.2}", value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a,b"), vec!["a", "b"]);
        assert_eq!(parse_tags(" scraping , amazon ,"), vec!["scraping", "amazon"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::classify("image/png", "x"), FileKind::Image);
        assert_eq!(FileKind::classify("", "photo.JPEG"), FileKind::Image);
        assert_eq!(FileKind::classify("application/zip", "data"), FileKind::Archive);
        assert_eq!(FileKind::classify("", "dump.7z"), FileKind::Archive);
        assert_eq!(FileKind::classify("application/json", "items.json"), FileKind::Document);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let sub = Submission {
            id: "s1".to_string(),
            bounty_id: "b1".to_string(),
            hunter_id: "u2".to_string(),
            hunter_name: "ScrapeMaster99".to_string(),
            file_name: "a.csv".to_string(),
            file_size: 10,
            file_type: "text/csv".to_string(),
            timestamp: Utc::now(),
            status: SubmissionStatus::Pending,
            payout_amount: None,
            comment: None,
            additional_files: vec![],
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["bountyId"], "b1");
        assert_eq!(json["status"], "pending");
        assert!(json.get("payoutAmount").is_none());
    }

    #[test]
    fn test_total_size_overflow() {
        let files = [
            SubmissionFile::new("a", 10, ""),
            SubmissionFile::new("b", 20, ""),
        ];
        assert_eq!(SubmissionFile::total_size(&files), Some(30));
        let files = [
            SubmissionFile::new("a", u64::MAX, ""),
            SubmissionFile::new("b", 1, ""),
        ];
        assert_eq!(SubmissionFile::total_size(&files), None);
    }
}
