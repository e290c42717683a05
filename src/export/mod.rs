//! Tabular export of fetched comments

pub mod csv;
pub mod xlsx;

use crate::extractor::CommentRecord;
use crate::utils::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Column order of every export
pub const COLUMNS: [&str; 5] = ["author", "text", "likes", "published_at", "reply_count"];

/// Supported encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    /// Excel workbook
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Default file name, e.g. `youtube_comments.csv`
    pub fn default_file_name(&self) -> String {
        format!("youtube_comments.{}", self.extension())
    }
}

/// One flat export row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRow {
    pub author: String,
    pub text: String,
    pub likes: u64,
    #[serde(with = "rfc3339_seconds")]
    pub published_at: DateTime<Utc>,
    pub reply_count: u64,
}

impl From<&CommentRecord> for CommentRow {
    fn from(record: &CommentRecord) -> Self {
        Self {
            author: record.author.clone(),
            text: record.text.clone(),
            likes: record.like_count,
            published_at: record.published_at,
            reply_count: record.reply_count,
        }
    }
}

impl CommentRow {
    /// Field values in [`COLUMNS`] order
    pub fn fields(&self) -> [String; 5] {
        [
            self.author.clone(),
            self.text.clone(),
            self.likes.to_string(),
            format_timestamp(&self.published_at),
            self.reply_count.to_string(),
        ]
    }
}

pub fn rows(comments: &[CommentRecord]) -> Vec<CommentRow> {
    comments.iter().map(CommentRow::from).collect()
}

/// `2024-01-02T03:04:05Z`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Encode comments in the requested format
pub fn encode(comments: &[CommentRecord], format: ExportFormat) -> Result<Vec<u8>, AppError> {
    let rows = rows(comments);
    match format {
        ExportFormat::Csv => Ok(csv::encode(&rows).into_bytes()),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(&rows)?),
        ExportFormat::Xlsx => Ok(xlsx::encode(&rows)?),
    }
}

/// Encode and write comments to `path`
pub async fn write_export(
    path: &Path,
    comments: &[CommentRecord],
    format: ExportFormat,
) -> Result<(), AppError> {
    let encoded = encode(comments, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(&encoded).await?;
    file.flush().await?;

    info!("Exported {} comments to {:?}", comments.len(), path);
    Ok(())
}

mod rfc3339_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
