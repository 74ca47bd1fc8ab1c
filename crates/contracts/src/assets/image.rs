use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub Uuid);

impl ImageId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// What an uploaded image belongs to. Each management screen is scoped to
/// exactly one owner type via a static filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageOwnerType {
    Brand,
    Frame,
    Banner,
}

impl ImageOwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageOwnerType::Brand => "brand",
            ImageOwnerType::Frame => "frame",
            ImageOwnerType::Banner => "banner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Processing,
    Ready,
    Failed,
}

impl ImageStatus {
    pub const ALL: [ImageStatus; 3] = [
        ImageStatus::Processing,
        ImageStatus::Ready,
        ImageStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStatus::Processing => "processing",
            ImageStatus::Ready => "ready",
            ImageStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageStatus::Processing => "Processing",
            ImageStatus::Ready => "Ready",
            ImageStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// Uploaded image/banner asset. The binary itself lives in object storage
/// behind presigned URLs; this record is the catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: ImageId,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub url: String,
    #[serde(rename = "ownerType")]
    pub owner_type: ImageOwnerType,
    #[serde(rename = "ownerId")]
    pub owner_id: Option<Uuid>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    pub status: ImageStatus,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}
