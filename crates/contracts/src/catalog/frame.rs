use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::brand::BrandId;
use super::category::CategoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub Uuid);

impl FrameId {
    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FrameId)
            .map_err(|e| format!("Invalid frame id: {}", e))
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Publication state of a frame in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStatus {
    Draft,
    Published,
    Archived,
}

impl FrameStatus {
    pub const ALL: [FrameStatus; 3] = [
        FrameStatus::Draft,
        FrameStatus::Published,
        FrameStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameStatus::Draft => "draft",
            FrameStatus::Published => "published",
            FrameStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrameStatus::Draft => "Draft",
            FrameStatus::Published => "Published",
            FrameStatus::Archived => "Archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// A frame (the sellable eyewear product) in the catalog list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub sku: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "brandId")]
    pub brand_id: BrandId,
    #[serde(rename = "brandName")]
    pub brand_name: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    #[serde(rename = "priceCents")]
    pub price_cents: i64,
    pub currency: String,
    pub status: FrameStatus,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub stock: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in FrameStatus::ALL {
            assert_eq!(FrameStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(FrameStatus::parse("unknown"), None);
    }
}
