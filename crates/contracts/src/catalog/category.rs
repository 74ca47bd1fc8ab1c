use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId)
            .map_err(|e| format!("Invalid category id: {}", e))
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Storefront visibility of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Visible,
    Hidden,
}

impl CategoryStatus {
    pub const ALL: [CategoryStatus; 2] = [CategoryStatus::Visible, CategoryStatus::Hidden];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Visible => "visible",
            CategoryStatus::Hidden => "hidden",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Visible => "Visible",
            CategoryStatus::Hidden => "Hidden",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,
    #[serde(rename = "parentName")]
    pub parent_name: Option<String>,
    pub position: i32,
    pub status: CategoryStatus,
    #[serde(rename = "frameCount")]
    pub frame_count: u32,
}
