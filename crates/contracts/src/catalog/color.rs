use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(pub Uuid);

impl ColorId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Frame color swatch. `hex` is a `#rrggbb` string maintained by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: String,
    pub hex: String,
    #[serde(rename = "frameCount")]
    pub frame_count: u32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
