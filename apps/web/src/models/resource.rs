use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Career,
    Tech,
    Leadership,
    Entrepreneurship,
}

impl ResourceCategory {
    /// Display order of the category controls.
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Career,
        ResourceCategory::Tech,
        ResourceCategory::Leadership,
        ResourceCategory::Entrepreneurship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Career => "career",
            ResourceCategory::Tech => "tech",
            ResourceCategory::Leadership => "leadership",
            ResourceCategory::Entrepreneurship => "entrepreneurship",
        }
    }

    /// Human-readable label shown on cards and category controls.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Career => "Career Dev",
            ResourceCategory::Tech => "Technology",
            ResourceCategory::Leadership => "Leadership",
            ResourceCategory::Entrepreneurship => "Business",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "career" => Ok(ResourceCategory::Career),
            "tech" => Ok(ResourceCategory::Tech),
            "leadership" => Ok(ResourceCategory::Leadership),
            "entrepreneurship" => Ok(ResourceCategory::Entrepreneurship),
            other => Err(UnknownVariant::new("resource category", other)),
        }
    }
}

/// Maps a raw category key to its label. Keys outside the known set are
/// returned unchanged.
pub fn format_category(raw: &str) -> &str {
    match raw.parse::<ResourceCategory>() {
        Ok(category) => category.label(),
        Err(_) => raw,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Workshop,
}

/// A learning resource from the static catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ResourceCategory,
    pub kind: ResourceKind,
    pub level: &'static str,
    pub duration: &'static str,
    pub is_free: bool,
}
