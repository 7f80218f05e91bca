use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    Entry,
    Mid,
    Senior,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Entry,
        ExperienceTier::Mid,
        ExperienceTier::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceTier::Entry => "entry",
            ExperienceTier::Mid => "mid",
            ExperienceTier::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceTier::Entry => "Entry Level",
            ExperienceTier::Mid => "Mid Level",
            ExperienceTier::Senior => "Senior Level",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceTier {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(ExperienceTier::Entry),
            "mid" => Ok(ExperienceTier::Mid),
            "senior" => Ok(ExperienceTier::Senior),
            other => Err(UnknownVariant::new("experience tier", other)),
        }
    }
}

/// A job posting from the static catalog.
///
/// `salary` is display text such as `"$80,000 - $100,000"`; the numeric
/// minimum is derived on demand by `listings::salary::minimum_salary`.
#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub industry: &'static str,
    pub experience: ExperienceTier,
    pub description: &'static str,
    pub salary: &'static str,
    pub posted: &'static str,
}
