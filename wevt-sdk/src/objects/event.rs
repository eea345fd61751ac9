//! The synthetic world event and its enumerated fields.
//!
//! Random sampling is provided through [`rand::distr::StandardUniform`] so
//! that `rng.random::<Region>()` picks uniformly from the fixed set.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// A simulated news occurrence.
///
/// Regenerated from scratch on every fetch; `id` is only unique within a
/// single generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub region: Region,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub source: NewsSource,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Topic an event belongs to. Fixed per template.
pub enum Category {
    Politics,
    Economy,
    Technology,
    Environment,
    Health,
    Conflict,
    Sports,
    Culture,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Politics,
        Category::Economy,
        Category::Technology,
        Category::Environment,
        Category::Health,
        Category::Conflict,
        Category::Sports,
        Category::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Economy => "Economy",
            Category::Technology => "Technology",
            Category::Environment => "Environment",
            Category::Health => "Health",
            Category::Conflict => "Conflict",
            Category::Sports => "Sports",
            Category::Culture => "Culture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive match against the category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Geographic region an event is attributed to.
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "Asia")]
    Asia,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "Africa")]
    Africa,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    #[serde(rename = "Oceania")]
    Oceania,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::MiddleEast,
        Region::Africa,
        Region::LatinAmerica,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::LatinAmerica => "Latin America",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<Region> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Region {
        Region::ALL[rng.random_range(0..Region::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// News agency an event is credited to.
pub enum NewsSource {
    #[serde(rename = "Reuters")]
    Reuters,
    #[serde(rename = "AP News")]
    ApNews,
    #[serde(rename = "BBC")]
    Bbc,
    #[serde(rename = "AFP")]
    Afp,
    #[serde(rename = "Al Jazeera")]
    AlJazeera,
    #[serde(rename = "CNN")]
    Cnn,
    #[serde(rename = "Guardian")]
    Guardian,
}

impl NewsSource {
    pub const ALL: [NewsSource; 7] = [
        NewsSource::Reuters,
        NewsSource::ApNews,
        NewsSource::Bbc,
        NewsSource::Afp,
        NewsSource::AlJazeera,
        NewsSource::Cnn,
        NewsSource::Guardian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSource::Reuters => "Reuters",
            NewsSource::ApNews => "AP News",
            NewsSource::Bbc => "BBC",
            NewsSource::Afp => "AFP",
            NewsSource::AlJazeera => "Al Jazeera",
            NewsSource::Cnn => "CNN",
            NewsSource::Guardian => "Guardian",
        }
    }
}

impl fmt::Display for NewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<NewsSource> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NewsSource {
        NewsSource::ALL[rng.random_range(0..NewsSource::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<Severity> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Severity {
        Severity::ALL[rng.random_range(0..Severity::ALL.len())]
    }
}
