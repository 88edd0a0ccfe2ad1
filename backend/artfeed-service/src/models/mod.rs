use crate::error::{FeedError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single piece of creative content being ranked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    #[serde(default)]
    pub tags: HashSet<String>,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    /// 0-100
    pub quality_score: f64,
    /// "illustration", "3d", "concept-art", ...
    pub category: String,
}

impl Artwork {
    /// (likes + 2 * comments) / views, 0 when the artwork has no views
    pub fn engagement_rate(&self) -> f64 {
        if self.views > 0 {
            self.weighted_interactions() / self.views as f64
        } else {
            0.0
        }
    }

    /// likes + 2 * comments
    pub fn weighted_interactions(&self) -> f64 {
        self.likes as f64 + 2.0 * self.comments as f64
    }

    /// Whole hours between upload and `now`, truncated toward zero.
    /// Negative for uploads in the future.
    pub fn hours_old(&self, now: DateTime<Utc>) -> i64 {
        (now - self.upload_date).num_hours()
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(FeedError::InvalidInput(
                "artwork id must not be empty".to_string(),
            ));
        }

        if !self.quality_score.is_finite() || !(0.0..=100.0).contains(&self.quality_score) {
            return Err(FeedError::InvalidInput(format!(
                "artwork {} has quality_score {} outside [0, 100]",
                self.id, self.quality_score
            )));
        }

        Ok(())
    }
}

/// The user a feed is personalized for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    #[serde(default)]
    pub followed_artists: HashSet<String>,
    #[serde(default)]
    pub liked_artworks: HashSet<String>,
    #[serde(default)]
    pub preferred_tags: HashSet<String>,
    #[serde(default)]
    pub preferred_categories: HashSet<String>,
    /// tag -> interaction count
    #[serde(default)]
    pub tag_interactions: HashMap<String, u32>,
}

impl Viewer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Interaction count for a tag, 1 when untracked
    pub fn interaction_count(&self, tag: &str) -> u32 {
        self.tag_interactions.get(tag).copied().unwrap_or(1)
    }
}

/// Per-signal values behind a composite score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SignalBreakdown {
    pub recency: f64,
    pub engagement: f64,
    pub quality: f64,
    pub personalization: f64,
    pub trending: f64,
}

/// An artwork paired with its composite score, alive for one ranking call
#[derive(Debug, Clone, Serialize)]
pub struct ScoredArtwork<'a> {
    pub artwork: &'a Artwork,
    pub score: f64,
    pub signals: SignalBreakdown,
}

impl ScoredArtwork<'_> {
    pub fn id(&self) -> &str {
        &self.artwork.id
    }
}
