// ============================================
// Signal Functions (信号函数)
// ============================================
//
// Five independent signals, each mapping an artwork (+ viewer, + now) to [0, 1]:
// - Recency: exponential decay over whole hours of age
// - Engagement: sigmoid over (likes + 2 * comments) / views
// - Quality: quality_score / 100
// - Personalization: follows, preferred tags and categories, liked penalty
// - Trending: engagement velocity inside the trending window
//
// Recency is the one exception to the range: uploads dated after `now`
// score above 1.0 and are left unclamped.

use crate::config::FeedTuning;
use crate::models::{Artwork, SignalBreakdown, Viewer};
use crate::utils::{daily_decay, sigmoid};
use chrono::{DateTime, Utc};

/// Sigmoid steepness for the engagement signal
const ENGAGEMENT_STEEPNESS: f64 = 5.0;
/// Engagement rate that maps to 0.5
const ENGAGEMENT_MIDPOINT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct SignalCalculator {
    tuning: FeedTuning,
}

impl SignalCalculator {
    pub fn new(tuning: FeedTuning) -> Self {
        Self { tuning }
    }

    /// All five signals for one artwork
    pub fn compute(
        &self,
        viewer: &Viewer,
        artwork: &Artwork,
        now: DateTime<Utc>,
    ) -> SignalBreakdown {
        SignalBreakdown {
            recency: self.recency(artwork, now),
            engagement: self.engagement(artwork),
            quality: self.quality(artwork),
            personalization: self.personalization(viewer, artwork),
            trending: self.trending(artwork, now),
        }
    }

    /// Fresh (0h) = 1.0, 24h ≈ 0.951, 7d ≈ 0.705
    pub fn recency(&self, artwork: &Artwork, now: DateTime<Utc>) -> f64 {
        daily_decay(artwork.hours_old(now), self.tuning.decay_rate)
    }

    /// No views gives rate 0, which the sigmoid maps to ≈ 0.378
    pub fn engagement(&self, artwork: &Artwork) -> f64 {
        sigmoid(
            artwork.engagement_rate(),
            ENGAGEMENT_STEEPNESS,
            ENGAGEMENT_MIDPOINT,
        )
    }

    pub fn quality(&self, artwork: &Artwork) -> f64 {
        artwork.quality_score / 100.0
    }

    pub fn personalization(&self, viewer: &Viewer, artwork: &Artwork) -> f64 {
        let t = &self.tuning;
        let mut score: f64 = 0.0;

        if viewer.followed_artists.contains(&artwork.artist_id) {
            score += t.followed_creator_boost;
        }

        let mut matching_tags = 0usize;
        for tag in artwork
            .tags
            .iter()
            .filter(|tag| viewer.preferred_tags.contains(*tag))
        {
            matching_tags += 1;
            score += t.tag_interaction_step * viewer.interaction_count(tag) as f64;
        }

        if !viewer.preferred_tags.is_empty() {
            let coverage = matching_tags as f64 / viewer.preferred_tags.len() as f64;
            score += t.tag_coverage_weight * coverage;
        }

        if viewer.preferred_categories.contains(&artwork.category) {
            score += t.preferred_category_boost;
        }

        // Applied after every additive term
        if viewer.liked_artworks.contains(&artwork.id) {
            score *= t.liked_penalty;
        }

        score.min(1.0)
    }

    pub fn trending(&self, artwork: &Artwork, now: DateTime<Utc>) -> f64 {
        let hours_old = artwork.hours_old(now);
        if hours_old > self.tuning.trending_window_hours {
            return 0.0;
        }

        let mut velocity = artwork.weighted_interactions();
        if hours_old > 0 {
            velocity /= hours_old as f64;
        }

        (velocity / self.tuning.trending_velocity_norm).min(1.0)
    }
}

impl Default for SignalCalculator {
    fn default() -> Self {
        Self::new(FeedTuning::default())
    }
}
