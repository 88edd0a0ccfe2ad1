use super::CompositeScorer;
use crate::config::FeedTuning;
use crate::models::{Artwork, ScoredArtwork, Viewer};
use crate::services::signals::SignalCalculator;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

/// Ranking Layer - 多信号加权打分 + 稳定排序
#[derive(Debug, Clone)]
pub struct RankingLayer {
    signals: SignalCalculator,
    scorer: CompositeScorer,
}

impl Default for RankingLayer {
    fn default() -> Self {
        Self::new(FeedTuning::default())
    }
}

impl RankingLayer {
    pub fn new(tuning: FeedTuning) -> Self {
        Self {
            scorer: CompositeScorer::new(&tuning),
            signals: SignalCalculator::new(tuning),
        }
    }

    /// Score one artwork for a viewer
    pub fn score<'a>(
        &self,
        viewer: &Viewer,
        artwork: &'a Artwork,
        now: DateTime<Utc>,
    ) -> ScoredArtwork<'a> {
        let signals = self.signals.compute(viewer, artwork, now);
        let score = self.scorer.score(&signals);

        ScoredArtwork {
            artwork,
            score,
            signals,
        }
    }

    /// Score every artwork and sort by score descending.
    /// Equal scores keep their relative input order.
    pub fn rank<'a>(
        &self,
        viewer: &Viewer,
        artworks: &'a [Artwork],
        now: DateTime<Utc>,
    ) -> Vec<ScoredArtwork<'a>> {
        let mut ranked: Vec<ScoredArtwork<'a>> = artworks
            .iter()
            .map(|artwork| self.score(viewer, artwork, now))
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| compare_scores_desc(a.score, b.score));

        debug!(
            viewer_id = %viewer.id,
            ranked_count = ranked.len(),
            top_score = ranked.first().map(|s| s.score),
            "Ranking complete"
        );

        ranked
    }
}

/// Descending order; NaN sorts after every real score
fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
