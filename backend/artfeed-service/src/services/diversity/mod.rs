use crate::config::FeedTuning;
use crate::models::ScoredArtwork;
use std::collections::HashMap;
use tracing::debug;

/// Diversity Layer - 多樣性過濾
///
/// Greedy single pass over a ranked list. A candidate is admitted only while
/// its artist and its category are under their caps; otherwise it is dropped
/// for good. The feed can therefore end up shorter than `feed_size`.
#[derive(Debug, Clone)]
pub struct DiversityLayer {
    feed_size: usize,
    max_per_artist: usize,   // 同一作者最多出現次數
    max_per_category: usize, // 同一分類最多出現次數
}

impl DiversityLayer {
    pub fn new(tuning: &FeedTuning) -> Self {
        Self {
            feed_size: tuning.feed_size,
            max_per_artist: tuning.max_per_creator,
            max_per_category: tuning.max_per_category,
        }
    }

    /// Create with custom caps
    pub fn with_limits(feed_size: usize, max_per_artist: usize, max_per_category: usize) -> Self {
        Self {
            feed_size,
            max_per_artist,
            max_per_category,
        }
    }

    pub fn feed_size(&self) -> usize {
        self.feed_size
    }

    /// Select up to `feed_size` items from `ranked`, preserving rank order
    pub fn select<'a>(&self, ranked: Vec<ScoredArtwork<'a>>) -> Vec<ScoredArtwork<'a>> {
        let candidate_count = ranked.len();
        let mut selected: Vec<ScoredArtwork<'a>> =
            Vec::with_capacity(self.feed_size.min(candidate_count));
        let mut artist_counts: HashMap<&'a str, usize> = HashMap::new();
        let mut category_counts: HashMap<&'a str, usize> = HashMap::new();
        let mut skipped = 0usize;

        for candidate in ranked {
            if selected.len() >= self.feed_size {
                break;
            }

            let artwork = candidate.artwork;
            let artist_count = artist_counts
                .get(artwork.artist_id.as_str())
                .copied()
                .unwrap_or(0);
            let category_count = category_counts
                .get(artwork.category.as_str())
                .copied()
                .unwrap_or(0);

            if artist_count < self.max_per_artist && category_count < self.max_per_category {
                *artist_counts.entry(artwork.artist_id.as_str()).or_insert(0) += 1;
                *category_counts.entry(artwork.category.as_str()).or_insert(0) += 1;
                selected.push(candidate);
            } else {
                skipped += 1;
            }
        }

        debug!(
            candidate_count = candidate_count,
            selected_count = selected.len(),
            skipped_count = skipped,
            distinct_artists = artist_counts.len(),
            distinct_categories = category_counts.len(),
            "Diversity selection complete"
        );

        selected
    }
}

impl Default for DiversityLayer {
    fn default() -> Self {
        Self::new(&FeedTuning::default())
    }
}
