// ============================================
// Similarity Finder ("more like this")
// ============================================
//
// similarity = category match weight (0.3) + tag weight (0.7) * jaccard(tags)
//
// Shares the artwork representation with the ranking pipeline but no state.

use crate::config::FeedTuning;
use crate::models::Artwork;
use crate::utils::jaccard;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct SimilarityFinder {
    category_weight: f64,
    tag_weight: f64,
}

impl SimilarityFinder {
    pub fn new(tuning: &FeedTuning) -> Self {
        Self {
            category_weight: tuning.similarity_category_weight,
            tag_weight: tuning.similarity_tag_weight,
        }
    }

    pub fn similarity(&self, a: &Artwork, b: &Artwork) -> f64 {
        let mut score: f64 = 0.0;

        if a.category == b.category {
            score += self.category_weight;
        }

        if let Some(overlap) = jaccard(&a.tags, &b.tags) {
            score += self.tag_weight * overlap;
        }

        score
    }

    /// Top `limit` artworks most similar to `reference`, most similar first.
    /// The reference itself (matched by id) is never returned; ties keep input order.
    pub fn find_similar<'a>(
        &self,
        reference: &Artwork,
        artworks: &'a [Artwork],
        limit: usize,
    ) -> Vec<(&'a Artwork, f64)> {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(&'a Artwork, f64)> = artworks
            .iter()
            .filter(|candidate| candidate.id != reference.id)
            .map(|candidate| (candidate, self.similarity(reference, candidate)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored
    }
}

impl Default for SimilarityFinder {
    fn default() -> Self {
        Self::new(&FeedTuning::default())
    }
}
