/// Feed Pipeline
///
/// Entry points of the crate: `generate_feed` (Ranking → Diversity) and
/// `find_similar`. Inputs are read-only snapshots owned by the caller and the
/// current time is always passed in, so every call is deterministic.
use super::{DiversityLayer, RankingLayer, SimilarityFinder};
use crate::config::FeedTuning;
use crate::error::{FeedError, Result};
use crate::models::{Artwork, ScoredArtwork, Viewer};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FeedPipeline {
    ranking: RankingLayer,
    diversity: DiversityLayer,
    similarity: SimilarityFinder,
}

impl Default for FeedPipeline {
    fn default() -> Self {
        Self::new(FeedTuning::default())
    }
}

impl FeedPipeline {
    pub fn new(tuning: FeedTuning) -> Self {
        Self {
            diversity: DiversityLayer::new(&tuning),
            similarity: SimilarityFinder::new(&tuning),
            ranking: RankingLayer::new(tuning),
        }
    }

    /// Validated construction, for tuning that came from outside the process
    pub fn try_new(tuning: FeedTuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::new(tuning))
    }

    /// Ordered artwork ids of the viewer's feed
    pub fn generate_feed(
        &self,
        viewer: &Viewer,
        artworks: &[Artwork],
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        Ok(self
            .generate_scored_feed(viewer, artworks, now)?
            .into_iter()
            .map(|scored| scored.artwork.id.clone())
            .collect())
    }

    /// Same selection as `generate_feed`, keeping scores and signal values
    pub fn generate_scored_feed<'a>(
        &self,
        viewer: &Viewer,
        artworks: &'a [Artwork],
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredArtwork<'a>>> {
        validate_artworks(artworks)?;

        let ranked = self.ranking.rank(viewer, artworks, now);
        let feed = self.diversity.select(ranked);

        info!(
            viewer_id = %viewer.id,
            input_count = artworks.len(),
            output_count = feed.len(),
            feed_size = self.diversity.feed_size(),
            "Feed generated"
        );

        Ok(feed)
    }

    /// Ids of the `limit` artworks most similar to `reference`
    pub fn find_similar(
        &self,
        reference: &Artwork,
        artworks: &[Artwork],
        limit: usize,
    ) -> Result<Vec<String>> {
        reference.validate().map_err(|e| {
            warn!(artwork_id = %reference.id, error = %e, "Rejected reference artwork");
            e
        })?;

        Ok(self
            .similarity
            .find_similar(reference, artworks, limit)
            .into_iter()
            .map(|(artwork, _)| artwork.id.clone())
            .collect())
    }
}

fn validate_artworks(artworks: &[Artwork]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(artworks.len());

    for artwork in artworks {
        if let Err(e) = artwork.validate() {
            warn!(artwork_id = %artwork.id, error = %e, "Rejected artwork snapshot");
            return Err(e);
        }

        if !seen.insert(artwork.id.as_str()) {
            warn!(artwork_id = %artwork.id, "Duplicate artwork id in snapshot");
            return Err(FeedError::InvalidInput(format!(
                "duplicate artwork id: {}",
                artwork.id
            )));
        }
    }

    Ok(())
}
