/// Ranking Module
///
/// Turns a snapshot of artworks into a total order for one viewer.
///
/// # Workflow
/// 1. Compute the five signals per artwork (`services::signals`)
/// 2. Reduce them to a composite score with fixed weights (`scorer`)
/// 3. Sort by composite score, descending; equal scores keep input order
///
/// Scoring is per call: personalization depends on the viewer, so nothing
/// is cached across viewers.
pub mod layer;
pub mod scorer;

pub use layer::RankingLayer;
pub use scorer::CompositeScorer;
