pub mod diversity;
pub mod feed;
pub mod ranking;
pub mod signals;
pub mod similarity;

pub use diversity::DiversityLayer;
pub use feed::FeedPipeline;
pub use ranking::{CompositeScorer, RankingLayer};
pub use signals::SignalCalculator;
pub use similarity::SimilarityFinder;
