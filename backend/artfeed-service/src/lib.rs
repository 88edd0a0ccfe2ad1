pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, FeedTuning};
pub use error::{FeedError, Result};
pub use models::{Artwork, ScoredArtwork, SignalBreakdown, Viewer};
pub use services::{DiversityLayer, FeedPipeline, RankingLayer, SimilarityFinder};
