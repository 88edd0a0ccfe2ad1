use crate::config::FeedTuning;
use crate::models::SignalBreakdown;

/// Weighted sum of the five signals
#[derive(Debug, Clone, Copy)]
pub struct CompositeScorer {
    recency: f64,
    engagement: f64,
    quality: f64,
    personalization: f64,
    trending: f64,
}

impl CompositeScorer {
    pub fn new(tuning: &FeedTuning) -> Self {
        Self {
            recency: tuning.recency_weight,
            engagement: tuning.engagement_weight,
            quality: tuning.quality_weight,
            personalization: tuning.personalization_weight,
            trending: tuning.trending_weight,
        }
    }

    pub fn score(&self, signals: &SignalBreakdown) -> f64 {
        signals.recency * self.recency
            + signals.engagement * self.engagement
            + signals.quality * self.quality
            + signals.personalization * self.personalization
            + signals.trending * self.trending
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(&FeedTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum() {
        let scorer = CompositeScorer::default();
        let signals = SignalBreakdown {
            recency: 1.0,
            engagement: 0.5,
            quality: 0.8,
            personalization: 0.2,
            trending: 0.0,
        };

        let expected = 0.25 + 0.10 + 0.12 + 0.05;
        assert!((scorer.score(&signals) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_score_bounds() {
        let scorer = CompositeScorer::default();

        let all_max = SignalBreakdown {
            recency: 1.0,
            engagement: 1.0,
            quality: 1.0,
            personalization: 1.0,
            trending: 1.0,
        };
        assert!((scorer.score(&all_max) - 1.0).abs() < 1e-12);
        assert_eq!(scorer.score(&SignalBreakdown::default()), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let tuning = FeedTuning {
            recency_weight: 1.0,
            engagement_weight: 0.0,
            quality_weight: 0.0,
            personalization_weight: 0.0,
            trending_weight: 0.0,
            ..Default::default()
        };
        let scorer = CompositeScorer::new(&tuning);
        let signals = SignalBreakdown {
            recency: 0.42,
            engagement: 1.0,
            ..Default::default()
        };

        assert!((scorer.score(&signals) - 0.42).abs() < 1e-12);
    }
}
