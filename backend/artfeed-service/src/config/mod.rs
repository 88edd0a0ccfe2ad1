use crate::error::{FeedError, Result};
use serde::Deserialize;
use std::env;

/// Tolerance used when checking that the signal weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Prefix of the tuning environment variables. envy strips it repeatedly,
/// so it must not be the start of any field name.
pub const TUNING_ENV_PREFIX: &str = "ARTFEED_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub tuning: FeedTuning,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    /// JSON file with an array of artworks; built-in sample when unset
    pub demo_data_path: Option<String>,
    /// JSON file with a single viewer; built-in sample when unset
    pub demo_viewer_path: Option<String>,
}

/// Every constant the feed pipeline uses.
///
/// Read from `ARTFEED_`-prefixed environment variables, e.g. `ARTFEED_FEED_SIZE=30`
/// or `ARTFEED_RECENCY_WEIGHT=0.3`. Unset fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedTuning {
    // Signal weights, must sum to 1.0
    pub recency_weight: f64,
    pub engagement_weight: f64,
    pub quality_weight: f64,
    pub personalization_weight: f64,
    pub trending_weight: f64,

    /// Recency decay per day of age
    pub decay_rate: f64,
    /// Items older than this get no trending contribution
    pub trending_window_hours: i64,
    /// Engagement velocity that maps to a trending score of 1.0
    pub trending_velocity_norm: f64,

    // Personalization
    pub followed_creator_boost: f64,
    pub tag_interaction_step: f64,
    pub tag_coverage_weight: f64,
    pub preferred_category_boost: f64,
    pub liked_penalty: f64,

    // Diversity
    pub feed_size: usize,
    pub max_per_creator: usize,
    pub max_per_category: usize,

    // Similarity
    pub similarity_category_weight: f64,
    pub similarity_tag_weight: f64,
}

impl Default for FeedTuning {
    fn default() -> Self {
        Self {
            recency_weight: 0.25,
            engagement_weight: 0.20,
            quality_weight: 0.15,
            personalization_weight: 0.25,
            trending_weight: 0.15,
            decay_rate: 0.05,
            trending_window_hours: 48,
            trending_velocity_norm: 100.0,
            followed_creator_boost: 0.4,
            tag_interaction_step: 0.05,
            tag_coverage_weight: 0.3,
            preferred_category_boost: 0.2,
            liked_penalty: 0.1,
            feed_size: 50,
            max_per_creator: 2,
            max_per_category: 5,
            similarity_category_weight: 0.3,
            similarity_tag_weight: 0.7,
        }
    }
}

impl FeedTuning {
    pub fn weight_sum(&self) -> f64 {
        self.recency_weight
            + self.engagement_weight
            + self.quality_weight
            + self.personalization_weight
            + self.trending_weight
    }

    /// Load from `(key, value)` pairs, keeping only `ARTFEED_`-prefixed keys
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let tuning: FeedTuning = envy::prefixed(TUNING_ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| FeedError::InvalidConfig(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("recency_weight", self.recency_weight),
            ("engagement_weight", self.engagement_weight),
            ("quality_weight", self.quality_weight),
            ("personalization_weight", self.personalization_weight),
            ("trending_weight", self.trending_weight),
            ("decay_rate", self.decay_rate),
            ("followed_creator_boost", self.followed_creator_boost),
            ("tag_interaction_step", self.tag_interaction_step),
            ("tag_coverage_weight", self.tag_coverage_weight),
            ("preferred_category_boost", self.preferred_category_boost),
            ("similarity_category_weight", self.similarity_category_weight),
            ("similarity_tag_weight", self.similarity_tag_weight),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FeedError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(FeedError::InvalidConfig(format!(
                "signal weights must sum to 1.0, got {}",
                sum
            )));
        }

        if !(0.0..=1.0).contains(&self.liked_penalty) {
            return Err(FeedError::InvalidConfig(format!(
                "liked_penalty must be within [0, 1], got {}",
                self.liked_penalty
            )));
        }

        if self.trending_window_hours < 0 {
            return Err(FeedError::InvalidConfig(format!(
                "trending_window_hours must be non-negative, got {}",
                self.trending_window_hours
            )));
        }

        if !self.trending_velocity_norm.is_finite() || self.trending_velocity_norm <= 0.0 {
            return Err(FeedError::InvalidConfig(
                "trending_velocity_norm must be positive".to_string(),
            ));
        }

        if self.feed_size == 0 {
            return Err(FeedError::InvalidConfig(
                "feed_size must be at least 1".to_string(),
            ));
        }

        if self.max_per_creator == 0 || self.max_per_category == 0 {
            return Err(FeedError::InvalidConfig(
                "diversity caps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let tuning = FeedTuning::from_vars(env::vars())?;

        Ok(Config {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "artfeed-service".to_string()),
                demo_data_path: env::var("DEMO_DATA_PATH").ok(),
                demo_viewer_path: env::var("DEMO_VIEWER_PATH").ok(),
            },
            tuning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = FeedTuning::default();
        assert!(tuning.validate().is_ok());
        assert!((tuning.weight_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let tuning = FeedTuning {
            recency_weight: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(FeedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let tuning = FeedTuning {
            recency_weight: -0.05,
            engagement_weight: 0.50,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_zero_caps_rejected() {
        let tuning = FeedTuning {
            max_per_creator: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_negative_decay_rate_rejected() {
        let tuning = FeedTuning {
            decay_rate: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(FeedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_liked_penalty_range() {
        for penalty in [-3.0, 1.5, f64::NAN] {
            let tuning = FeedTuning {
                liked_penalty: penalty,
                ..Default::default()
            };
            assert!(tuning.validate().is_err(), "accepted {}", penalty);
        }

        let tuning = FeedTuning {
            liked_penalty: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_negative_trending_window_rejected() {
        let tuning = FeedTuning {
            trending_window_hours: -5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_negative_personalization_constants_rejected() {
        let cases = [
            FeedTuning {
                followed_creator_boost: -0.4,
                ..Default::default()
            },
            FeedTuning {
                tag_interaction_step: -0.05,
                ..Default::default()
            },
            FeedTuning {
                tag_coverage_weight: f64::INFINITY,
                ..Default::default()
            },
            FeedTuning {
                preferred_category_boost: -0.2,
                ..Default::default()
            },
        ];
        for tuning in cases {
            assert!(tuning.validate().is_err(), "{:?}", tuning);
        }
    }

    #[test]
    fn test_negative_similarity_weights_rejected() {
        let category = FeedTuning {
            similarity_category_weight: -0.3,
            ..Default::default()
        };
        let tags = FeedTuning {
            similarity_tag_weight: f64::NAN,
            ..Default::default()
        };
        assert!(category.validate().is_err());
        assert!(tags.validate().is_err());
    }

    #[test]
    fn test_zero_feed_size_rejected() {
        let tuning = FeedTuning {
            feed_size: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_partial_env_overrides_keep_defaults() {
        let tuning = FeedTuning::from_vars(vars(&[
            ("ARTFEED_FEED_SIZE", "10"),
            ("ARTFEED_MAX_PER_CATEGORY", "3"),
            ("ARTFEED_DECAY_RATE", "0.1"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();

        assert_eq!(tuning.feed_size, 10);
        assert_eq!(tuning.max_per_category, 3);
        assert_eq!(tuning.decay_rate, 0.1);
        assert_eq!(tuning.max_per_creator, 2);
        assert_eq!(tuning.trending_window_hours, 48);
    }

    #[test]
    fn test_env_without_overrides_uses_defaults() {
        let tuning = FeedTuning::from_vars(vars(&[("HOME", "/root")])).unwrap();
        assert_eq!(tuning, FeedTuning::default());
    }

    #[test]
    fn test_invalid_env_tuning_rejected() {
        let unbalanced = FeedTuning::from_vars(vars(&[("ARTFEED_RECENCY_WEIGHT", "0.9")]));
        assert!(matches!(unbalanced, Err(FeedError::InvalidConfig(_))));

        let negative = FeedTuning::from_vars(vars(&[("ARTFEED_DECAY_RATE", "-1")]));
        assert!(matches!(negative, Err(FeedError::InvalidConfig(_))));

        let unparsable = FeedTuning::from_vars(vars(&[("ARTFEED_FEED_SIZE", "lots")]));
        assert!(matches!(unparsable, Err(FeedError::InvalidConfig(_))));
    }
}
