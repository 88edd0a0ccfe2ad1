// Sample data for the demo binary, plus JSON loaders for real snapshots

use crate::error::{FeedError, Result};
use crate::models::{Artwork, Viewer};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn sample_viewer() -> Viewer {
    let mut viewer = Viewer::new("user1");
    viewer.followed_artists.insert("artist1".to_string());
    viewer.preferred_tags.extend(
        ["fantasy", "concept-art", "character-design"]
            .iter()
            .map(|s| s.to_string()),
    );
    viewer.preferred_categories.insert("illustration".to_string());
    viewer.tag_interactions.insert("fantasy".to_string(), 15);
    viewer.tag_interactions.insert("concept-art".to_string(), 10);
    viewer
}

pub fn sample_artworks(now: DateTime<Utc>) -> Vec<Artwork> {
    let artwork = |id: &str,
                   title: &str,
                   artist_id: &str,
                   tags: &[&str],
                   hours_old: i64,
                   (likes, views, comments): (u64, u64, u64),
                   quality_score: f64,
                   category: &str| Artwork {
        id: id.to_string(),
        title: title.to_string(),
        artist_id: artist_id.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        upload_date: now - Duration::hours(hours_old),
        likes,
        views,
        comments,
        quality_score,
        category: category.to_string(),
    };

    vec![
        artwork(
            "art1",
            "Dragon Knight",
            "artist1",
            &["fantasy", "character-design"],
            5,
            (250, 1500, 30),
            85.0,
            "illustration",
        ),
        artwork(
            "art2",
            "Sci-Fi City",
            "artist2",
            &["sci-fi", "concept-art", "environment"],
            2,
            (500, 3000, 60),
            92.0,
            "concept-art",
        ),
        artwork(
            "art3",
            "Character Study",
            "artist1",
            &["character-design", "portrait"],
            12,
            (180, 1200, 25),
            78.0,
            "illustration",
        ),
    ]
}

pub fn load_viewer(path: impl AsRef<Path>) -> Result<Viewer> {
    load_json(path.as_ref())
}

pub fn load_artworks(path: impl AsRef<Path>) -> Result<Vec<Artwork>> {
    load_json(path.as_ref())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        FeedError::InvalidInput(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        FeedError::InvalidInput(format!("failed to parse {}: {}", path.display(), e))
    })
}
