use anyhow::Context;
use artfeed_service::{demo, Artwork, Config, FeedPipeline, Viewer};
use chrono::{DateTime, Utc};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Number of "more like this" suggestions printed for the top artwork
const SIMILAR_LIMIT: usize = 5;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load config")?;
    info!(
        service = %config.service.service_name,
        feed_size = config.tuning.feed_size,
        "Starting feed generation"
    );

    let now = Utc::now();
    let viewer = load_viewer(&config)?;
    let artworks = load_artworks(&config, now)?;

    let pipeline = FeedPipeline::try_new(config.tuning.clone())?;
    let feed = pipeline
        .generate_scored_feed(&viewer, &artworks, now)
        .context("Failed to generate feed")?;

    if std::env::var("OUTPUT_FORMAT").as_deref() == Ok("json") {
        let ids: Vec<&str> = feed.iter().map(|s| s.id()).collect();
        println!("{}", serde_json::to_string(&ids)?);
        return Ok(());
    }

    println!("Personalized Feed:");
    for (i, scored) in feed.iter().enumerate() {
        let art = scored.artwork;
        println!(
            "{}. {} by {} ({}) - {} likes [score {:.3}]",
            i + 1,
            art.title,
            art.artist_id,
            art.category,
            art.likes,
            scored.score
        );
    }

    if let Some(top) = feed.first() {
        let similar = pipeline.find_similar(top.artwork, &artworks, SIMILAR_LIMIT)?;
        println!();
        println!("More like \"{}\": {}", top.artwork.title, similar.join(", "));
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for OUTPUT_FORMAT=json
    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn load_viewer(config: &Config) -> anyhow::Result<Viewer> {
    match &config.service.demo_viewer_path {
        Some(path) => demo::load_viewer(path)
            .with_context(|| format!("Failed to load viewer from {}", path)),
        None => Ok(demo::sample_viewer()),
    }
}

fn load_artworks(config: &Config, now: DateTime<Utc>) -> anyhow::Result<Vec<Artwork>> {
    match &config.service.demo_data_path {
        Some(path) => demo::load_artworks(path)
            .with_context(|| format!("Failed to load artworks from {}", path)),
        None => Ok(demo::sample_artworks(now)),
    }
}
