//! Lays out a feed of randomly sized photos and prints the resulting frames.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::{
    config::HookBuilder,
    eyre::{Result, WrapErr},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};
use waterfall::prelude::*;

/// Width every generated photo reports; only its ratio to the height matters.
const PHOTO_WIDTH: f32 = 100.0;
const MIN_PHOTO_HEIGHT: f32 = 10.0;
const MAX_PHOTO_HEIGHT: f32 = 700.0;
/// Horizontal margin between the screen edge and the outer columns.
const SIDE_INSET: f32 = 20.0;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "Waterfall layout of a random photo feed", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of photos in the feed
    #[arg(short = 'n', long, default_value_t = 4)]
    items: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = 3)]
    columns: usize,

    /// Spacing between columns and between stacked photos
    #[arg(short, long, default_value_t = 10.0)]
    spacing: f32,

    /// Width of the screen, side insets included
    #[arg(short, long, default_value_t = 390.0)]
    width: f32,

    /// Seed for the photo sizes; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a `WaterfallConfig`, overriding columns, spacing and width
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One photo in the feed.
#[derive(Debug, Clone, PartialEq)]
struct Photo {
    title: String,
    size: Size,
}

/// The data source the layout reads from, as a screen's view model would be.
#[derive(Debug)]
struct PhotoFeed {
    photos: Vec<Photo>,
    columns: usize,
    spacing: f32,
}

impl PhotoFeed {
    fn random(count: usize, columns: usize, spacing: f32, rng: &mut impl Rng) -> Self {
        let photos = (0..count)
            .map(|index| Photo {
                title: format!("Test {index}"),
                size: Size::new(
                    PHOTO_WIDTH,
                    rng.gen_range(MIN_PHOTO_HEIGHT..=MAX_PHOTO_HEIGHT),
                ),
            })
            .collect();
        Self {
            photos,
            columns,
            spacing,
        }
    }
}

impl WaterfallProvider for PhotoFeed {
    fn number_of_columns(&self) -> usize {
        self.columns
    }

    fn column_spacing(&self) -> f32 {
        self.spacing
    }

    fn item_count(&self) -> usize {
        self.photos.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.photos.get(index).map(|photo| photo.size)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    HookBuilder::default().display_env_section(false).install()?;

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WaterfallConfig::new(cli.width - 2.0 * SIDE_INSET)
            .columns(cli.columns)
            .spacing(cli.spacing)
            .insets(EdgeInsets::symmetric(0.0, SIDE_INSET)),
    };

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    tracing::info!(seed, items = cli.items, "generating feed");
    let feed = PhotoFeed::random(
        cli.items,
        config.columns,
        config.spacing,
        &mut StdRng::seed_from_u64(seed),
    );

    let placement = WaterfallPlacer::new(config)
        .place_from(&feed)
        .wrap_err("photo feed could not be laid out")?;

    for (photo, (frame, column)) in feed
        .photos
        .iter()
        .zip(placement.frames().iter().zip(placement.assignments()))
    {
        println!(
            "{:<10} col {column}  x {:>7.1}  y {:>7.1}  w {:>6.1}  h {:>6.1}",
            photo.title,
            frame.x(),
            frame.y(),
            frame.width(),
            frame.height()
        );
    }
    let content = placement.content_size();
    println!("content {:.1} x {:.1}", content.width, content.height);

    Ok(())
}

fn load_config(path: &Path) -> Result<WaterfallConfig> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_is_seeded() {
        let first = PhotoFeed::random(20, 3, 10.0, &mut StdRng::seed_from_u64(1));
        let second = PhotoFeed::random(20, 3, 10.0, &mut StdRng::seed_from_u64(1));

        assert_eq!(first.photos, second.photos);
        assert_eq!(first.item_count(), 20);
        assert_eq!(first.photos[3].title, "Test 3");
        for photo in &first.photos {
            assert_eq!(photo.size.width, PHOTO_WIDTH);
            assert!((MIN_PHOTO_HEIGHT..=MAX_PHOTO_HEIGHT).contains(&photo.size.height));
        }
    }

    #[test]
    fn test_feed_lays_out() {
        let feed = PhotoFeed::random(30, 3, 10.0, &mut StdRng::seed_from_u64(2));
        let config = WaterfallConfig::from_provider(&feed, 350.0);

        let placement = WaterfallPlacer::new(config).place_from(&feed).unwrap();

        assert_eq!(placement.len(), 30);
        assert_eq!(feed.item_size(30), None);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: WaterfallConfig =
            serde_json::from_str(r#"{ "content_width": 350.0, "insets": { "leading": 20.0 } }"#)
                .unwrap();

        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert_eq!(config.insets, EdgeInsets::new(0.0, 20.0, 0.0, 0.0));
        assert_eq!(config.content_width, 350.0);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["gallery", "-n", "12", "--columns", "2", "-vv"]).unwrap();

        assert_eq!(cli.items, 12);
        assert_eq!(cli.columns, 2);
        assert_eq!(cli.verbose, 2);
        assert!(cli.config.is_none());
    }
}
