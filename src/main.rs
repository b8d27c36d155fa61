use affinity::config::Args;
use affinity::error::Result;
use affinity::infrastructure::FileSystemStore;
use affinity::services::resolve_featured;
use affinity::{AffinityConfig, AffinityService, SceneSource, StudioCatalog};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = AffinityConfig::load(&args.config)?;
    config.collapsed |= args.collapsed;

    let store = FileSystemStore::new(&args.scenes, args.studios.clone());
    let scenes = store.load_scenes()?;
    let catalog = StudioCatalog::new(store.load_studios()?);

    let featured = resolve_featured(&scenes, &args.performer, args.performer_name.as_deref())?;

    let service = AffinityService::new(config)?;
    let report = service.build_report(&featured, &scenes, &catalog);
    let content = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Wrote report to {:?}", path);
        }
        None => println!("{}", content),
    }

    Ok(())
}
