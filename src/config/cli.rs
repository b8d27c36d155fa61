use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the `findScenes` result for the featured performer
    #[arg(long)]
    pub scenes: PathBuf,

    /// Path to the unfiltered `findStudios` result, used to resolve networks
    #[arg(long)]
    pub studios: Option<PathBuf>,

    /// Path to the affinity configuration file
    #[arg(long, default_value = "affinity_config.json")]
    pub config: PathBuf,

    /// Id of the featured performer
    #[arg(long, env = "AFFINITY_PERFORMER")]
    pub performer: String,

    /// Display name to use when the performer appears in no scene
    #[arg(long)]
    pub performer_name: Option<String>,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Mark every detail item as collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
