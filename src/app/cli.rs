use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "spindle")]
#[command(version)]
#[command(about = "A terminal dashboard for Spotify playback", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate a default config file at the given path and exit
    #[arg(short, long)]
    pub generate_config: Option<PathBuf>,

    /// Spotify application client id (overrides config)
    #[arg(long)]
    pub client_id: Option<String>,
}
