use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "medley")]
#[command(author, version, about = "Console front-end for youtube-dl and spotdl", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "config.json")]
    pub config: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a single URL
    Download {
        /// Media URL (YouTube, SoundCloud, or Spotify)
        url: String,

        /// Target format (mp3, opus, flac, wav; mp4, mkv, mov, avi for YouTube)
        #[arg(short, long, default_value = "mp3")]
        format: String,

        /// Destination subfolder under the output directory
        #[arg(long)]
        folder: Option<String>,
    },

    /// Download every entry in the sources file
    Batch {
        /// Sources file path (defaults to the one in the configuration)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a fresh configuration file
    Init {
        /// Directory downloads are written to
        #[arg(long, default_value = "./")]
        output_dir: String,

        /// Path to the batch sources file
        #[arg(long, default_value = "")]
        sources_file: String,

        /// spotdl download thread count (enables custom thread settings)
        #[arg(long)]
        download_threads: Option<u32>,

        /// spotdl search thread count (enables custom thread settings)
        #[arg(long)]
        search_threads: Option<u32>,

        /// Write thumbnails as separate image files
        #[arg(long)]
        download_thumbnails: bool,

        /// Do not embed thumbnails into downloaded media
        #[arg(long)]
        no_attach_thumbnails: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
