mod cli;

use anyhow::{bail, Context, Result};
use cli::{Cli, Commands, ConfigAction};
use medley::core::logging;
use medley::download::format::Format;
use medley::{download_one, run_batch, Config, DownloadRequest, ProcessDownloader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init_logger(cli.verbose)?;

    match cli.command {
        Commands::Download { url, format, folder } => {
            let config = Config::load(&cli.config)?;
            let format: Format = format.parse()?;
            let request = DownloadRequest::new(&url, format, folder)?;

            log::info!("Source: {}, format: {}", request.source, request.format);
            download_one(&request, &config, &ProcessDownloader::new()).await?;
            log::info!("Download successful: {url}");
        }

        Commands::Batch { file } => {
            let config = Config::load(&cli.config)?;
            let path = file.unwrap_or_else(|| config.sources_file.clone());
            if path.is_empty() {
                bail!("no sources file given: pass --file or set SourcesFile in the configuration");
            }

            let contents =
                std::fs::read_to_string(&path).with_context(|| format!("cannot read sources file {path}"))?;

            let report = run_batch(&contents, &config, &ProcessDownloader::new()).await;
            log::info!(
                "Batch finished: {} succeeded, {} failed, {} skipped",
                report.succeeded,
                report.failed,
                report.skipped
            );

            if report.failed > 0 {
                bail!("{} of {} attempted downloads failed", report.failed, report.attempted());
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = Config::load(&cli.config)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init {
                output_dir,
                sources_file,
                download_threads,
                search_threads,
                download_thumbnails,
                no_attach_thumbnails,
            } => {
                let use_custom_threads = download_threads.is_some() || search_threads.is_some();
                let config = Config {
                    output_dir,
                    sources_file,
                    use_custom_threads,
                    download_threads: download_threads.unwrap_or(0),
                    search_threads: search_threads.unwrap_or(0),
                    download_thumbnails,
                    attach_thumbnails: !no_attach_thumbnails,
                };
                config.save(&cli.config)?;
                log::info!("Configuration written to {}", cli.config);
            }
        },
    }

    Ok(())
}
