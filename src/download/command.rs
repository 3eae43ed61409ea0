//! Construction of the external downloader invocation.
//!
//! An `Invocation` is a discrete argument vector plus a working directory,
//! handed straight to the process spawner. Nothing is ever concatenated into
//! a shell string, so URLs and paths containing quotes or shell metacharacters
//! pass through untouched.

use std::path::PathBuf;

use crate::core::config::{self, Config};
use crate::download::source::Source;
use crate::download::DownloadRequest;

/// youtube-dl output template: file named by title.
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// youtube-dl selection filter for video downloads.
const BEST_VIDEO_FILTER: &str = "bestvideo+bestaudio[ext=m4a]/bestvideo+bestaudio/best";

/// A fully-resolved external downloader invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Binary to spawn (`youtube-dl` or `spotdl`, overridable via env)
    pub program: String,
    /// Argument vector, URL last
    pub args: Vec<String>,
    /// Directory the child runs in; created by the executor if absent
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Single-line rendering for log output. Display only — never executed.
    pub fn render(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// Build the downloader invocation for a validated request.
///
/// The request carries a real `Source`, so unlike the historical string
/// builder this cannot fail: unrecognized URLs are rejected when the
/// `DownloadRequest` is constructed.
pub fn build_invocation(request: &DownloadRequest, config: &Config) -> Invocation {
    let mut working_dir = PathBuf::from(&config.output_dir);
    if let Some(ref subfolder) = request.subfolder {
        working_dir.push(subfolder);
    }

    match request.source {
        Source::YouTube | Source::SoundCloud => {
            let mut args = vec![
                "-o".to_string(),
                OUTPUT_TEMPLATE.to_string(),
                "--yes-playlist".to_string(),
                "--audio-quality".to_string(),
                "0".to_string(),
                "--add-metadata".to_string(),
            ];

            if request.format.is_audio() {
                args.push("--extract-audio".to_string());
                args.push("--audio-format".to_string());
                args.push(request.format.to_string());
                if config.download_thumbnails {
                    args.push("--write-thumbnail".to_string());
                }
                if config.attach_thumbnails {
                    args.push("--embed-thumbnail".to_string());
                }
            } else {
                args.push("--format".to_string());
                args.push(BEST_VIDEO_FILTER.to_string());
                args.push("--merge-output-format".to_string());
                args.push(request.format.to_string());
            }

            args.push(request.url.clone());

            Invocation {
                program: config::YTDL_BIN.clone(),
                args,
                working_dir,
            }
        }
        Source::Spotify => {
            let mut args = vec!["--output-format".to_string(), request.format.to_string()];

            if config.use_custom_threads {
                args.push("--download-threads".to_string());
                args.push(config.download_threads.to_string());
                args.push("--search-threads".to_string());
                args.push(config.search_threads.to_string());
            }

            args.push(request.url.clone());

            Invocation {
                program: config::SPOTDL_BIN.clone(),
                args,
                working_dir,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::format::Format;
    use pretty_assertions::assert_eq;

    fn test_config() -> Config {
        Config {
            output_dir: "/music".to_string(),
            ..Config::default()
        }
    }

    fn request(url: &str, format: Format) -> DownloadRequest {
        DownloadRequest::new(url, format, None).unwrap()
    }

    #[test]
    fn test_youtube_mp3_extracts_audio_without_merge_flag() {
        let inv = build_invocation(
            &request("https://www.youtube.com/watch?v=x", Format::Mp3),
            &test_config(),
        );

        assert!(inv.args.contains(&"--extract-audio".to_string()));
        let pos = inv.args.iter().position(|a| a == "--audio-format").unwrap();
        assert_eq!(inv.args[pos + 1], "mp3");
        assert!(!inv.args.contains(&"--merge-output-format".to_string()));
    }

    #[test]
    fn test_youtube_mp4_merges_without_audio_extraction() {
        let inv = build_invocation(
            &request("https://www.youtube.com/watch?v=x", Format::Mp4),
            &test_config(),
        );

        let pos = inv.args.iter().position(|a| a == "--merge-output-format").unwrap();
        assert_eq!(inv.args[pos + 1], "mp4");
        assert!(inv.args.contains(&BEST_VIDEO_FILTER.to_string()));
        assert!(!inv.args.contains(&"--extract-audio".to_string()));
        assert!(!inv.args.contains(&"--audio-format".to_string()));
    }

    #[test]
    fn test_youtube_common_flags_and_url_position() {
        let url = "https://www.youtube.com/watch?v=x";
        let inv = build_invocation(&request(url, Format::Flac), &test_config());

        for flag in ["--yes-playlist", "--add-metadata", "-o"] {
            assert!(inv.args.contains(&flag.to_string()), "missing {flag}");
        }
        assert_eq!(inv.args.last().map(String::as_str), Some(url));
    }

    #[test]
    fn test_thumbnail_flags_follow_config() {
        let mut config = test_config();
        config.download_thumbnails = true;
        config.attach_thumbnails = false;

        let inv = build_invocation(
            &request("https://soundcloud.com/a/track", Format::Opus),
            &config,
        );
        assert!(inv.args.contains(&"--write-thumbnail".to_string()));
        assert!(!inv.args.contains(&"--embed-thumbnail".to_string()));

        config.download_thumbnails = false;
        config.attach_thumbnails = true;
        let inv = build_invocation(
            &request("https://soundcloud.com/a/track", Format::Opus),
            &config,
        );
        assert!(!inv.args.contains(&"--write-thumbnail".to_string()));
        assert!(inv.args.contains(&"--embed-thumbnail".to_string()));
    }

    #[test]
    fn test_thumbnail_flags_not_emitted_for_video() {
        let mut config = test_config();
        config.download_thumbnails = true;
        config.attach_thumbnails = true;

        let inv = build_invocation(
            &request("https://www.youtube.com/watch?v=x", Format::Mkv),
            &config,
        );
        assert!(!inv.args.contains(&"--write-thumbnail".to_string()));
        assert!(!inv.args.contains(&"--embed-thumbnail".to_string()));
    }

    #[test]
    fn test_spotify_custom_threads_forwarded_literally() {
        let mut config = test_config();
        config.use_custom_threads = true;
        config.download_threads = 4;
        config.search_threads = 2;

        let inv = build_invocation(
            &request("https://open.spotify.com/track/y", Format::Flac),
            &config,
        );

        let dl = inv.args.iter().position(|a| a == "--download-threads").unwrap();
        assert_eq!(inv.args[dl + 1], "4");
        let search = inv.args.iter().position(|a| a == "--search-threads").unwrap();
        assert_eq!(inv.args[search + 1], "2");
    }

    #[test]
    fn test_spotify_default_threads_omitted() {
        let inv = build_invocation(
            &request("https://open.spotify.com/track/y", Format::Mp3),
            &test_config(),
        );

        assert!(!inv.args.contains(&"--download-threads".to_string()));
        assert!(!inv.args.contains(&"--search-threads".to_string()));
        let pos = inv.args.iter().position(|a| a == "--output-format").unwrap();
        assert_eq!(inv.args[pos + 1], "mp3");
    }

    #[test]
    fn test_working_dir_includes_subfolder() {
        let req = DownloadRequest::new(
            "https://www.youtube.com/watch?v=x",
            Format::Mp3,
            Some("Song A".to_string()),
        )
        .unwrap();
        let inv = build_invocation(&req, &test_config());
        assert_eq!(inv.working_dir, PathBuf::from("/music/Song A"));
    }

    #[test]
    fn test_url_with_shell_metacharacters_stays_one_arg() {
        let url = "https://www.youtube.com/watch?v=x&list=\"; rm -rf ~\"";
        let inv = build_invocation(&request(url, Format::Mp3), &test_config());
        assert_eq!(inv.args.last().map(String::as_str), Some(url));
    }
}
