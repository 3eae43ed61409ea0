//! Target formats and the per-source allowed sets.
//!
//! Audio formats are valid everywhere; video formats only make sense for
//! YouTube (spotdl and the SoundCloud path are audio-only).

use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;
use crate::download::source::Source;

/// Target container/codec requested for a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    // Audio
    Mp3,
    Opus,
    Flac,
    Wav,
    // Video
    Mp4,
    Mkv,
    Mov,
    Avi,
}

/// Audio formats, valid for every source.
pub const AUDIO_FORMATS: [Format; 4] = [Format::Mp3, Format::Opus, Format::Flac, Format::Wav];

/// Video formats, valid for YouTube only.
pub const VIDEO_FORMATS: [Format; 4] = [Format::Mp4, Format::Mkv, Format::Mov, Format::Avi];

/// Union of audio and video formats (the YouTube set).
pub const ALL_FORMATS: [Format; 8] = [
    Format::Mp3,
    Format::Opus,
    Format::Flac,
    Format::Wav,
    Format::Mp4,
    Format::Mkv,
    Format::Mov,
    Format::Avi,
];

impl Format {
    /// The token passed to the external downloader (and accepted from input).
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Mp3 => "mp3",
            Format::Opus => "opus",
            Format::Flac => "flac",
            Format::Wav => "wav",
            Format::Mp4 => "mp4",
            Format::Mkv => "mkv",
            Format::Mov => "mov",
            Format::Avi => "avi",
        }
    }

    pub fn is_audio(&self) -> bool {
        AUDIO_FORMATS.contains(self)
    }

    pub fn is_video(&self) -> bool {
        VIDEO_FORMATS.contains(self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FORMATS
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::UnknownFormat(s.to_string()))
    }
}

/// The formats downloadable from a given source.
pub fn allowed_formats(source: Source) -> &'static [Format] {
    match source {
        Source::YouTube => &ALL_FORMATS,
        Source::SoundCloud | Source::Spotify => &AUDIO_FORMATS,
    }
}

/// Whether `format` appears in the allowed set for `source`.
pub fn is_allowed(source: Source, format: Format) -> bool {
    allowed_formats(source).contains(&format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_sources_allow_exactly_the_audio_set() {
        for source in [Source::Spotify, Source::SoundCloud] {
            let allowed = allowed_formats(source);
            for f in AUDIO_FORMATS {
                assert!(allowed.contains(&f), "{source} should allow {f}");
            }
            for f in VIDEO_FORMATS {
                assert!(!allowed.contains(&f), "{source} should not allow {f}");
            }
        }
    }

    #[test]
    fn test_youtube_allows_all_eight_formats() {
        let allowed = allowed_formats(Source::YouTube);
        assert_eq!(allowed.len(), 8);
        for f in ALL_FORMATS {
            assert!(allowed.contains(&f));
        }
    }

    #[test]
    fn test_format_string_round_trip() {
        for f in ALL_FORMATS {
            assert_eq!(f.as_str().parse::<Format>().unwrap(), f);
        }
    }

    #[test]
    fn test_unknown_format_token() {
        let err = "webm".parse::<Format>().unwrap_err();
        assert!(matches!(err, AppError::UnknownFormat(ref t) if t == "webm"));
    }

    #[test]
    fn test_audio_video_partition() {
        for f in AUDIO_FORMATS {
            assert!(f.is_audio() && !f.is_video());
        }
        for f in VIDEO_FORMATS {
            assert!(f.is_video() && !f.is_audio());
        }
    }
}
