//! URL classification.
//!
//! Classification is a literal, case-sensitive prefix match against a fixed
//! whitelist — deliberately shallow. No scheme/host canonicalization, no
//! check that the path after the prefix is well-formed, no network access.
//! The prefix table is the single source of truth: `is_recognized` is defined
//! in terms of `classify` so the two predicates cannot drift apart.

use std::fmt;

/// The streaming platform a URL belongs to.
///
/// An unrecognized URL is `None` at the `classify` call site rather than a
/// variant here, so every `Source` value in the pipeline is a real platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    YouTube,
    SoundCloud,
    Spotify,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::YouTube => write!(f, "YouTube"),
            Source::SoundCloud => write!(f, "SoundCloud"),
            Source::Spotify => write!(f, "Spotify"),
        }
    }
}

// `AppError::UnsupportedFormat` has a field named `source`, which thiserror
// implicitly treats as the error cause and therefore requires to be an error.
impl std::error::Error for Source {}

/// Recognized URL prefixes, checked in priority order. First match wins.
const PREFIX_TABLE: &[(&str, Source)] = &[
    ("https://www.youtube.com", Source::YouTube),
    ("https://www.youtu.be", Source::YouTube),
    ("https://soundcloud.com/", Source::SoundCloud),
    ("https://www.soundcloud.com/", Source::SoundCloud),
    ("https://open.spotify.com", Source::Spotify),
];

/// Classify a raw URL string by prefix.
///
/// Returns `None` when the URL matches no known platform prefix.
pub fn classify(url: &str) -> Option<Source> {
    PREFIX_TABLE
        .iter()
        .find(|(prefix, _)| url.starts_with(prefix))
        .map(|&(_, source)| source)
}

/// Whether the URL belongs to any recognized platform.
pub fn is_recognized(url: &str) -> bool {
    classify(url).is_some()
}
