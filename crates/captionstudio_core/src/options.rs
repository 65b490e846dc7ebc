//! Tone, platform and language choices offered to the caller.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Language used when the caller does not ask for another one.
pub const BASELINE_LANGUAGE: &str = "English";

/// Languages offered for selection. Free text is accepted as well.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Dutch",
    "Russian",
    "Japanese",
    "Chinese",
    "Korean",
    "Arabic",
    "Hindi",
];

/// Tone of voice for the generated captions.
///
/// # Examples
///
/// ```
/// use captionstudio_core::Tone;
///
/// let tone: Tone = "funny".parse().unwrap();
/// assert_eq!(tone, Tone::Funny);
/// assert_eq!(tone.to_string(), "Funny");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    Professional,
    #[default]
    Casual,
    Funny,
    Inspiring,
    Excited,
}

/// Social platform the captions are written for.
///
/// # Examples
///
/// ```
/// use captionstudio_core::Platform;
///
/// let platform: Platform = "x".parse().unwrap();
/// assert_eq!(platform.to_string(), "Twitter (X)");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Instagram,
    LinkedIn,
    #[strum(to_string = "Twitter (X)", serialize = "Twitter", serialize = "X")]
    Twitter,
    TikTok,
}

/// True when `language` names the baseline language (or nothing at all).
pub fn is_baseline_language(language: &str) -> bool {
    let trimmed = language.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(BASELINE_LANGUAGE)
}
