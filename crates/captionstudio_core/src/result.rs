//! Generated content returned to the caller.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Separator placed between a caption and the watermark.
pub const WATERMARK_SEPARATOR: &str = "\n\n";

/// Promotional line appended to captions for free-plan callers.
pub const DEFAULT_WATERMARK: &str = "✨ Created with CaptionStudio.ai";

/// Captions, hashtags and optional insights from one generation.
///
/// # Examples
///
/// ```
/// use captionstudio_core::GenerationResult;
///
/// let result = GenerationResult::new(
///     vec!["Morning fuel ☕".to_string()],
///     vec!["coffee".to_string(), "#barista".to_string()],
///     None,
/// );
/// assert_eq!(result.hashtag_labels(), vec!["#coffee", "#barista"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Caption variations
    captions: Vec<String>,
    /// Hashtags without the leading `#`
    hashtags: Vec<String>,
    /// Engagement insights (Pro only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    insights: Option<Vec<String>>,
}

impl GenerationResult {
    /// Creates a new result.
    pub fn new(captions: Vec<String>, hashtags: Vec<String>, insights: Option<Vec<String>>) -> Self {
        Self {
            captions,
            hashtags,
            insights,
        }
    }

    /// Append the watermark line to every caption.
    pub fn with_watermark(mut self, watermark: &str) -> Self {
        for caption in &mut self.captions {
            caption.push_str(WATERMARK_SEPARATOR);
            caption.push_str(watermark);
        }
        self
    }

    /// Drop any insights.
    pub fn without_insights(mut self) -> Self {
        self.insights = None;
        self
    }

    /// Hashtags prefixed with exactly one `#` for display.
    pub fn hashtag_labels(&self) -> Vec<String> {
        self.hashtags
            .iter()
            .map(|tag| format!("#{}", tag.trim().trim_start_matches('#')))
            .collect()
    }
}
