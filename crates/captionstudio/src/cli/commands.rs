//! Command-line argument definitions.

use captionstudio_core::{CaptionParams, CaptionParamsBuilder, Platform, Tone};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate social media captions, hashtags and engagement insights.
#[derive(Debug, Parser)]
#[command(name = "captionstudio", version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./captionstudio.toml if present)
    #[arg(long, global = true, env = "CAPTIONSTUDIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate captions for one topic
    Generate {
        /// Topic, product or idea
        #[arg(short, long)]
        topic: String,

        #[command(flatten)]
        content: ContentArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: each line is a topic
    Session {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Show the current plan and remaining quota
    Plan,

    /// Show pricing tiers and the checkout link
    Pricing,

    /// List available tones, platforms and languages
    Options,
}

/// Everything in the form except the topic.
#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    /// Target audience
    #[arg(short, long)]
    pub audience: Option<String>,

    /// Tone of voice
    #[arg(long, default_value_t = Tone::default())]
    pub tone: Tone,

    /// Target platform
    #[arg(short, long, default_value_t = Platform::default())]
    pub platform: Platform,

    /// Output language (Pro only)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Custom brand voice (Pro only)
    #[arg(long)]
    pub brand_voice: Option<String>,
}

impl ContentArgs {
    /// Form input for `topic`.
    pub fn to_params(&self, topic: impl Into<String>) -> Result<CaptionParams, String> {
        let mut builder = CaptionParamsBuilder::default();
        builder
            .topic(topic.into())
            .tone(self.tone)
            .platform(self.platform);
        if let Some(audience) = &self.audience {
            builder.audience(audience.clone());
        }
        if let Some(language) = &self.language {
            builder.language(language.clone());
        }
        if let Some(brand_voice) = &self.brand_voice {
            builder.brand_voice(brand_voice.clone());
        }
        builder.build().map_err(|e| e.to_string())
    }
}
