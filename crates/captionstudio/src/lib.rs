//! Caption Studio: social media captions, hashtags and engagement insights.
//!
//! The workspace is split the same way a request flows through it:
//!
//! - [`captionstudio_core`] turns form input into a prompt and response
//!   contract and holds the caller-owned plan and history state
//! - [`captionstudio_interface`] defines the driver seam
//! - [`captionstudio_models`] talks to Gemini
//! - this crate runs one generation ([`CaptionGenerator`]), wraps it in
//!   quota and history bookkeeping ([`CaptionStudio`]), and loads
//!   settings and plan state for the `captionstudio` binary
//!
//! # Example
//!
//! ```no_run
//! use captionstudio::{CaptionGenerator, CaptionStudio};
//! use captionstudio_core::{CaptionParams, PlanState, PlanTier, Platform, Tone};
//! use captionstudio_models::{GeminiClient, ModelCatalog};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = CaptionGenerator::new(GeminiClient::from_env(ModelCatalog::default())?);
//! let today = chrono::Utc::now().date_naive();
//! let mut studio = CaptionStudio::new(generator, PlanState::new(PlanTier::Free, 10, today));
//!
//! let params = CaptionParams::builder()
//!     .topic("weekend pottery workshop")
//!     .tone(Tone::Inspiring)
//!     .platform(Platform::Instagram)
//!     .build()?;
//!
//! let entry = studio.generate(params).await?;
//! println!("{}", entry.content().captions()[0]);
//! # Ok(())
//! # }
//! ```

mod generator;
mod plan_store;
pub mod render;
mod settings;
mod studio;

pub use generator::{CaptionGenerator, parse_generation};
pub use plan_store::PlanStore;
pub use settings::{
    ENV_PREFIX, GeminiSettings, GenerationSettings, LoggingSettings, PlanSettings,
    SETTINGS_FILE_NAME, StudioSettings,
};
pub use studio::CaptionStudio;

// Re-export the workspace crates
pub use captionstudio_core;
pub use captionstudio_error;
pub use captionstudio_interface;
pub use captionstudio_models;
