//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! captionstudio binary.

mod commands;
mod generate;
mod info;
mod session;

pub use commands::{Cli, Commands, ContentArgs};
pub use generate::handle_generate_command;
pub use info::{handle_options_command, handle_plan_command, handle_pricing_command};
pub use session::run_session;

use captionstudio::{CaptionGenerator, CaptionStudio, PlanStore, StudioSettings};
use captionstudio_models::GeminiClient;

/// Shown when a generation succeeded but the quota counter could not be written.
pub const PLAN_NOT_SAVED: &str =
    "Warning: usage could not be saved; today's quota count was not updated.";

/// Build the generator, load plan state, and wrap both in a studio.
///
/// A missing API key is fatal here, before any input is read.
pub fn open_studio(
    settings: &StudioSettings,
) -> anyhow::Result<(CaptionStudio<GeminiClient>, PlanStore)> {
    let client = GeminiClient::from_env(settings.model_catalog())?
        .with_base_url(settings.gemini().base_url());
    let generator = CaptionGenerator::new(client)
        .with_watermark(settings.generation().watermark())
        .with_sampling(settings.sampling());

    let store = PlanStore::at_or_default(settings.plan().state_path().as_deref())?;
    let plan = store.load(
        *settings.plan().tier(),
        *settings.plan().free_daily_limit(),
        chrono::Utc::now().date_naive(),
    )?;

    tracing::debug!(path = %store.path().display(), tier = %plan.tier(), "Opened studio");
    Ok((CaptionStudio::new(generator, plan), store))
}
