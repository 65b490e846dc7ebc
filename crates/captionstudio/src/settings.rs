//! Layered application settings.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `captionstudio.toml` in the user config directory (optional)
//! 3. `captionstudio.toml` in the working directory (optional), or the
//!    file passed with `--config` (required)
//! 4. `CAPTIONSTUDIO__SECTION__KEY` environment variables
//!
//! The Gemini API key is not a setting; it is read from `GEMINI_API_KEY`
//! or `API_KEY` when the client is built.

use captionstudio_core::{
    DEFAULT_FREE_DAILY_LIMIT, DEFAULT_WATERMARK, LogFormat, PlanTier, SamplingParams,
};
use captionstudio_error::{ConfigError, ConfigErrorKind};
use captionstudio_models::{
    DEFAULT_ENHANCED_MODEL, DEFAULT_STANDARD_MODEL, GEMINI_API_BASE, ModelCatalog,
};
use config::{Config, Environment, File};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CAPTIONSTUDIO";

/// Settings file name looked up in the config and working directories.
pub const SETTINGS_FILE_NAME: &str = "captionstudio.toml";

/// Gemini endpoint and model ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiSettings {
    /// API base URL, without a trailing `/models`
    base_url: String,
    /// Model serving free callers
    standard_model: String,
    /// Model serving entitled callers
    enhanced_model: String,
}

/// Sampling and post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationSettings {
    temperature: f32,
    top_p: f32,
    /// Line appended to captions for free callers
    watermark: String,
}

/// Operator-provisioned plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct PlanSettings {
    /// Tier applied to the stored plan state on every start
    tier: PlanTier,
    /// Daily allowance for the free tier
    free_daily_limit: u32,
    /// Plan-state file; defaults to the user data directory
    #[serde(default)]
    state_path: Option<PathBuf>,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of human-readable output
    json: bool,
    /// Filter used when `RUST_LOG` is unset
    filter: String,
}

/// All application settings.
///
/// # Examples
///
/// ```
/// use captionstudio::StudioSettings;
///
/// let settings = StudioSettings::defaults().unwrap();
/// assert_eq!(settings.gemini().standard_model(), "gemini-2.5-flash");
/// assert_eq!(*settings.plan().free_daily_limit(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StudioSettings {
    gemini: GeminiSettings,
    generation: GenerationSettings,
    plan: PlanSettings,
    logging: LoggingSettings,
}

impl StudioSettings {
    /// Load settings from every source.
    ///
    /// When `path` is given that file must exist and replaces the
    /// working-directory lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read, a value has the
    /// wrong type, or a value is out of range.
    #[tracing::instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = default_builder()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_file = config_dir.join("captionstudio").join(SETTINGS_FILE_NAME);
            debug!(path = %user_file.display(), "Checking user settings file");
            builder = builder.add_source(File::from(user_file).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::from(Path::new(SETTINGS_FILE_NAME)).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Load only the given file on top of the defaults.
    ///
    /// No user directory lookup and no environment overrides; used where
    /// the result must not depend on the machine.
    ///
    /// # Errors
    ///
    /// As for [`load`](Self::load).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let builder = default_builder()?.add_source(File::from(path).required(true));
        Self::finish(builder)
    }

    /// Built-in defaults only.
    ///
    /// # Errors
    ///
    /// Fails only if the defaults themselves are invalid.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::finish(default_builder()?)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Self = builder
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;
        settings.validate()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::Invalid`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(invalid(
                "generation.temperature",
                format!("{} is outside 0.0..=2.0", generation.temperature),
            ));
        }
        if !(generation.top_p > 0.0 && generation.top_p <= 1.0) {
            return Err(invalid(
                "generation.top_p",
                format!("{} is outside (0.0, 1.0]", generation.top_p),
            ));
        }
        if generation.watermark.trim().is_empty() {
            return Err(invalid("generation.watermark", "must not be empty".to_string()));
        }
        if self.gemini.base_url.trim().is_empty() {
            return Err(invalid("gemini.base_url", "must not be empty".to_string()));
        }
        if self.gemini.standard_model.trim().is_empty() {
            return Err(invalid("gemini.standard_model", "must not be empty".to_string()));
        }
        if self.gemini.enhanced_model.trim().is_empty() {
            return Err(invalid("gemini.enhanced_model", "must not be empty".to_string()));
        }
        Ok(())
    }

    /// Tier to model mapping.
    pub fn model_catalog(&self) -> ModelCatalog {
        ModelCatalog::new(&self.gemini.standard_model, &self.gemini.enhanced_model)
    }

    /// Sampling values for every request.
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.generation.temperature,
            top_p: self.generation.top_p,
        }
    }

    /// Log output format.
    pub fn log_format(&self) -> LogFormat {
        if self.logging.json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

fn default_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let sampling = SamplingParams::default();
    Config::builder()
        .set_default("gemini.base_url", GEMINI_API_BASE)
        .and_then(|b| b.set_default("gemini.standard_model", DEFAULT_STANDARD_MODEL))
        .and_then(|b| b.set_default("gemini.enhanced_model", DEFAULT_ENHANCED_MODEL))
        .and_then(|b| b.set_default("generation.temperature", f64::from(sampling.temperature)))
        .and_then(|b| b.set_default("generation.top_p", f64::from(sampling.top_p)))
        .and_then(|b| b.set_default("generation.watermark", DEFAULT_WATERMARK))
        .and_then(|b| b.set_default("plan.tier", PlanTier::default().to_string()))
        .and_then(|b| b.set_default("plan.free_daily_limit", i64::from(DEFAULT_FREE_DAILY_LIMIT)))
        .and_then(|b| b.set_default("logging.json", false))
        .and_then(|b| b.set_default("logging.filter", "info"))
        .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))
}

#[track_caller]
fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::new(ConfigErrorKind::Invalid {
        key: key.to_string(),
        message,
    })
}
