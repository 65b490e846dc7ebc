//! Core data types for Caption Studio.
//!
//! This crate holds the request and result model, the request builder that
//! turns caller input into a prompt and response contract, and the
//! caller-owned plan, quota and history state.

mod history;
mod observability;
mod options;
mod outbound;
mod pricing;
mod prompt;
mod quota;
mod request;
mod result;
mod schema;
mod tier;

pub use history::{GenerationHistory, HistoryEntry, time_ago};
pub use observability::{LogFormat, init_tracing};
pub use options::{BASELINE_LANGUAGE, LANGUAGES, Platform, Tone, is_baseline_language};
pub use outbound::StructuredRequest;
pub use pricing::{CHECKOUT_URL, ENTITLEMENT_NOTICE, PRICING_TIERS, PricingTier, SALES_CONTACT};
pub use prompt::{GenerationPlan, build_plan};
pub use quota::{DEFAULT_FREE_DAILY_LIMIT, PlanState, PlanTier};
pub use request::{CaptionParams, CaptionParamsBuilder, DEFAULT_AUDIENCE, GenerationRequest};
pub use result::{DEFAULT_WATERMARK, GenerationResult, WATERMARK_SEPARATOR};
pub use schema::{ResponseSchema, SchemaField};
pub use tier::{ModelTier, SamplingParams};
