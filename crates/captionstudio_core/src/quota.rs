//! Plan tier and daily quota state owned by the caller.

use captionstudio_error::{StudioError, StudioErrorKind};
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info};

/// Successful generations a free plan may make per day.
pub const DEFAULT_FREE_DAILY_LIMIT: u32 = 10;

/// Subscription tier.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlanTier {
    /// Watermarked output, daily limit
    #[default]
    Free,
    /// Entitled: enhanced model, language, brand voice, insights
    Pro,
}

/// Entitlement and usage counter for one user.
///
/// The state is passed explicitly to whoever needs it; nothing in the
/// generation path reads it from ambient storage. Dates are supplied by the
/// caller so rollover is deterministic.
///
/// # Examples
///
/// ```
/// use captionstudio_core::{PlanState, PlanTier};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let mut state = PlanState::new(PlanTier::Free, 2, today);
///
/// state.ensure_can_generate().unwrap();
/// state.record_generation();
/// state.record_generation();
/// assert!(state.ensure_can_generate().is_err());
///
/// state.roll_over(today.succ_opt().unwrap());
/// assert_eq!(state.remaining(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlanState {
    /// Current tier
    tier: PlanTier,
    /// Successful generations on `usage_date`
    generations_used: u32,
    /// Day the counter belongs to
    usage_date: NaiveDate,
    /// Daily allowance for the free tier
    #[serde(default = "default_free_daily_limit")]
    free_daily_limit: u32,
}

fn default_free_daily_limit() -> u32 {
    DEFAULT_FREE_DAILY_LIMIT
}

impl PlanState {
    /// Fresh state with no usage on `today`.
    pub fn new(tier: PlanTier, free_daily_limit: u32, today: NaiveDate) -> Self {
        Self {
            tier,
            generations_used: 0,
            usage_date: today,
            free_daily_limit,
        }
    }

    /// Whether the caller is entitled to Pro behaviour.
    pub fn is_entitled(&self) -> bool {
        self.tier == PlanTier::Pro
    }

    /// Generations left today, or `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        match self.tier {
            PlanTier::Pro => None,
            PlanTier::Free => Some(self.free_daily_limit.saturating_sub(self.generations_used)),
        }
    }

    /// Reset the counter if `today` is a different day.
    pub fn roll_over(&mut self, today: NaiveDate) {
        if today != self.usage_date {
            debug!(
                previous = %self.usage_date,
                today = %today,
                used = self.generations_used,
                "Resetting daily usage"
            );
            self.usage_date = today;
            self.generations_used = 0;
        }
    }

    /// Check the quota before a request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`StudioErrorKind::QuotaExhausted`] when a free plan has no
    /// generations left today.
    pub fn ensure_can_generate(&self) -> Result<(), StudioError> {
        match self.remaining() {
            Some(0) => Err(StudioError::new(StudioErrorKind::QuotaExhausted {
                used: self.generations_used,
                limit: self.free_daily_limit,
            })),
            _ => Ok(()),
        }
    }

    /// Count one successful generation.
    pub fn record_generation(&mut self) {
        self.generations_used = self.generations_used.saturating_add(1);
        debug!(used = self.generations_used, tier = %self.tier, "Recorded generation");
    }

    /// Apply an operator-provisioned tier.
    pub fn set_tier(&mut self, tier: PlanTier) {
        if tier != self.tier {
            info!(from = %self.tier, to = %tier, "Plan tier changed");
            self.tier = tier;
        }
    }

    /// Apply a configured free-tier allowance.
    pub fn set_free_daily_limit(&mut self, limit: u32) {
        self.free_daily_limit = limit;
    }
}
