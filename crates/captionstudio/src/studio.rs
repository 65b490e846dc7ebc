//! Caller-side orchestration: quota, entitlement and history around the generator.

use crate::CaptionGenerator;
use captionstudio_core::{CaptionParams, GenerationHistory, HistoryEntry, PlanState};
use captionstudio_error::CaptionStudioResult;
use captionstudio_interface::GenerationDriver;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Owns one user's plan state and session history.
///
/// The plan is passed in by whoever loaded it and handed back through
/// [`plan`](Self::plan) for persistence; the generator itself never sees
/// it, only the entitlement flag carried by each request.
#[derive(Debug)]
pub struct CaptionStudio<D> {
    generator: CaptionGenerator<D>,
    plan: PlanState,
    history: GenerationHistory,
}

impl<D: GenerationDriver> CaptionStudio<D> {
    /// Studio with an empty history.
    pub fn new(generator: CaptionGenerator<D>, plan: PlanState) -> Self {
        Self {
            generator,
            plan,
            history: GenerationHistory::new(),
        }
    }

    /// Current plan state.
    pub fn plan(&self) -> &PlanState {
        &self.plan
    }

    /// This session's generations.
    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &CaptionGenerator<D> {
        &self.generator
    }

    /// Change the selected history entry.
    pub fn select(&mut self, id: u64) -> Option<&HistoryEntry> {
        self.history.select(id)
    }

    /// Generate content for `params` at the current time.
    ///
    /// # Errors
    ///
    /// See [`generate_at`](Self::generate_at).
    pub async fn generate(&mut self, params: CaptionParams) -> CaptionStudioResult<&HistoryEntry> {
        self.generate_at(params, Utc::now()).await
    }

    /// Generate content for `params`, treating `now` as the current time.
    ///
    /// The daily counter rolls over first. A blank topic or an exhausted
    /// quota is rejected before the service is contacted. Usage is counted
    /// and history recorded only after a successful generation.
    ///
    /// # Errors
    ///
    /// - `Studio(EmptyTopic)` for a blank topic
    /// - `Studio(QuotaExhausted)` when a free plan has no generations left
    /// - `GenerationFailed` when the service call or its payload fails
    #[instrument(skip_all, fields(tier = %self.plan.tier()))]
    pub async fn generate_at(
        &mut self,
        params: CaptionParams,
        now: DateTime<Utc>,
    ) -> CaptionStudioResult<&HistoryEntry> {
        self.plan.roll_over(now.date_naive());

        let topic = params.topic().trim().to_string();
        let request = params.into_request(self.plan.is_entitled())?;
        self.plan.ensure_can_generate()?;

        let content = self.generator.generate(&request).await?;
        self.plan.record_generation();

        let entry = self.history.record(topic, content, now);
        info!(
            id = *entry.id(),
            remaining = ?self.plan.remaining(),
            "Recorded generation in history"
        );
        Ok(entry)
    }
}
