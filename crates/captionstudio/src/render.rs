//! Plain-text rendering for the command line.

use captionstudio_core::{
    CHECKOUT_URL, ENTITLEMENT_NOTICE, HistoryEntry, LANGUAGES, PRICING_TIERS, PlanState,
    PlanTier, Platform, SALES_CONTACT, Tone, time_ago,
};
use captionstudio_error::JsonError;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Captions, hashtags and insights of one history entry.
///
/// # Examples
///
/// ```
/// use captionstudio::render::render_entry;
/// use captionstudio_core::{GenerationHistory, GenerationResult};
/// use chrono::Utc;
///
/// let mut history = GenerationHistory::new();
/// let now = Utc::now();
/// let content = GenerationResult::new(vec!["Hello".into()], vec!["coffee".into()], None);
/// let text = render_entry(history.record("coffee", content, now), now);
///
/// assert!(text.contains("1. Hello"));
/// assert!(text.contains("#coffee"));
/// assert!(!text.contains("Insights"));
/// ```
pub fn render_entry(entry: &HistoryEntry, now: DateTime<Utc>) -> String {
    let content = entry.content();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "[{}] {} ({})",
        entry.id(),
        entry.topic(),
        time_ago(*entry.timestamp(), now)
    );

    let _ = writeln!(out, "\nCaptions");
    for (i, caption) in content.captions().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, indent_continuation(caption));
    }

    let _ = writeln!(out, "\nHashtags");
    let _ = writeln!(out, "     {}", content.hashtag_labels().join(" "));

    if let Some(insights) = content.insights() {
        let _ = writeln!(out, "\nInsights");
        for (i, insight) in insights.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, insight);
        }
    }

    out
}

/// A history entry as pretty-printed JSON.
///
/// # Errors
///
/// Returns a [`JsonError`] if serialization fails.
pub fn render_entry_json(entry: &HistoryEntry) -> Result<String, JsonError> {
    serde_json::to_string_pretty(entry).map_err(|e| JsonError::new(e.to_string()))
}

/// One line per entry, newest first.
pub fn render_history<'a>(
    entries: impl IntoIterator<Item = &'a HistoryEntry>,
    selected: Option<u64>,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    for entry in entries {
        let marker = if Some(*entry.id()) == selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} [{}] {} ({})",
            marker,
            entry.id(),
            entry.topic(),
            time_ago(*entry.timestamp(), now)
        );
    }
    if out.is_empty() {
        out.push_str("No generations yet.\n");
    }
    out
}

/// Tier and remaining quota.
///
/// # Examples
///
/// ```
/// use captionstudio::render::render_plan;
/// use captionstudio_core::{PlanState, PlanTier};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let text = render_plan(&PlanState::new(PlanTier::Free, 10, today));
/// assert!(text.contains("10 of 10 generations left today"));
/// ```
pub fn render_plan(plan: &PlanState) -> String {
    let mut out = String::new();
    match plan.tier() {
        PlanTier::Pro => {
            let _ = writeln!(out, "Plan: Pro");
            let _ = writeln!(out, "Unlimited generations, no watermark.");
        }
        PlanTier::Free => {
            let _ = writeln!(out, "Plan: Free");
            let _ = writeln!(
                out,
                "{} of {} generations left today ({}).",
                plan.remaining().unwrap_or(0),
                plan.free_daily_limit(),
                plan.usage_date()
            );
            let _ = writeln!(out, "Run `captionstudio pricing` to see Pro features.");
        }
    }
    out
}

/// Pricing table with the checkout link.
pub fn render_pricing(current: PlanTier) -> String {
    let mut out = String::new();
    for tier in PRICING_TIERS {
        let current_marker = if tier.name.eq_ignore_ascii_case(&current.to_string()) {
            " (current plan)"
        } else if tier.recommended {
            " (most popular)"
        } else {
            ""
        };
        let _ = writeln!(out, "{} {}{}", tier.name, tier.price, current_marker);
        let _ = writeln!(out, "  {}", tier.description);
        for feature in tier.features {
            let _ = writeln!(out, "  - {}", feature);
        }
        let _ = writeln!(out, "  > {}", tier.call_to_action);
        out.push('\n');
    }
    let _ = writeln!(out, "Upgrade to Pro: {}", CHECKOUT_URL);
    let _ = writeln!(out, "Agency plans: {}", SALES_CONTACT);
    let _ = writeln!(out, "{}", ENTITLEMENT_NOTICE);
    out
}

/// Tones, platforms and languages accepted on the command line.
pub fn render_options() -> String {
    let mut out = String::new();
    let tones: Vec<String> = Tone::iter().map(|t| t.to_string()).collect();
    let platforms: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out, "Tones:     {}", tones.join(", "));
    let _ = writeln!(out, "Platforms: {}", platforms.join(", "));
    let _ = writeln!(out, "Languages: {} (Pro only)", LANGUAGES.join(", "));
    out
}

fn indent_continuation(text: &str) -> String {
    text.replace('\n', "\n     ")
}
