//! Session-scoped record of successful generations.

use crate::GenerationResult;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One successful generation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Strictly increasing within a session
    id: u64,
    /// Topic the content was generated for
    topic: String,
    /// When the generation completed
    timestamp: DateTime<Utc>,
    /// The generated content
    content: GenerationResult,
}

/// Newest-first list of this session's generations with a current selection.
///
/// # Examples
///
/// ```
/// use captionstudio_core::{GenerationHistory, GenerationResult};
/// use chrono::Utc;
///
/// let mut history = GenerationHistory::new();
/// let content = GenerationResult::new(vec![], vec![], None);
/// let first = *history.record("espresso", content.clone(), Utc::now()).id();
/// let second = *history.record("latte", content, Utc::now()).id();
///
/// assert!(second > first);
/// assert_eq!(history.entries()[0].topic(), "latte");
/// assert_eq!(history.selected().map(|e| *e.id()), Some(second));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationHistory {
    entries: Vec<HistoryEntry>,
    last_id: u64,
    selected: Option<u64>,
}

impl GenerationHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front and select it.
    pub fn record(
        &mut self,
        topic: impl Into<String>,
        content: GenerationResult,
        now: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.last_id += 1;
        let entry = HistoryEntry {
            id: self.last_id,
            topic: topic.into(),
            timestamp: now,
            content,
        };
        self.entries.insert(0, entry);
        self.selected = Some(self.last_id);
        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Make `id` the current selection. Unknown ids leave it unchanged.
    pub fn select(&mut self, id: u64) -> Option<&HistoryEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.selected = Some(id);
        Some(&self.entries[index])
    }

    /// Currently selected entry.
    pub fn selected(&self) -> Option<&HistoryEntry> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been generated this session.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const UNITS: &[(i64, &str)] = &[
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// Coarse relative time, e.g. "3 minutes ago".
///
/// Picks the largest unit that fits more than once; times in the future
/// count as zero seconds.
///
/// # Examples
///
/// ```
/// use captionstudio_core::time_ago;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::seconds(45), now), "45 seconds ago");
/// assert_eq!(time_ago(now - Duration::minutes(30), now), "30 minutes ago");
/// assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
/// ```
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    for (unit_secs, unit) in UNITS {
        if seconds > *unit_secs {
            return plural(seconds / unit_secs, unit);
        }
    }
    plural(seconds, "second")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
