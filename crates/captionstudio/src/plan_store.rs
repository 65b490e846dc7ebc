//! JSON persistence of the caller's plan state.

use captionstudio_core::{PlanState, PlanTier};
use captionstudio_error::{StorageError, StorageErrorKind};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// File holding one user's [`PlanState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `path`, or at [`default_path`](Self::default_path) when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NoDataDir`] if no path is given and the
    /// platform has no data directory.
    pub fn at_or_default(path: Option<&Path>) -> Result<Self, StorageError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    /// `<data dir>/captionstudio/plan.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NoDataDir`] if the platform has no data
    /// directory.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::data_dir()
            .map(|dir| dir.join("captionstudio").join("plan.json"))
            .ok_or_else(|| StorageError::new(StorageErrorKind::NoDataDir("plan state".to_string())))
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state and apply the provisioned tier and limit.
    ///
    /// A missing file yields fresh state for `today`. The tier and free
    /// allowance always come from the caller's settings, so editing the
    /// file cannot grant Pro.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::Io`] if the file exists but cannot be
    /// read, or [`StorageErrorKind::Corrupt`] if it cannot be decoded.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(
        &self,
        tier: PlanTier,
        free_daily_limit: u32,
        today: NaiveDate,
    ) -> Result<PlanState, StorageError> {
        let mut state = match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str::<PlanState>(&contents).map_err(|e| {
                warn!(error = %e, "Plan state file could not be decoded");
                StorageError::new(StorageErrorKind::Corrupt(e.to_string()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No plan state file, starting fresh");
                PlanState::new(tier, free_daily_limit, today)
            }
            Err(e) => return Err(StorageError::new(StorageErrorKind::Io(e.to_string()))),
        };

        state.set_tier(tier);
        state.set_free_daily_limit(free_daily_limit);
        state.roll_over(today);
        Ok(state)
    }

    /// Write `state`, creating parent directories as needed.
    ///
    /// The file is written next to its final location and renamed into
    /// place so a crash never leaves a truncated file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::Io`] on any filesystem failure.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &PlanState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StorageError::new(StorageErrorKind::Corrupt(e.to_string())))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;

        info!(
            used = *state.generations_used(),
            date = %state.usage_date(),
            "Saved plan state"
        );
        Ok(())
    }

    /// Save `state`, logging a failure instead of returning it.
    ///
    /// Used after a successful generation, where the content must still
    /// reach the user even if the quota counter cannot be persisted.
    /// Returns `false` when the state was not saved.
    pub fn save_or_warn(&self, state: &PlanState) -> bool {
        match self.save(state) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Plan state not saved");
                false
            }
        }
    }
}
