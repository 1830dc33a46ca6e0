use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, error, warn};

use crate::domain::view::ViewState;
use crate::error::{AppError, AppResult};
use crate::services::ViewStateStore;

pub const VIEW_STATE_KEY: &str = "kanbanViewState";

pub fn decode_view_state(contents: &str) -> AppResult<ViewState> {
    serde_json::from_str::<ViewState>(contents)
        .map_err(|err| AppError::PersistedStateMalformed(err.to_string()))
}

pub fn encode_view_state(state: &ViewState) -> AppResult<String> {
    serde_json::to_string_pretty(state)
        .map_err(|err| AppError::Configuration(format!("failed to encode view state: {err}")))
}

/// Keeps the view state as a JSON file named after [`VIEW_STATE_KEY`].
pub struct FileViewStateStore {
    file_path: PathBuf,
}

impl FileViewStateStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            file_path: state_dir.join(format!("{VIEW_STATE_KEY}.json")),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write(&self, state: &ViewState) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = encode_view_state(state)?;
        let staging = self.file_path.with_extension("json.tmp");
        fs::write(&staging, data)?;
        fs::rename(&staging, &self.file_path)?;
        Ok(())
    }
}

impl ViewStateStore for FileViewStateStore {
    fn load(&self) -> Option<ViewState> {
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no saved view state at {}", self.file_path.display());
                return None;
            }
            Err(err) => {
                warn!(
                    "failed to read view state from {}: {err}",
                    self.file_path.display()
                );
                return None;
            }
        };

        match decode_view_state(&contents) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("ignoring {}: {err}", self.file_path.display());
                None
            }
        }
    }

    fn save(&self, state: &ViewState) {
        match self.write(state) {
            Ok(()) => debug!(
                "saved view state {}/{} to {}",
                state.grouping,
                state.sort,
                self.file_path.display()
            ),
            Err(err) => error!(
                "failed to save view state to {}: {err}",
                self.file_path.display()
            ),
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.file_path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => error!(
                "failed to remove view state {}: {err}",
                self.file_path.display()
            ),
        }
    }
}

/// Holds the serialized record in memory; nothing survives the process.
#[derive(Default)]
pub struct MemoryViewStateStore {
    record: Mutex<Option<String>>,
}

impl MemoryViewStateStore {
    #[cfg(test)]
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(record.into())),
        }
    }

    pub fn record(&self) -> Option<String> {
        self.record
            .lock()
            .map(|record| record.clone())
            .unwrap_or_default()
    }
}

impl ViewStateStore for MemoryViewStateStore {
    fn load(&self) -> Option<ViewState> {
        let record = self.record()?;
        match decode_view_state(&record) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("ignoring in-memory view state: {err}");
                None
            }
        }
    }

    fn save(&self, state: &ViewState) {
        let encoded = match encode_view_state(state) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("{err}");
                return;
            }
        };
        if let Ok(mut record) = self.record.lock() {
            *record = Some(encoded);
        }
    }

    fn clear(&self) {
        if let Ok(mut record) = self.record.lock() {
            *record = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::{GroupingOption, SortKey};

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewStateStore::new(&dir.path().join("nested"));
        let state = ViewState::new(GroupingOption::Priority, SortKey::Title);

        store.save(&state);
        assert_eq!(store.load(), Some(state));
        assert!(store.file_path().ends_with("kanbanViewState.json"));
    }

    #[test]
    fn file_store_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewStateStore::new(dir.path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_malformed_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewStateStore::new(dir.path());
        fs::write(store.file_path(), r#"{"groupingOption": "team", "sort": "title"}"#).unwrap();
        assert_eq!(store.load(), None);

        fs::write(store.file_path(), "not json").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewStateStore::new(dir.path());
        store.save(&ViewState::new(GroupingOption::User, SortKey::Title));
        store.save(&ViewState::new(GroupingOption::Status, SortKey::Priority));
        assert_eq!(store.load(), Some(ViewState::default()));
    }

    #[test]
    fn clear_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileViewStateStore::new(dir.path());
        store.save(&ViewState::new(GroupingOption::User, SortKey::Title));
        store.clear();
        assert_eq!(store.load(), None);
        store.clear();
    }

    #[test]
    fn memory_store_round_trips_every_state() {
        let store = MemoryViewStateStore::default();
        assert_eq!(store.load(), None);
        for grouping in GroupingOption::ALL {
            for sort in SortKey::ALL {
                let state = ViewState::new(grouping, sort);
                store.save(&state);
                assert_eq!(store.load(), Some(state));
            }
        }
    }

    #[test]
    fn memory_store_partial_record_is_none() {
        let store = MemoryViewStateStore::with_record(r#"{"groupingOption": "user"}"#);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn decode_reports_malformed_state() {
        let err = decode_view_state("[]").unwrap_err();
        assert!(matches!(err, AppError::PersistedStateMalformed(_)));
    }
}
