use speaker_registry::registration::{
    RepositoryError, SpeakerId, SpeakerRecord, SpeakerRepository,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
}

/// Process-local store; one registration per email address.
#[derive(Default, Clone)]
pub(crate) struct InMemorySpeakerRepository {
    sequence: Arc<AtomicU64>,
    records: Arc<Mutex<HashMap<SpeakerId, SpeakerRecord>>>,
}

impl InMemorySpeakerRepository {
    fn next_id(&self) -> Result<SpeakerId, RepositoryError> {
        self.sequence
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map(|previous| SpeakerId(previous + 1))
            .map_err(|_| RepositoryError::CapacityExceeded)
    }

    #[cfg(test)]
    pub(crate) fn fetch(&self, id: SpeakerId) -> Option<SpeakerRecord> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard.get(&id).cloned()
    }
}

impl SpeakerRepository for InMemorySpeakerRepository {
    fn add_speaker(&self, record: SpeakerRecord) -> Result<SpeakerId, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let email = &record.speaker.email;
        if guard
            .values()
            .any(|existing| existing.speaker.email.eq_ignore_ascii_case(email))
        {
            return Err(RepositoryError::Conflict);
        }

        let id = self.next_id()?;
        guard.insert(id, record);
        Ok(id)
    }
}
