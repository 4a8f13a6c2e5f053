use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::registration::domain::{Browser, Session, Speaker, SpeakerId};
use crate::registration::evaluation::{EligibilityEvaluator, EligibilityRules};
use crate::registration::repository::{RepositoryError, SpeakerRecord, SpeakerRepository};
use crate::registration::{registration_router, SpeakerRegistrationService};

pub(super) fn eligibility_rules() -> EligibilityRules {
    EligibilityRules::default()
}

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(eligibility_rules())
}

pub(super) fn speaker_that_would_be_approved() -> Speaker {
    Speaker {
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        email: "example@domain.com".to_string(),
        employer: Some("Example Employer".to_string()),
        years_experience: 1,
        has_blog: true,
        blog_url: String::new(),
        certifications: Vec::new(),
        browser: Browser::new("test", 1),
        sessions: vec![Session::new("test title", "test description")],
    }
}

pub(super) fn speaker_with_red_flags() -> Speaker {
    let mut speaker = speaker_that_would_be_approved();
    speaker.email = "tom@aol.com".to_string();
    speaker.browser = Browser::new("IE", 6);
    speaker
}

pub(super) fn speaker_that_does_not_appear_exceptional() -> Speaker {
    let mut speaker = speaker_that_would_be_approved();
    speaker.has_blog = false;
    speaker
}

pub(super) fn build_service() -> (
    SpeakerRegistrationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SpeakerRegistrationService::new(repository.clone(), eligibility_rules());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    sequence: Arc<AtomicU64>,
    pub(super) records: Arc<Mutex<Vec<(SpeakerId, SpeakerRecord)>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Vec<(SpeakerId, SpeakerRecord)> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl SpeakerRepository for MemoryRepository {
    fn add_speaker(&self, record: SpeakerRecord) -> Result<SpeakerId, RepositoryError> {
        let id = SpeakerId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .push((id, record));
        Ok(id)
    }
}

pub(super) struct ConflictRepository;

impl SpeakerRepository for ConflictRepository {
    fn add_speaker(&self, _record: SpeakerRecord) -> Result<SpeakerId, RepositoryError> {
        Err(RepositoryError::Conflict)
    }
}

pub(super) struct UnavailableRepository;

impl SpeakerRepository for UnavailableRepository {
    fn add_speaker(&self, _record: SpeakerRecord) -> Result<SpeakerId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn registration_router_with_service(
    service: SpeakerRegistrationService<MemoryRepository>,
) -> axum::Router {
    registration_router(Arc::new(service))
}
