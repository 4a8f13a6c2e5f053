use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{SessionReview, Speaker, SpeakerId};

/// Repository record containing the accepted speaker and its session reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerRecord {
    pub speaker: Speaker,
    pub session_reviews: Vec<SessionReview>,
    pub registered_at: DateTime<Utc>,
}

impl SpeakerRecord {
    pub fn approved_session_titles(&self) -> Vec<String> {
        self.session_reviews
            .iter()
            .filter(|review| review.approved)
            .map(|review| review.title.clone())
            .collect()
    }
}

/// Storage abstraction so registration can run against any backend.
pub trait SpeakerRepository: Send + Sync {
    fn add_speaker(&self, record: SpeakerRecord) -> Result<SpeakerId, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("speaker already registered")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("speaker identifier space exhausted")]
    CapacityExceeded,
}

/// Sanitized representation of a completed registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub speaker_id: SpeakerId,
    pub approved_sessions: Vec<String>,
    pub registered_at: DateTime<Utc>,
}
