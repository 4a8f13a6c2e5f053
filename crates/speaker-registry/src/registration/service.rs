use std::sync::Arc;

use tracing::info;

use super::domain::Speaker;
use super::evaluation::{EligibilityEvaluator, EligibilityRules, RegistrationError};
use super::repository::{RegistrationView, SpeakerRepository};

/// Service composing the eligibility evaluator with a speaker repository.
pub struct SpeakerRegistrationService<R> {
    repository: Arc<R>,
    evaluator: Arc<EligibilityEvaluator>,
}

impl<R> SpeakerRegistrationService<R>
where
    R: SpeakerRepository + 'static,
{
    pub fn new(repository: Arc<R>, rules: EligibilityRules) -> Self {
        Self {
            repository,
            evaluator: Arc::new(EligibilityEvaluator::new(rules)),
        }
    }

    pub fn evaluator(&self) -> &EligibilityEvaluator {
        &self.evaluator
    }

    /// Evaluate and persist a submission, returning the stored registration.
    pub fn register(&self, speaker: Speaker) -> Result<RegistrationView, RegistrationError> {
        let record = self.evaluator.admit(&speaker)?;
        let approved_sessions = record.approved_session_titles();
        let registered_at = record.registered_at;

        let speaker_id = self.repository.add_speaker(record)?;
        info!(
            %speaker_id,
            approved = approved_sessions.len(),
            "speaker registration accepted"
        );

        Ok(RegistrationView {
            speaker_id,
            approved_sessions,
            registered_at,
        })
    }
}
