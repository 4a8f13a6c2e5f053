mod config;
mod policy;
mod rules;

pub use config::EligibilityRules;
pub use policy::RegistrationError;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{SessionReview, Speaker, SpeakerId};
use super::repository::{SpeakerRecord, SpeakerRepository};
use policy::decide_outcome;

/// Stateless evaluator that applies the eligibility rules to a speaker submission.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    rules: EligibilityRules,
}

impl EligibilityEvaluator {
    pub fn new(rules: EligibilityRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }

    /// Run every eligibility check without touching storage.
    pub fn evaluate(&self, speaker: &Speaker) -> Result<EligibilityOutcome, RegistrationError> {
        let signals = decide_outcome(speaker, &self.rules)?;

        Ok(EligibilityOutcome {
            session_reviews: signals.session_reviews,
            appears_exceptional: signals.appears_exceptional,
            has_red_flags: signals.has_red_flags,
        })
    }

    /// Evaluate the speaker and, when eligible, persist it through `repository`.
    ///
    /// Storage is called at most once and only after every check passes.
    pub fn register<R>(
        &self,
        speaker: &Speaker,
        repository: &R,
    ) -> Result<SpeakerId, RegistrationError>
    where
        R: SpeakerRepository + ?Sized,
    {
        let record = self.admit(speaker)?;
        let speaker_id = repository.add_speaker(record)?;
        info!(%speaker_id, email = %speaker.email, "speaker registered");
        Ok(speaker_id)
    }

    /// Build the record that storage receives for an eligible speaker.
    pub(crate) fn admit(&self, speaker: &Speaker) -> Result<SpeakerRecord, RegistrationError> {
        let outcome = self.evaluate(speaker)?;

        for review in &outcome.session_reviews {
            debug!(title = %review.title, approved = review.approved, "session reviewed");
        }

        Ok(SpeakerRecord {
            speaker: speaker.clone(),
            session_reviews: outcome.session_reviews,
            registered_at: Utc::now(),
        })
    }
}

/// Result of a successful evaluation, kept for audit and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub session_reviews: Vec<SessionReview>,
    pub appears_exceptional: bool,
    pub has_red_flags: bool,
}

impl EligibilityOutcome {
    pub fn approved_sessions(&self) -> impl Iterator<Item = &SessionReview> {
        self.session_reviews.iter().filter(|review| review.approved)
    }
}
