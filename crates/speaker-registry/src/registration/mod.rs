//! Speaker registration: eligibility rules, storage seam, and HTTP intake.
//!
//! A submission passes through a fixed sequence of checks (required fields, session
//! presence, session topics, speaker qualification) and the first failing check decides
//! the error. Only a fully eligible speaker reaches the repository.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Browser, RequiredField, Session, SessionReview, Speaker, SpeakerId};
pub use evaluation::{
    EligibilityEvaluator, EligibilityOutcome, EligibilityRules, RegistrationError,
};
pub use repository::{RegistrationView, RepositoryError, SpeakerRecord, SpeakerRepository};
pub use router::registration_router;
pub use service::SpeakerRegistrationService;
