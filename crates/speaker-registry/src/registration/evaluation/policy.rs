use super::super::domain::{RequiredField, SessionReview, Speaker};
use super::super::repository::RepositoryError;
use super::config::EligibilityRules;
use super::rules;

/// Reasons a registration is refused, in the order the checks run.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("missing required field: {0}")]
    MissingRequiredField(RequiredField),
    #[error("at least one session must be submitted")]
    InvalidArgument,
    #[error("no submitted session was approved")]
    NoSessionsApproved,
    #[error("speaker does not meet requirements")]
    SpeakerDoesNotMeetRequirements,
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl RegistrationError {
    /// Stable machine-readable code for API payloads.
    pub const fn kind(&self) -> &'static str {
        match self {
            RegistrationError::MissingRequiredField(_) => "missing_required_field",
            RegistrationError::InvalidArgument => "invalid_argument",
            RegistrationError::NoSessionsApproved => "no_sessions_approved",
            RegistrationError::SpeakerDoesNotMeetRequirements => {
                "speaker_does_not_meet_requirements"
            }
            RegistrationError::Storage(_) => "storage",
        }
    }

    /// True for rejections produced by the eligibility rules rather than storage.
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, RegistrationError::Storage(_))
    }
}

pub(crate) struct EligibilitySignals {
    pub session_reviews: Vec<SessionReview>,
    pub appears_exceptional: bool,
    pub has_red_flags: bool,
}

pub(crate) fn check_required_fields(speaker: &Speaker) -> Result<(), RegistrationError> {
    let fields = [
        (RequiredField::FirstName, &speaker.first_name),
        (RequiredField::LastName, &speaker.last_name),
        (RequiredField::Email, &speaker.email),
    ];

    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(RegistrationError::MissingRequiredField(*field)),
        None => Ok(()),
    }
}

pub(crate) fn decide_outcome(
    speaker: &Speaker,
    config: &EligibilityRules,
) -> Result<EligibilitySignals, RegistrationError> {
    check_required_fields(speaker)?;

    if speaker.sessions.is_empty() {
        return Err(RegistrationError::InvalidArgument);
    }

    let session_reviews: Vec<SessionReview> = speaker
        .sessions
        .iter()
        .map(|session| SessionReview {
            title: session.title().to_string(),
            approved: !rules::is_outdated_topic(session, config),
        })
        .collect();

    if !session_reviews.iter().any(|review| review.approved) {
        return Err(RegistrationError::NoSessionsApproved);
    }

    let appears_exceptional = rules::appears_exceptional(speaker, config);
    let has_red_flags = rules::has_red_flags(speaker, config);

    if !appears_exceptional && has_red_flags {
        return Err(RegistrationError::SpeakerDoesNotMeetRequirements);
    }

    Ok(EligibilitySignals {
        session_reviews,
        appears_exceptional,
        has_red_flags,
    })
}
