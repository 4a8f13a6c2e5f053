use std::sync::Arc;

use super::common::*;
use crate::registration::domain::Session;
use crate::registration::evaluation::RegistrationError;
use crate::registration::repository::RepositoryError;
use crate::registration::SpeakerRegistrationService;

#[test]
fn register_returns_view_with_approved_sessions() {
    let (service, repository) = build_service();
    let mut speaker = speaker_that_would_be_approved();
    speaker
        .sessions
        .push(Session::new("Legacy migrations", "Leaving Cobol behind"));

    let view = service.register(speaker).expect("registration succeeds");

    assert_eq!(view.approved_sessions, vec!["test title"]);
    let stored = repository.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, view.speaker_id);
    assert_eq!(stored[0].1.registered_at, view.registered_at);
    assert_eq!(stored[0].1.session_reviews.len(), 2);
}

#[test]
fn consecutive_registrations_receive_distinct_ids() {
    let (service, _) = build_service();

    let first = service
        .register(speaker_that_would_be_approved())
        .expect("first registers");
    let second = service
        .register(speaker_with_red_flags())
        .expect("second registers");

    assert_ne!(first.speaker_id, second.speaker_id);
}

#[test]
fn register_propagates_rejections_without_writing() {
    let (service, repository) = build_service();
    let mut speaker = speaker_that_does_not_appear_exceptional();
    speaker.email = "name@aol.com".to_string();

    match service.register(speaker) {
        Err(RegistrationError::SpeakerDoesNotMeetRequirements) => {}
        other => panic!("expected requirements rejection, got {other:?}"),
    }
    assert!(repository.stored().is_empty());
}

#[test]
fn register_propagates_repository_conflicts() {
    let service =
        SpeakerRegistrationService::new(Arc::new(ConflictRepository), eligibility_rules());

    match service.register(speaker_that_would_be_approved()) {
        Err(RegistrationError::Storage(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn error_kinds_are_stable() {
    assert_eq!(
        RegistrationError::NoSessionsApproved.kind(),
        "no_sessions_approved"
    );
    assert_eq!(RegistrationError::InvalidArgument.kind(), "invalid_argument");
    assert!(RegistrationError::SpeakerDoesNotMeetRequirements.is_rejection());
    assert!(!RegistrationError::Storage(RepositoryError::CapacityExceeded).is_rejection());
}

#[test]
fn service_exposes_injected_rules() {
    let (service, _) = build_service();
    assert_eq!(service.evaluator().rules(), &eligibility_rules());
}
