use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySpeakerRepository};
use crate::routes::with_registration_routes;
use axum::Extension;
use speaker_registry::config::AppConfig;
use speaker_registry::error::AppError;
use speaker_registry::registration::SpeakerRegistrationService;
use speaker_registry::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
    };

    let repository = Arc::new(InMemorySpeakerRepository::default());
    let registration_service = Arc::new(SpeakerRegistrationService::new(
        repository,
        config.rules.clone(),
    ));

    let app = with_registration_routes(registration_service).layer(Extension(app_state));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        outdated_topics = config.rules.outdated_topics.len(),
        "speaker registry ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
