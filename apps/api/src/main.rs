mod coach;
mod config;
mod errors;
mod interview;
mod models;
mod resumes;
mod routes;
mod state;
mod tracker;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::controller::InterviewTiming;
use crate::interview::feedback::CannedFeedbackGenerator;
use crate::interview::questions::QuestionSource;
use crate::interview::registry::SessionRegistry;
use crate::resumes::store::VersionStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tracker::board::TrackerBoard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerNest API v{}", env!("CARGO_PKG_VERSION"));

    // The fixed interview script and mocked feedback generator. Swap the
    // generator here if a real backend ever materializes.
    let questions = Arc::new(QuestionSource::default());
    let feedback = Arc::new(CannedFeedbackGenerator::default());
    info!(
        "Interview engine ready ({} questions, {}s per session)",
        questions.len(),
        config.interview_duration_secs
    );

    let timing = InterviewTiming {
        duration_secs: config.interview_duration_secs,
        ..InterviewTiming::default()
    };

    let state = AppState {
        sessions: SessionRegistry::new(),
        questions,
        feedback,
        timing,
        resumes: VersionStore::seeded(),
        tracker: TrackerBoard::seeded(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
