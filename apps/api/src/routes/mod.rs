pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::coach::handlers as coach;
use crate::interview::handlers as interview;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::tracker::handlers as tracker;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mock interview sessions
        .route("/api/v1/interviews", post(interview::handle_create_session))
        .route("/api/v1/interviews/:id", get(interview::handle_get_session))
        .route(
            "/api/v1/interviews/:id/answers",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/end",
            post(interview::handle_end_interview),
        )
        .route("/api/v1/interviews/:id/reset", post(interview::handle_reset))
        .route(
            "/api/v1/interviews/:id/restart",
            post(interview::handle_restart),
        )
        // Mock AI coach services
        .route("/api/v1/coach/cover-letter", post(coach::handle_cover_letter))
        .route(
            "/api/v1/coach/resume-review",
            post(coach::handle_resume_review),
        )
        .route("/api/v1/coach/roadmap", post(coach::handle_roadmap))
        // Resume versions
        .route("/api/v1/resumes", get(resumes::handle_list_versions))
        .route("/api/v1/resumes/diff", get(resumes::handle_diff_versions))
        .route(
            "/api/v1/resumes/:name",
            get(resumes::handle_get_version).put(resumes::handle_put_version),
        )
        .route(
            "/api/v1/resumes/:name/duplicate",
            post(resumes::handle_duplicate_version),
        )
        // Job-application tracker
        .route(
            "/api/v1/tracker/applications",
            get(tracker::handle_list_applications).post(tracker::handle_add_application),
        )
        .route(
            "/api/v1/tracker/applications/:id/status",
            patch(tracker::handle_status_change),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::interview::controller::InterviewTiming;
    use crate::interview::feedback::CannedFeedbackGenerator;
    use crate::interview::questions::QuestionSource;
    use crate::interview::registry::SessionRegistry;
    use crate::resumes::store::VersionStore;
    use crate::tracker::board::TrackerBoard;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            sessions: SessionRegistry::new(),
            questions: Arc::new(QuestionSource::default()),
            feedback: Arc::new(CannedFeedbackGenerator::default()),
            timing: InterviewTiming::default(),
            resumes: VersionStore::seeded(),
            tracker: TrackerBoard::seeded(),
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                interview_duration_secs: 300,
            },
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interview_lifecycle_over_http() {
        let app = build_router(test_state());

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/interviews")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let id = created["session_id"].as_str().unwrap().to_string();
        assert_eq!(created["phase"], "in_progress");
        assert_eq!(created["time_remaining"], 300);
        assert_eq!(created["transcript"].as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/interviews/{id}/answers"))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text": "Happy to introduce myself."}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let snap: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(snap["answer_pending"], true);
        assert_eq!(snap["transcript"].as_array().unwrap().len(), 2);

        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/interviews/{id}/end"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let snap: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(snap["phase"], "finished");
        assert_eq!(snap["feedback_pending"], true);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get(format!(
                    "/api/v1/interviews/{}",
                    uuid::Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cover_letter_requires_description() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::post("/api/v1/coach/cover-letter")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"jobDescription": "  ", "tone": "Formal"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_versions_listed() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/api/v1/resumes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let names: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(names.len(), 2);
    }
}
