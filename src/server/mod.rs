//! HTTP surface
//!
//! - `GET /health`
//! - `POST /get-score` with `{"url": "https://<host>/<owner>/<name>"}`
//!
//! The grader is built once at startup and shared through `web::Data`.
//! Grading is blocking, so it runs on actix's blocking pool.

mod error;

pub use error::ApiError;

use crate::pipeline::{Grader, ScoreResponse};
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub grader: Grader,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /health
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}

/// POST /get-score
///
/// Clone, summarise and evaluate one repository.
async fn get_score(
    state: web::Data<AppState>,
    body: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    let url = body.into_inner().url;
    let grader = state.grader.clone();

    // Reject bad input before occupying a blocking thread
    grader.locate(url.as_deref())?;

    let card = web::block(move || grader.grade(url.as_deref()))
        .await
        .map_err(|e| ApiError::Internal(format!("blocking task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(ScoreResponse::from(card)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/get-score", web::post().to(get_score));
}

/// Bind and serve until shutdown.
pub async fn run(host: &str, port: u16, grader: Grader) -> std::io::Result<()> {
    info!("Listening on http://{}:{} (forge: {})", host, port, grader.forge_host());
    let state = web::Data::new(AppState { grader });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::{Checkout, Locator, RepoSource};
    use crate::ai::Evaluator;
    use crate::error::GradeResult;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use std::sync::Arc;

    struct Canned(&'static str);

    impl Evaluator for Canned {
        fn evaluate(&self, _prompt: &str) -> GradeResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FixtureSource;

    impl RepoSource for FixtureSource {
        fn checkout(&self, _locator: &Locator) -> GradeResult<Checkout> {
            let dir = tempfile::tempdir()?;
            std::fs::write(dir.path().join("lib.rs"), "pub fn f() {}\n")?;
            Ok(Checkout::new(dir, true))
        }
    }

    fn state(reply: &'static str) -> web::Data<AppState> {
        web::Data::new(AppState {
            grader: Grader::new(Arc::new(Canned(reply)), Arc::new(FixtureSource), "forge.example"),
        })
    }

    const SIX: &str = r#"```json
{
  "scores": {
    "code_quality": {"score": 3, "reason": "messy"},
    "documentation": {"score": 10, "reason": "great README"},
    "configuration": {"score": 8, "reason": "has LICENSE"},
    "commit_hygiene": {"score": 6, "reason": "some 'update' commits"},
    "size_hygiene": {"score": 0, "reason": "huge"},
    "test_coverage": {"score": 10, "reason": "pytest everywhere"}
  },
  "advice": "Shrink the repository."
}
```"#;

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_missing_url_is_bad_request() {
        let app = test::init_service(App::new().app_data(state(SIX)).configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/get-score")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing URL parameter");
    }

    #[actix_web::test]
    async fn test_invalid_url_is_bad_request() {
        let app = test::init_service(App::new().app_data(state(SIX)).configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/get-score")
            .set_json(serde_json::json!({"url": "https://other.example/o/r"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_score_success() {
        let app = test::init_service(App::new().app_data(state(SIX)).configure(configure_routes)).await;
        for url in ["https://forge.example/owner/repo", "https://forge.example/owner/repo.git"] {
            let req = test::TestRequest::post()
                .uri("/get-score")
                .set_json(serde_json::json!({ "url": url }))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            let score = body["score"].as_f64().unwrap();
            assert!((score - 37.0 / 6.0).abs() < 1e-9);
            assert_eq!(body["detail"].as_object().unwrap().len(), 6);
            assert_eq!(body["detail"]["size_hygiene"]["score"], 0);
            assert_eq!(body["detail"]["documentation"]["reason"], "great README");
            assert_eq!(body["description"], "Shrink the repository.");
            assert!(!body["comment"].as_str().unwrap().is_empty());
        }
    }

    #[actix_web::test]
    async fn test_malformed_evaluation_is_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(state("Sorry, I can't help with that."))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/get-score")
            .set_json(serde_json::json!({"url": "https://forge.example/o/r"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }
}
