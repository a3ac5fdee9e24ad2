pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers::handle_contact;
use crate::particles::handlers::handle_particle_options;
use crate::reveal::handlers::{handle_landing_plan, handle_reveal_plan};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Presentation
        .route("/api/v1/reveal", get(handle_reveal_plan))
        .route("/api/v1/reveal/landing", get(handle_landing_plan))
        .route("/api/v1/particles", get(handle_particle_options))
        // Contact
        .route("/api/v1/contact", post(handle_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::contact::relay::{FormRelay, RelayError};
    use crate::contact::validation::ValidContact;
    use crate::particles::{ParticleController, SlimEngine};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[derive(Default)]
    struct AcceptingRelay {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FormRelay for AcceptingRelay {
        async fn relay(&self, _contact: &ValidContact) -> Result<Value, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({"success": true}))
        }
    }

    fn test_state(relay: Arc<AcceptingRelay>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                form_relay_access_key: None,
                form_relay_timeout: None,
                compact_breakpoint_px: 768,
            },
            relay,
            particles: Arc::new(ParticleController::new(Arc::new(SlimEngine))),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_contact_validation_error_skips_relay() {
        let relay = Arc::new(AcceptingRelay::default());
        let app = build_router(test_state(relay.clone()));
        let response = app
            .oneshot(contact_request(
                json!({"name": "", "email": "a@b.com", "message": "hi"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["fields"][0]["field"], "name");
        assert_eq!(body["error"]["fields"].as_array().unwrap().len(), 1);
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_contact_success() {
        let relay = Arc::new(AcceptingRelay::default());
        let app = build_router(test_state(relay.clone()));
        let response = app
            .oneshot(contact_request(
                json!({"name": "Ana", "email": "ana@example.com", "message": "hi"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["outcome"], "success");
        assert_eq!(body["toast"]["tone"], "success");
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_particles_not_ready_then_ready() {
        let state = test_state(Arc::default());
        let particles = state.particles.clone();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/particles?width=400")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        assert!(particles.initialize_once().await);

        let response = app
            .oneshot(
                Request::get("/api/v1/particles?width=400")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["particles"]["number"]["value"], 40);
    }

    #[tokio::test]
    async fn test_reveal_plan_endpoint() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(
                Request::get("/api/v1/reveal?text=About%20Me&delay=0.3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["accessible_text"], "About Me");
        assert_eq!(body["decorative"], true);
        assert_eq!(body["units"][1]["content"], "Me");
    }

    #[tokio::test]
    async fn test_landing_plan_endpoint() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(
                Request::get("/api/v1/reveal/landing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["texts"][0]["id"], "hero-name");
        assert_eq!(body["expertise"].as_array().unwrap().len(), 4);
    }
}
