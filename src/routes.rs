use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))
        // Conversion pipeline
        .route("/api/convert", post(handlers::convert))
        .route("/api/languages", get(handlers::list_languages))
}

/// Full application with middleware, ready to serve
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm::{ChatMessage, ProviderError, StatelessLLMInterface};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    enum Reply {
        Text(&'static str),
        ApiError {
            status: u16,
            code: Option<&'static str>,
            message: Option<&'static str>,
        },
        Malformed,
    }

    struct FakeProvider {
        reply: Reply,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StatelessLLMInterface for FakeProvider {
        async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, ProviderError> {
            if let Some(user) = messages.iter().find(|m| m.role == "user") {
                self.prompts.lock().unwrap().push(user.content.clone());
            }
            match &self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::ApiError { status, code, message } => Err(ProviderError::Api {
                    status: *status,
                    code: code.map(str::to_string),
                    error_type: None,
                    message: message.map(str::to_string),
                }),
                Reply::Malformed => Err(ProviderError::MalformedResponse("no choices".to_string())),
            }
        }

        fn model(&self) -> &str {
            "fake"
        }
    }

    fn app_with(reply: Reply) -> (Router, Arc<FakeProvider>) {
        let provider = Arc::new(FakeProvider {
            reply,
            prompts: Mutex::new(Vec::new()),
        });
        let state = AppState::with_llm(Config::default(), provider.clone());
        (build_app(state), provider)
    }

    async fn post_convert(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/convert")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn success_returns_result_envelope() {
        let (app, provider) = app_with(Reply::Text("console.log(1);"));
        let prompt = "Convert the following Python code to JavaScript.\n\nprint(1)";
        let body = serde_json::json!({ "prompt": prompt }).to_string();

        let (status, json) = post_convert(app, &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "result": "console.log(1);" }));
        assert_eq!(*provider.prompts.lock().unwrap(), vec![prompt.to_string()]);
    }

    #[tokio::test]
    async fn quota_code_returns_429() {
        let (app, _) = app_with(Reply::ApiError {
            status: 429,
            code: Some("insufficient_quota"),
            message: None,
        });
        let (status, json) = post_convert(app, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json["error"], "API quota exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn quota_message_returns_429() {
        let (app, _) = app_with(Reply::ApiError {
            status: 400,
            code: None,
            message: Some("Monthly Quota reached"),
        });
        let (status, _) = post_convert(app, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn other_failures_return_500() {
        let (app, _) = app_with(Reply::ApiError {
            status: 401,
            code: Some("invalid_api_key"),
            message: Some("Invalid API Key"),
        });
        let (status, json) = post_convert(app, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Conversion failed");

        let (app, _) = app_with(Reply::Malformed);
        let (status, _) = post_convert(app, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unreadable_body_returns_500_without_calling_provider() {
        let (app, provider) = app_with(Reply::Text("unused"));
        let (status, json) = post_convert(app, r#"{"code":"print(1)"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Conversion failed");
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn languages_endpoint_lists_catalog() {
        let (app, _) = app_with(Reply::Text("unused"));
        let response = app
            .oneshot(Request::builder().uri("/api/languages").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let names: Vec<String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(names.len(), 25);
        assert_eq!(names[0], "Python");
        assert_eq!(names[24], "Visual Basic");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = app_with(Reply::Text("unused"));
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
