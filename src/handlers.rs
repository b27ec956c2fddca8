use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::client::catalog::LanguageCatalog;
use crate::conversion::{ConversionError, ConversionErrorKind, ConvertRequest, ConvertResponse};
use crate::state::AppState;

/// POST /api/convert
///
/// Unreadable bodies get the generic failure envelope, like any other failure.
pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ConversionError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("convert", %request_id);

    async move {
        let Json(request) = payload.map_err(|rejection| {
            warn!("Rejected convert request body: {}", rejection);
            ConversionError::from_kind(ConversionErrorKind::UpstreamFailure)
        })?;

        info!("Forwarding prompt ({} chars)", request.prompt.len());
        let result = state.proxy.convert(&request.prompt).await?;

        Ok::<_, ConversionError>(Json(ConvertResponse {
            result: result.text,
        }))
    }
    .instrument(span)
    .await
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

pub async fn list_languages() -> Json<Vec<&'static str>> {
    Json(LanguageCatalog::builtin().entries().to_vec())
}
