use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use verity_common::{Label, VerityError};

use crate::explain::explain_or_fallback;
use crate::AppState;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    explain: bool,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: Label,
    pub confidence: f64,
    pub confidence_percent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

pub async fn api_predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PredictRequest>,
) -> impl IntoResponse {
    let prediction = match state.predictor.predict(&body.text) {
        Ok(p) => p,
        Err(e @ VerityError::EmptyInput) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response();
        }
        Err(e) => {
            warn!(error = %e, "Classification failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Classification failed"})),
            )
                .into_response();
        }
    };

    info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        "Prediction served"
    );

    let explanation = match (&state.explainer, body.explain) {
        (Some(explainer), true) => {
            Some(explain_or_fallback(explainer.as_ref(), &body.text, prediction.label).await)
        }
        _ => None,
    };

    Json(PredictResponse {
        label: prediction.label,
        confidence: prediction.confidence,
        confidence_percent: prediction.confidence_percent(),
        explanation,
    })
    .into_response()
}
