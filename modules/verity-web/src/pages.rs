use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::{info, warn};

use verity_common::VerityError;

use crate::explain::explain_or_fallback;
use crate::templates::*;
use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    text: String,
    /// Checkbox; present (any value) when ticked
    explain: Option<String>,
}

pub async fn index_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(render_index(&IndexView {
        explain_enabled: state.explanations_enabled(),
        ..Default::default()
    }))
}

pub async fn analyze_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> impl IntoResponse {
    let wants_explanation = form.explain.is_some();
    let mut view = IndexView {
        explain_enabled: state.explanations_enabled(),
        explain_checked: wants_explanation,
        ..Default::default()
    };

    let prediction = match state.predictor.predict(&form.text) {
        Ok(p) => p,
        Err(VerityError::EmptyInput) => {
            view.warning = Some(EMPTY_INPUT_WARNING.to_string());
            view.text = form.text;
            return (StatusCode::OK, Html(render_index(&view)));
        }
        Err(e) => {
            warn!(error = %e, "Classification failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("The classifier could not process this text.")),
            );
        }
    };

    info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        "Prediction rendered"
    );

    let explanation = match (&state.explainer, wants_explanation) {
        (Some(explainer), true) => {
            Some(explain_or_fallback(explainer.as_ref(), &form.text, prediction.label).await)
        }
        _ => None,
    };

    view.result = Some(ResultView::from_prediction(&prediction, explanation));
    view.text = form.text;

    (StatusCode::OK, Html(render_index(&view)))
}
