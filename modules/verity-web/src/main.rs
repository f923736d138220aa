use std::sync::Arc;

use ai_client::OpenAi;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use verity_common::{Config, LinearTextModel, Predictor};
use verity_web::explain::OpenAiExplainer;
use verity_web::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("verity=info".parse()?))
        .init();

    let config = Config::from_env()?;

    let model = LinearTextModel::load(&config.model_path)
        .with_context(|| format!("loading classifier from {}", config.model_path.display()))?;

    let mut state = AppState::new(Predictor::new(Arc::new(model)));

    match config.openai_api_key {
        Some(ref key) => {
            let mut agent = OpenAi::new(key.clone(), config.openai_model.clone());
            if let Some(ref url) = config.openai_base_url {
                agent = agent.with_base_url(url.clone());
            }
            state = state.with_explainer(Arc::new(OpenAiExplainer::new(agent)));
            info!(model = %config.openai_model, "Explanations enabled");
        }
        None => info!("OPENAI_API_KEY not set, explanations disabled"),
    }

    let app = app(Arc::new(state));

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Verity web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
