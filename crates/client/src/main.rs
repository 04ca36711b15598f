//! SurveyFlow client - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surveyflow_client::infrastructure::SurveyApiClient;
use surveyflow_client::ports::SurveyApiPort;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surveyflow_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SurveyFlow client");

    // HTTP - both base URLs come from the environment
    let api: Arc<dyn SurveyApiPort> = Arc::new(SurveyApiClient::from_env());

    let head = format!("<style>{}</style>", include_str!("../assets/style.css"));
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(api)
        .launch(surveyflow_client::ui::app);
}
