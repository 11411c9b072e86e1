//! Charsheet Player - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsheet_player::application::services::CharacterSheetService;
use charsheet_player::config::{
    config_warnings, load_dotenv_from_repo_root, PlayerConfig, DEFAULT_LOG_FILTER,
};
use charsheet_player::infrastructure::CharacterApiClient;
use charsheet_player::ports::outbound::CharacterApiPort;

fn main() {
    // Load environment from repo root (the binary is usually run from `crates/player`).
    load_dotenv_from_repo_root();

    let config = PlayerConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for warning in config_warnings(|key| std::env::var(key).ok()) {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting Charsheet Player"
    );

    // HTTP
    let api: Arc<dyn CharacterApiPort> = Arc::new(CharacterApiClient::from_config(&config));
    let character_sheet = CharacterSheetService::new(api);

    // Launch Dioxus
    let css = load_player_css();
    let head = format!("<style>{}</style>", css);
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(charsheet_player::presentation::Services::new(
            character_sheet,
        ))
        .launch(charsheet_player::ui::app);
}

fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/sheet.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
