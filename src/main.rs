use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use codeflux_backend::config::Config;
use codeflux_backend::routes;
use codeflux_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the variables may come from the real environment
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("codeflux_backend=debug,tower_http=debug")),
        )
        .init();

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    // Load configuration - try multiple paths
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            continue;
        }
        let cfg = Config::load(path)?;
        info!("Loaded configuration from: {}", path);
        config = Some(cfg);
        break;
    }

    let mut config = config.unwrap_or_else(|| {
        warn!("No config file found (tried {:?}), using defaults", config_paths);
        Config::default()
    });

    config.llm_config.apply_env_fallback(|name| std::env::var(name).ok());
    config.validate()?;

    let app_state = AppState::new(config.clone())?;
    let app = routes::build_app(app_state);

    let host = config.system_config.host.as_str();
    let port = config.system_config.port;
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Backend running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
