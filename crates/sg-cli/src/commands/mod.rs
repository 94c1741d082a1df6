pub mod cases;
pub mod payload;
pub mod presets;
pub mod session;
pub mod solve;

use std::time::Duration;

use sg_core::preset;
use sg_session::GameSession;
use sg_solver::{SolverClient, SolverConfig};

/// A session, optionally seeded with a built-in game.
fn open_session(preset_id: Option<&str>) -> Result<GameSession, String> {
    let mut session = GameSession::new();
    if let Some(id) = preset_id {
        let game = preset::by_id(id).ok_or_else(|| format!("unknown preset: {id}"))?;
        session.load_preset(game);
    }
    Ok(session)
}

/// Environment config with command-line overrides on top.
fn solver_client(url: Option<&str>, timeout: Option<u64>) -> Result<SolverClient, String> {
    let mut config = SolverConfig::from_env();
    if let Some(url) = url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    SolverClient::new(config).map_err(|e| format!("failed to create solver client: {e}"))
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))
}
