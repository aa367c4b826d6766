use anyhow::{Context, Result};
use penta_core::Snapshot;
use penta_engine::{EngineConfig, Game};
use tracing::info;

/// Engine-vs-engine game with the default configuration.
///
/// An optional first argument gives a starting grid in row notation,
/// e.g. `******/******/*O*OO*/******/*XXX**/X*****`.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::default();
    let mut game = match std::env::args().nth(1) {
        Some(grid) => {
            let snapshot: Snapshot = grid.parse().context("invalid starting grid")?;
            Game::from_snapshot(config, &snapshot)?
        }
        None => Game::new(config)?,
    };
    info!(
        size = game.config().grid_size,
        depth = game.config().search_depth,
        ply = game.current_ply(),
        "penta starting"
    );

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }
        let reply = game.play_engine_move()?;
        info!(ply = reply.ply, mv = %reply.mv, score = reply.score, nodes = reply.nodes, "played");
    };

    let ply = game.current_ply();
    println!("{}", game.read_snapshot(ply)?.pretty());
    println!("{outcome} after {ply} plies");
    Ok(())
}
