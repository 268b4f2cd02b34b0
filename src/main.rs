//! ROSHAMBO demo session
//!
//! Entry point. Loads configuration, initialises structured logging,
//! builds two players from the config, and plays the configured number
//! of refereed rounds before printing the scoreboard.

use anyhow::{Context, Result};
use std::rc::Rc;
use tracing::{info, warn};

use roshambo::collaborators::Salary;
use roshambo::config::{AppConfig, PlayerConfig};
use roshambo::engine::referee::Referee;
use roshambo::engine::scoreboard::Scoreboard;
use roshambo::player::random::SeededRandom;
use roshambo::player::Player;

const CONFIG_PATH: &str = "roshambo.toml";

fn main() -> Result<()> {
    let cfg = AppConfig::load_or_default(CONFIG_PATH)?;

    init_logging(&cfg);

    if cfg.players.len() > 2 {
        warn!(
            configured = cfg.players.len(),
            "Only the first two players take part in a session"
        );
    }

    let mut left = build_player(&cfg.players[0]);
    let mut right = build_player(&cfg.players[1]);
    let referee = Referee::new(cfg.session.stake);
    let mut scoreboard = Scoreboard::new();

    info!(
        left = %left.name(),
        right = %right.name(),
        rounds = cfg.session.rounds,
        stake = referee.stake(),
        "Session starting"
    );

    for _ in 0..cfg.session.rounds {
        for player in [&mut left, &mut right] {
            if player.has_money_source() {
                player.collect_earnings()?;
            }
        }
        let report = referee.play_round(&mut left, &mut right)?;
        scoreboard.record(&report);
    }

    info!(
        summary = %scoreboard,
        left_cash = left.cash,
        right_cash = right.cash,
        "Session complete"
    );

    let json = serde_json::to_string_pretty(&scoreboard).context("Failed to serialise scoreboard")?;
    println!("{json}");

    Ok(())
}

fn build_player(cfg: &PlayerConfig) -> Player {
    let player = if cfg.income > 0 {
        Player::with_money_source(Rc::new(Salary::new(cfg.income)))
    } else {
        Player::new()
    };
    let player = player.named(cfg.name.clone()).with_cash(cfg.starting_cash);

    match cfg.seed {
        Some(seed) => player.with_random_source(SeededRandom::new(seed)),
        None => player,
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    if cfg.logging.json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
