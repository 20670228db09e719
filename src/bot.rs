// Bot orchestration
//
// Owns the single Arena instance, the configured move strategy and the boost
// gate, and exposes methods corresponding one-for-one to the HTTP endpoints.
// The arena sits behind an RwLock so a decision never observes a partially
// ingested snapshot when state pushes and move requests race.

use log::info;
use parking_lot::RwLock;
use rand::Rng;
use serde_json::{json, Value};

use crate::arena::Arena;
use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::search::{self, Decision, MoveStrategy};
use crate::types::Snapshot;

/// Decides whether to spend a boost on an otherwise-chosen move. The gate
/// only fires the flag; the Bot enforces the remaining-count check.
///
/// Injected so tests can replace the randomness with a constant.
pub trait BoostGate: Send + Sync {
    fn should_boost(&self) -> bool;
}

/// Production gate: fires with a fixed probability per decision.
pub struct ProbabilityGate {
    probability: f64,
}

impl ProbabilityGate {
    pub fn new(probability: f64) -> ProbabilityGate {
        ProbabilityGate { probability }
    }
}

impl BoostGate for ProbabilityGate {
    fn should_boost(&self) -> bool {
        rand::rng().random::<f64>() < self.probability
    }
}

/// Tron agent with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding
/// to API endpoints
pub struct Bot {
    config: Config,
    arena: RwLock<Arena>,
    strategy: Box<dyn MoveStrategy>,
    boost_gate: Box<dyn BoostGate>,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration, wiring the
    /// strategy and boost gate the configuration names.
    pub fn new(config: Config) -> Self {
        let strategy = search::strategy_from_config(&config);
        let boost_gate: Box<dyn BoostGate> = Box::new(ProbabilityGate::new(config.boost.probability));
        Self::with_parts(config, strategy, boost_gate)
    }

    /// Creates a Bot from explicit parts. Used by tests to inject a
    /// deterministic boost gate or an alternative strategy.
    pub fn with_parts(
        config: Config,
        strategy: Box<dyn MoveStrategy>,
        boost_gate: Box<dyn BoostGate>,
    ) -> Self {
        let arena = RwLock::new(Arena::new(config.arena.boundary_policy()));
        let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);

        Bot {
            config,
            arena,
            strategy,
            boost_gate,
            debug_logger,
        }
    }

    /// Returns bot identity for the competition roster
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "participant": self.config.bot.participant,
            "agent_name": self.config.bot.agent_name,
        })
    }

    /// Rebuilds the arena from an incoming snapshot
    /// Corresponds to POST /send-state endpoint
    pub fn ingest(&self, snapshot: &Snapshot) {
        let mut arena = self.arena.write();
        arena.ingest(snapshot);

        info!(
            "State ingested: {}x{} grid, {} walls, playing as agent {}",
            snapshot.width,
            snapshot.height,
            snapshot.walls.len(),
            snapshot.player_number
        );
    }

    /// Computes the next move from the latest ingested state
    /// Corresponds to GET /send-move endpoint
    pub fn choose_move(&self) -> Decision {
        let arena = self.arena.read();

        let direction = self.strategy.choose(&arena);
        let boost = arena.me().boosts > 0 && self.boost_gate.should_boost();

        info!(
            "Chose {}{}",
            direction.as_str(),
            if boost { " with boost" } else { "" }
        );
        self.debug_logger.log_decision(arena.me().head, direction, boost);

        Decision { direction, boost }
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self) {
        info!("GAME OVER");
    }
}
