// Area-control move search
//
// Scores each legal next move by comparing the territory reachable by us
// against the territory reachable by the opponent, both measured with
// flood-fill on private copies of the grid.

use log::{debug, warn};

use crate::arena::{Arena, Cell};
use crate::config::Config;
use crate::types::{Coord, Direction};

/// A chosen direction plus whether to spend a boost this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub boost: bool,
}

impl Decision {
    /// Wire encoding: the direction name, with `:BOOST` appended when the
    /// boost is spent.
    pub fn to_wire(&self) -> String {
        if self.boost {
            format!("{}:BOOST", self.direction.as_str())
        } else {
            self.direction.as_str().to_string()
        }
    }
}

/// Move choosers are interchangeable behind this trait: the flood-fill
/// heuristic below, or any external policy that honors the same contract
/// (read-only arena in, one of the four directions out, always).
pub trait MoveStrategy: Send + Sync {
    fn choose(&self, arena: &Arena) -> Direction;
}

/// Builds the strategy named by `[search] strategy` in the configuration.
/// Unknown names fall back to the area search.
pub fn strategy_from_config(config: &Config) -> Box<dyn MoveStrategy> {
    match config.search.strategy.as_str() {
        "area" => {}
        other => warn!("Unknown search strategy '{}', using area search", other),
    }
    Box::new(AreaSearch::new(config.search.continuation_bias))
}

/// Flood-fill territory heuristic: pick the direction that maximizes our
/// reachable area minus the opponent's, with a small bias toward continuing
/// straight to damp oscillation in tied positions.
pub struct AreaSearch {
    continuation_bias: f64,
}

impl AreaSearch {
    pub fn new(continuation_bias: f64) -> AreaSearch {
        AreaSearch { continuation_bias }
    }

    /// Scores one passable candidate head.
    ///
    /// The candidate is marked as our trail on a working copy before the
    /// flood-fill, so the count reflects the board after the move. The
    /// opponent's area is measured on a second copy with their head cleared,
    /// as if they had not yet moved. No opponent head means no area to
    /// subtract.
    fn evaluate(&self, arena: &Arena, candidate: Coord, direction: Direction) -> f64 {
        let mut after_move = arena.grid().clone();
        after_move.set(candidate, Cell::Trail(arena.me().id));
        let own_area = after_move.reachable_from(candidate, arena.boundary()) as f64;

        let mut opponent_area = 0.0;
        if let Some(their_head) = arena.opponent().head {
            let mut opponent_view = after_move.clone();
            opponent_view.set(their_head, Cell::Empty);
            opponent_area = opponent_view.reachable_from(their_head, arena.boundary()) as f64;
        }

        let continuation = if arena.me().heading == Some(direction) {
            self.continuation_bias
        } else {
            0.0
        };

        own_area - opponent_area + continuation
    }
}

impl MoveStrategy for AreaSearch {
    fn choose(&self, arena: &Arena) -> Direction {
        let head = match arena.me().head {
            Some(head) => head,
            // No trail yet: the one hardcoded, deterministic fallback.
            None => return Direction::Up,
        };

        let mut best: Option<(f64, Direction)> = None;
        let mut fallback: Option<Direction> = None;

        for direction in Direction::all().iter() {
            let candidate = match arena.grid().neighbor(head, *direction, arena.boundary()) {
                Some(candidate) => candidate,
                None => continue,
            };

            if fallback.is_none() {
                fallback = Some(*direction);
            }

            if !arena.is_passable(candidate.x, candidate.y) {
                continue;
            }

            let score = self.evaluate(arena, candidate, *direction);
            debug!("Candidate {}: score {:.1}", direction.as_str(), score);

            // Strict comparison keeps the first-seen direction on ties.
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, *direction)),
            }
        }

        match best {
            Some((_, direction)) => direction,
            // Every option is blocked; still return something predictable.
            None => fallback.unwrap_or(Direction::Up),
        }
    }
}
