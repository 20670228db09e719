// Wire types for the Tron game server protocol
//
// Coordinates travel as [x, y] arrays and trails are ordered oldest-first,
// so the last trail element is always that agent's current head.

use serde::{Deserialize, Serialize};

/// Arena dimensions used until the first snapshot says otherwise.
pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 18;

/// 2D cell coordinate. Serialized as a two-element `[x, y]` array to match
/// the game server payloads.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Coord {
        Coord { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> (i32, i32) {
        (coord.x, coord.y)
    }
}

/// Identifies one of the two competitors on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    One,
    Two,
}

impl AgentId {
    /// Maps the snapshot's `player_number` field to an agent id.
    /// Anything other than 2 is treated as agent one.
    pub fn from_player_number(player_number: u8) -> AgentId {
        if player_number == 2 {
            AgentId::Two
        } else {
            AgentId::One
        }
    }

    pub fn other(self) -> AgentId {
        match self {
            AgentId::One => AgentId::Two,
            AgentId::Two => AgentId::One,
        }
    }
}

/// The four possible movement directions.
///
/// The grid uses screen coordinates: y grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all directions in the fixed iteration order used for
    /// deterministic tie-breaking.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Converts direction to its wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Unit step vector for this direction.
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Recovers a direction from a step vector, or `None` if the vector is
    /// not a legal single step (e.g. a stale or non-adjacent trail).
    pub fn from_vector(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Calculates the next coordinate when moving in this direction.
    pub fn apply(&self, coord: &Coord) -> Coord {
        let (dx, dy) = self.vector();
        Coord {
            x: coord.x + dx,
            y: coord.y + dy,
        }
    }
}

/// Point-in-time arena description pushed by the game server.
///
/// Every field is optional on the wire; absent fields take defaults rather
/// than failing deserialization, since a partial payload must not take the
/// agent down mid-game.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Snapshot {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default)]
    pub walls: Vec<Coord>,
    #[serde(default)]
    pub agent1_trail: Vec<Coord>,
    #[serde(default)]
    pub agent2_trail: Vec<Coord>,
    #[serde(default)]
    pub agent1_boosts: u32,
    #[serde(default)]
    pub agent2_boosts: u32,
    #[serde(default = "default_player_number")]
    pub player_number: u8,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn default_player_number() -> u8 {
    1
}

impl Default for Snapshot {
    fn default() -> Snapshot {
        Snapshot {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            walls: Vec::new(),
            agent1_trail: Vec::new(),
            agent2_trail: Vec::new(),
            agent1_boosts: 0,
            agent2_boosts: 0,
            player_number: 1,
        }
    }
}

impl Snapshot {
    /// The visited-cell trail for the given agent, oldest first.
    pub fn trail(&self, agent: AgentId) -> &[Coord] {
        match agent {
            AgentId::One => &self.agent1_trail,
            AgentId::Two => &self.agent2_trail,
        }
    }

    /// Remaining boost count for the given agent.
    pub fn boosts(&self, agent: AgentId) -> u32 {
        match agent {
            AgentId::One => self.agent1_boosts,
            AgentId::Two => self.agent2_boosts,
        }
    }
}
