// Arena occupancy model
//
// The arena is rebuilt from scratch on every snapshot and then read-only for
// the rest of the decision. Move search simulates hypothetical moves on
// private clones of the grid, never on the authoritative copy.

use std::collections::VecDeque;

use crate::types::{AgentId, Coord, Direction, Snapshot, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Occupancy tag for a single grid cell. Every cell holds exactly one tag;
/// `Wall` and `Trail` are permanent for the remainder of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Trail(AgentId),
}

/// Edge behavior for candidate moves and flood-fill traversal.
///
/// `Bounded` treats off-grid coordinates as illegal (the canonical variant);
/// `Wrapped` reduces them modulo the grid dimensions. One policy is active
/// per process, chosen from configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    Bounded,
    Wrapped,
}

/// Row-major occupancy grid.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Grid {
        let cell_count = (width.max(0) as usize) * (height.max(0) as usize);
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    /// Returns the cell tag, or `None` for out-of-range coordinates.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord.x, coord.y) {
            Some(self.cells[self.index(coord.x, coord.y)])
        } else {
            None
        }
    }

    /// Tags a cell. Out-of-range coordinates are silently skipped so that a
    /// malformed snapshot entry cannot crash the engine.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if self.in_bounds(coord.x, coord.y) {
            let idx = self.index(coord.x, coord.y);
            self.cells[idx] = cell;
        }
    }

    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// The cell one step in `direction` from `coord` under the given
    /// boundary policy. `None` when the step leaves a bounded grid.
    pub fn neighbor(
        &self,
        coord: Coord,
        direction: Direction,
        policy: BoundaryPolicy,
    ) -> Option<Coord> {
        let next = direction.apply(&coord);
        match policy {
            BoundaryPolicy::Bounded => {
                if self.in_bounds(next.x, next.y) {
                    Some(next)
                } else {
                    None
                }
            }
            BoundaryPolicy::Wrapped => {
                if self.width <= 0 || self.height <= 0 {
                    return None;
                }
                Some(Coord {
                    x: next.x.rem_euclid(self.width),
                    y: next.y.rem_euclid(self.height),
                })
            }
        }
    }

    /// Counts the cells reachable from `start` with breadth-first search
    /// over the 4-connected grid.
    ///
    /// The start cell always counts even when it is tagged occupied (the
    /// caller has typically just placed a hypothetical head there); every
    /// other visited cell must be `Empty`. Runs in O(width * height) with an
    /// explicit work queue.
    pub fn reachable_from(&self, start: Coord, policy: BoundaryPolicy) -> usize {
        if !self.in_bounds(start.x, start.y) {
            return 0;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        visited[self.index(start.x, start.y)] = true;
        queue.push_back(start);

        let mut reachable = 0;
        while let Some(coord) = queue.pop_front() {
            reachable += 1;

            for direction in Direction::all().iter() {
                let next = match self.neighbor(coord, *direction, policy) {
                    Some(next) => next,
                    None => continue,
                };

                let idx = self.index(next.x, next.y);
                if visited[idx] || self.cells[idx] != Cell::Empty {
                    continue;
                }

                visited[idx] = true;
                queue.push_back(next);
            }
        }

        reachable
    }
}

/// Positional facts for one competitor, derived from its trail.
#[derive(Debug, Clone)]
pub struct AgentState {
    pub id: AgentId,
    /// Last trail element, or `None` when no trail has been reported yet.
    pub head: Option<Coord>,
    /// Direction of the previous step, or `None` when only one trail cell
    /// is known.
    pub heading: Option<Direction>,
    pub boosts: u32,
}

impl AgentState {
    fn empty(id: AgentId) -> AgentState {
        AgentState {
            id,
            head: None,
            heading: None,
            boosts: 0,
        }
    }
}

/// Authoritative board state for one decision.
///
/// Construct once at startup, then `ingest` per turn. Mutation happens only
/// through `ingest`; everything else is a point query.
#[derive(Debug, Clone)]
pub struct Arena {
    grid: Grid,
    me: AgentState,
    them: AgentState,
    boundary: BoundaryPolicy,
}

impl Arena {
    pub fn new(boundary: BoundaryPolicy) -> Arena {
        Arena {
            grid: Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            me: AgentState::empty(AgentId::One),
            them: AgentState::empty(AgentId::Two),
            boundary,
        }
    }

    /// Rebuilds the occupancy grid and per-agent facts from a snapshot.
    ///
    /// A dimension change discards the old grid entirely (reset, not a
    /// resize). Out-of-range wall or trail entries are skipped. Never fails:
    /// a missing trail simply leaves that agent's head undefined.
    pub fn ingest(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.grid.width() || snapshot.height != self.grid.height() {
            self.grid = Grid::new(snapshot.width, snapshot.height);
        } else {
            self.grid.clear();
        }

        for wall in &snapshot.walls {
            self.grid.set(*wall, Cell::Wall);
        }

        for agent in [AgentId::One, AgentId::Two].iter() {
            for cell in snapshot.trail(*agent) {
                self.grid.set(*cell, Cell::Trail(*agent));
            }
        }

        let me = AgentId::from_player_number(snapshot.player_number);
        self.me = Self::agent_state(snapshot, me);
        self.them = Self::agent_state(snapshot, me.other());
    }

    fn agent_state(snapshot: &Snapshot, id: AgentId) -> AgentState {
        let trail = snapshot.trail(id);
        let head = trail.last().copied();

        let heading = match (head, trail.len().checked_sub(2).map(|i| trail[i])) {
            (Some(head), Some(prev)) => Direction::from_vector(head.x - prev.x, head.y - prev.y),
            _ => None,
        };

        AgentState {
            id,
            head,
            heading,
            boosts: snapshot.boosts(id),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn me(&self) -> &AgentState {
        &self.me
    }

    pub fn opponent(&self) -> &AgentState {
        &self.them
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// True iff `(x, y)` is in bounds and its cell is `Empty`.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.grid.is_empty_cell(Coord::new(x, y))
    }
}
