//! Heuristic evaluation for the informed strategies.

use wriggle_kernel::carrier::coord::Coord;

use crate::contract::{GridWorld, SearchWorld};

/// Estimate of remaining cost from a state to the goal.
///
/// Implementations must be pure and return the same value for equal states.
pub trait Heuristic<W: SearchWorld + ?Sized> {
    fn estimate(&self, world: &W, state: &W::State) -> u64;
}

/// The built-in grid heuristics, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeuristicKind {
    /// Smaller rectilinear distance from either reference point to the goal.
    /// Admissible for unit-cost axis moves.
    #[default]
    ManhattanDistance,
    /// Blocked or occupied cells in the rectangle between the nearer
    /// reference point and the goal. Not admissible.
    ObstacleCount,
}

impl HeuristicKind {
    pub const ALL: [Self; 2] = [Self::ManhattanDistance, Self::ObstacleCount];

    /// Stable name used on the command line and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ManhattanDistance => "manhattan",
            Self::ObstacleCount => "obstacles",
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<W: GridWorld + ?Sized> Heuristic<W> for HeuristicKind {
    fn estimate(&self, world: &W, state: &W::State) -> u64 {
        let goal = world.goal_coord();
        let (first, second) = world.reference_points(state);
        match self {
            Self::ManhattanDistance => {
                u64::from(first.manhattan(goal).min(second.manhattan(goal)))
            }
            Self::ObstacleCount => {
                let nearer = if second.manhattan(goal) < first.manhattan(goal) {
                    second
                } else {
                    first
                };
                count_obstacles(world, state, nearer, goal)
            }
        }
    }
}

/// Count blocked or occupied cells in the inclusive rectangle spanned by
/// `from` and `goal`. The reference point itself is counted when occupied.
fn count_obstacles<W: GridWorld + ?Sized>(
    world: &W,
    state: &W::State,
    from: Coord,
    goal: Coord,
) -> u64 {
    let rows = from.row.min(goal.row)..=from.row.max(goal.row);
    let mut count = 0;
    for row in rows {
        for col in from.col.min(goal.col)..=from.col.max(goal.col) {
            let cell = Coord::new(row, col);
            if world.is_blocked(cell) || world.is_occupied(state, cell) {
                count += 1;
            }
        }
    }
    count
}
