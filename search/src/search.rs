//! Search strategies: BFTS, ID-DFTS, GrBeFGS, and A*GS.
//!
//! Each entry point owns its frontier and visited set for the duration of the
//! call. `Err` is returned only when the world violates its contract; running
//! out of nodes or hitting a depth limit is reported in the result value.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, PriorityFrontier};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::result::{AStarResult, DepthLimitedResult, GenericResult, Solution};

type NodeRc<W> = Rc<SearchNode<<W as SearchWorld>::State, <W as SearchWorld>::Action>>;

fn solution_from<S: Clone, A: Clone>(node: &SearchNode<S, A>) -> Solution<S, A> {
    Solution::new(node.state().clone(), node.path_to_actions())
}

/// Apply `action` to the state at `node` and wrap the successor as a child.
fn expand_child<W: SearchWorld>(
    world: &W,
    node: &NodeRc<W>,
    action: W::Action,
) -> Result<NodeRc<W>, SearchError> {
    let state = world
        .result(node.state(), &action)
        .map_err(|e| SearchError::WorldFailure {
            detail: format!("{}: {e} (action {action:?})", world.world_id()),
        })?;
    Ok(Rc::new(SearchNode::child(node, state, action)))
}

/// Breadth-first tree search.
///
/// No duplicate detection: a state reachable by several paths is expanded
/// once per path. The first goal popped has the fewest actions.
///
/// # Errors
///
/// Returns [`SearchError::WorldFailure`] if the world rejects one of its own
/// actions.
pub fn bfts<W: SearchWorld>(
    world: &W,
    initial_state: W::State,
) -> Result<GenericResult<W::State, W::Action>, SearchError> {
    info!(world = world.world_id(), strategy = "bfts", "search started");
    let mut frontier = FifoFrontier::new();
    frontier.push(Rc::new(SearchNode::root(initial_state)));
    let mut popped: u64 = 0;

    while let Some(node) = frontier.pop() {
        popped += 1;
        trace!(depth = node.depth(), "pop");
        if world.is_goal(node.state()) {
            info!(popped, high_water = frontier.high_water(), actions = node.depth(), "solved");
            return Ok(GenericResult::Solved(solution_from(&node)));
        }
        for action in world.actions(node.state()) {
            frontier.push(expand_child(world, &node, action)?);
        }
    }

    info!(popped, "frontier exhausted");
    Ok(GenericResult::Failure)
}

/// Depth-limited tree search from `initial_state`, exploring actions
/// left to right and returning the first solution found.
///
/// # Errors
///
/// Returns [`SearchError::WorldFailure`] if the world rejects one of its own
/// actions.
pub fn depth_limited_search<W: SearchWorld>(
    world: &W,
    initial_state: W::State,
    limit: u32,
) -> Result<DepthLimitedResult<W::State, W::Action>, SearchError> {
    let root = Rc::new(SearchNode::root(initial_state));
    recursive_dls(world, &root, limit)
}

fn recursive_dls<W: SearchWorld>(
    world: &W,
    node: &NodeRc<W>,
    limit: u32,
) -> Result<DepthLimitedResult<W::State, W::Action>, SearchError> {
    if world.is_goal(node.state()) {
        return Ok(DepthLimitedResult::Solved(solution_from(node)));
    }
    if limit == 0 {
        return Ok(DepthLimitedResult::Cutoff);
    }

    let mut cutoff_occurred = false;
    for action in world.actions(node.state()) {
        let child = expand_child(world, node, action)?;
        match recursive_dls(world, &child, limit - 1)? {
            DepthLimitedResult::Cutoff => cutoff_occurred = true,
            DepthLimitedResult::Failure => {}
            solved @ DepthLimitedResult::Solved(_) => return Ok(solved),
        }
    }

    Ok(if cutoff_occurred {
        DepthLimitedResult::Cutoff
    } else {
        DepthLimitedResult::Failure
    })
}

/// Iterative-deepening depth-first tree search.
///
/// Runs depth-limited search with limits 0, 1, 2, ... until a pass returns
/// something other than `Cutoff`. With `max_depth = None` the loop is
/// unbounded and will not terminate on an unsolvable world whose tree is
/// infinite. With `Some(bound)`, a pass at `bound` that still cuts off makes
/// the whole call return `Cutoff`.
///
/// Recursion depth equals the current limit; callers should validate the
/// bound through [`SearchPolicyV1::validate`](crate::policy::SearchPolicyV1::validate).
///
/// # Errors
///
/// Returns [`SearchError::WorldFailure`] if the world rejects one of its own
/// actions.
pub fn id_dfts<W: SearchWorld>(
    world: &W,
    initial_state: W::State,
    max_depth: Option<u32>,
) -> Result<DepthLimitedResult<W::State, W::Action>, SearchError> {
    info!(world = world.world_id(), strategy = "id-dfts", ?max_depth, "search started");
    let root = Rc::new(SearchNode::root(initial_state));
    let mut limit: u32 = 0;

    loop {
        debug!(limit, "depth-limited pass");
        let result = recursive_dls(world, &root, limit)?;
        if !result.is_cutoff() {
            info!(limit, solved = !result.is_failure(), "search finished");
            return Ok(result);
        }
        if max_depth.is_some_and(|bound| limit >= bound) {
            info!(limit, "depth bound reached");
            return Ok(DepthLimitedResult::Cutoff);
        }
        let Some(next) = limit.checked_add(1) else {
            return Ok(DepthLimitedResult::Cutoff);
        };
        limit = next;
    }
}

/// Greedy best-first graph search: priority is the heuristic estimate alone.
///
/// # Errors
///
/// Returns [`SearchError::WorldFailure`] if the world rejects one of its own
/// actions.
pub fn grbefgs<W, H>(
    world: &W,
    initial_state: W::State,
    heuristic: &H,
) -> Result<GenericResult<W::State, W::Action>, SearchError>
where
    W: SearchWorld,
    H: Heuristic<W>,
{
    info!(world = world.world_id(), strategy = "grbefgs", "search started");
    let (outcome, _generated) = best_first_graph_search(world, initial_state, |node| {
        heuristic.estimate(world, node.state())
    })?;
    Ok(outcome)
}

/// A* graph search: priority is heuristic estimate plus path cost.
///
/// Optimal when the heuristic is admissible. The result also carries the
/// number of generated children and the solution depth.
///
/// # Errors
///
/// Returns [`SearchError::WorldFailure`] if the world rejects one of its own
/// actions.
pub fn a_star_gs<W, H>(
    world: &W,
    initial_state: W::State,
    heuristic: &H,
) -> Result<AStarResult<W::State, W::Action>, SearchError>
where
    W: SearchWorld,
    H: Heuristic<W>,
{
    info!(world = world.world_id(), strategy = "astar", "search started");
    let (outcome, expanded_nodes) = best_first_graph_search(world, initial_state, |node| {
        heuristic.estimate(world, node.state()) + node.path_cost()
    })?;
    let max_depth = outcome.solution().map_or(0, |solution| {
        u32::try_from(solution.len().saturating_sub(1)).unwrap_or(u32::MAX)
    });
    Ok(AStarResult {
        outcome,
        expanded_nodes,
        max_depth,
    })
}

/// Shared control loop for GrBeFGS and A*GS. Returns the outcome and the
/// number of children generated.
fn best_first_graph_search<W, F>(
    world: &W,
    initial_state: W::State,
    priority_of: F,
) -> Result<(GenericResult<W::State, W::Action>, u64), SearchError>
where
    W: SearchWorld,
    F: Fn(&SearchNode<W::State, W::Action>) -> u64,
{
    let root = Rc::new(SearchNode::root(initial_state));
    let mut frontier = PriorityFrontier::new();
    frontier.insert(Rc::clone(&root), priority_of(&root));
    let mut visited: HashSet<NodeRc<W>> = HashSet::new();
    let mut generated: u64 = 0;
    let mut replacements: u64 = 0;

    while let Some(node) = frontier.pop() {
        trace!(depth = node.depth(), path_cost = node.path_cost(), "pop");
        visited.insert(Rc::clone(&node));
        if world.is_goal(node.state()) {
            info!(
                generated,
                visited = visited.len(),
                replacements,
                high_water = frontier.high_water(),
                actions = node.depth(),
                "solved"
            );
            return Ok((GenericResult::Solved(solution_from(&node)), generated));
        }

        for action in world.actions(node.state()) {
            let child = expand_child(world, &node, action)?;
            generated += 1;
            if visited.contains(&child) {
                continue;
            }
            let priority = priority_of(&child);
            if let Some(existing) = frontier.peek_priority(child.state()) {
                if existing <= priority {
                    continue;
                }
                debug!(existing, priority, "frontier entry replaced");
                frontier.remove(child.state());
                replacements += 1;
            }
            frontier.insert(child, priority);
        }
    }

    info!(generated, visited = visited.len(), "frontier exhausted");
    Ok((GenericResult::Failure, generated))
}
