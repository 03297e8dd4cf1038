//! Search lock tests: frontier ordering, strategy optimality, depth-limited
//! semantics, and solution replay against the kernel.

use std::rc::Rc;

use lock_tests::{
    load, replay, CountingWorld, AT_GOAL, CORRIDOR, CROSSING, HOOK, ONE_MOVE, SOLVABLE, STUCK,
    WALLED_GOAL,
};
use wriggle_kernel::carrier::coord::Coord;
use wriggle_kernel::carrier::wriggler::WrigglerEnd;
use wriggle_kernel::operators::action::WriggleAction;
use wriggle_search::contract::SearchWorld;
use wriggle_search::frontier::{FifoFrontier, PriorityFrontier};
use wriggle_search::heuristic::HeuristicKind;
use wriggle_search::node::SearchNode;
use wriggle_search::search::{a_star_gs, bfts, depth_limited_search, grbefgs, id_dfts};

const MANHATTAN: HeuristicKind = HeuristicKind::ManhattanDistance;

// ---------------------------------------------------------------------------
// Frontiers
// ---------------------------------------------------------------------------

#[test]
fn priority_frontier_breaks_ties_by_insertion() {
    let mut frontier = PriorityFrontier::new();
    for (state, priority) in [("first", 3), ("one-a", 1), ("one-b", 1), ("two", 2)] {
        frontier.insert(Rc::new(SearchNode::<_, ()>::root(state)), priority);
    }
    let mut order = Vec::new();
    while let Some(node) = frontier.pop() {
        order.push(*node.state());
    }
    assert_eq!(order, vec!["one-a", "one-b", "two", "first"]);
}

#[test]
fn fifo_frontier_preserves_insertion_order() {
    let mut frontier = FifoFrontier::new();
    for state in [3, 1, 1, 2] {
        frontier.push(Rc::new(SearchNode::<_, ()>::root(state)));
    }
    let order: Vec<i32> = std::iter::from_fn(|| frontier.pop().map(|n| *n.state())).collect();
    assert_eq!(order, vec![3, 1, 1, 2]);
}

#[test]
fn replaced_entry_never_resurfaces() {
    let mut frontier = PriorityFrontier::new();
    let stale = Rc::new(SearchNode::<_, &str>::root("s"));
    frontier.insert(Rc::clone(&stale), 5);
    frontier.remove(&"s");
    let root = Rc::new(SearchNode::root("r"));
    let fresh = Rc::new(SearchNode::child(&root, "s", "via-r"));
    frontier.insert(Rc::clone(&fresh), 2);

    assert_eq!(frontier.len(), 1);
    let popped = frontier.pop().unwrap();
    assert!(Rc::ptr_eq(&popped, &fresh));
    assert!(frontier.pop().is_none());
}

// ---------------------------------------------------------------------------
// Strategies on puzzle fixtures
// ---------------------------------------------------------------------------

#[test]
fn bfts_finds_optimal_solutions() {
    for (name, text, optimal) in SOLVABLE {
        let (world, initial) = load(text);
        let result = bfts(&world, initial.clone()).unwrap();
        let solution = result.solution().unwrap_or_else(|| panic!("{name}: no solution"));
        assert_eq!(solution.len(), optimal, "{name}");
        assert_eq!(&replay(&initial, solution.actions()), solution.final_state(), "{name}");
        assert!(world.is_goal(solution.final_state()), "{name}");
    }
}

#[test]
fn a_star_with_manhattan_is_optimal() {
    for (name, text, optimal) in SOLVABLE {
        let (world, initial) = load(text);
        let result = a_star_gs(&world, initial.clone(), &MANHATTAN).unwrap();
        let solution = result.solution().unwrap_or_else(|| panic!("{name}: no solution"));
        assert_eq!(solution.len(), optimal, "{name}");
        assert_eq!(
            result.max_depth,
            u32::try_from(optimal.saturating_sub(1)).unwrap(),
            "{name}"
        );
        assert_eq!(&replay(&initial, solution.actions()), solution.final_state(), "{name}");
    }
}

#[test]
fn id_dfts_finds_shallowest_solutions() {
    for (name, text, optimal) in SOLVABLE {
        let (world, initial) = load(text);
        let result = id_dfts(&world, initial.clone(), Some(10)).unwrap();
        let solution = result.solution().unwrap_or_else(|| panic!("{name}: no solution"));
        assert_eq!(solution.len(), optimal, "{name}");
        assert!(world.is_goal(&replay(&initial, solution.actions())), "{name}");
    }
}

#[test]
fn greedy_search_reaches_a_goal_with_either_heuristic() {
    for heuristic in HeuristicKind::ALL {
        for (name, text, optimal) in SOLVABLE {
            let (world, initial) = load(text);
            let result = grbefgs(&world, initial.clone(), &heuristic).unwrap();
            let solution = result.solution().unwrap_or_else(|| panic!("{name}: no solution"));
            assert!(solution.len() >= optimal, "{name} {heuristic}");
            assert!(world.is_goal(&replay(&initial, solution.actions())), "{name} {heuristic}");
        }
    }
}

#[test]
fn a_star_generates_fewer_nodes_than_bfts() {
    for text in [CORRIDOR, CROSSING, HOOK] {
        let (world, initial) = load(text);
        let counting = CountingWorld::new(world.clone());
        bfts(&counting, initial.clone()).unwrap();
        let astar = a_star_gs(&world, initial, &MANHATTAN).unwrap();
        assert!(
            astar.expanded_nodes < counting.generated(),
            "A* {} vs BFTS {}",
            astar.expanded_nodes,
            counting.generated()
        );
    }
}

#[test]
fn corridor_generation_counts_are_exact() {
    let (world, initial) = load(CORRIDOR);
    let counting = CountingWorld::new(world.clone());
    bfts(&counting, initial.clone()).unwrap();
    assert_eq!(counting.generated(), 10);

    let astar = a_star_gs(&world, initial, &MANHATTAN).unwrap();
    assert_eq!(astar.expanded_nodes, 5);
    assert_eq!(astar.max_depth, 2);
}

#[test]
fn a_star_counter_matches_generated_children() {
    let (world, initial) = load(CROSSING);
    let counting = CountingWorld::new(world);
    let result = a_star_gs(&counting, initial, &MANHATTAN).unwrap();
    assert_eq!(result.expanded_nodes, counting.generated());
}

#[test]
fn depth_limited_search_cuts_off_then_solves() {
    let (world, initial) = load(CORRIDOR);
    assert!(depth_limited_search(&world, initial.clone(), 2)
        .unwrap()
        .is_cutoff());
    let solved = depth_limited_search(&world, initial, 3).unwrap();
    assert_eq!(solved.solution().unwrap().len(), 3);
}

#[test]
fn zero_action_solutions_at_goal() {
    let (world, initial) = load(AT_GOAL);
    for solution in [
        bfts(&world, initial.clone()).unwrap().into_solution(),
        id_dfts(&world, initial.clone(), None).unwrap().into_solution(),
        grbefgs(&world, initial.clone(), &MANHATTAN).unwrap().into_solution(),
        a_star_gs(&world, initial.clone(), &MANHATTAN).unwrap().outcome.into_solution(),
    ] {
        let solution = solution.unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.final_state(), &initial);
    }
}

#[test]
fn one_move_puzzle_solved_by_every_strategy() {
    let (world, initial) = load(ONE_MOVE);
    let expected = vec![WriggleAction::new(0, WrigglerEnd::Tail, Coord::new(0, 2))];

    let b = bfts(&world, initial.clone()).unwrap();
    assert_eq!(b.solution().unwrap().actions(), expected.as_slice());
    let i = id_dfts(&world, initial.clone(), None).unwrap();
    assert_eq!(i.solution().unwrap().actions(), expected.as_slice());
    let g = grbefgs(&world, initial.clone(), &MANHATTAN).unwrap();
    assert_eq!(g.solution().unwrap().actions(), expected.as_slice());
    let a = a_star_gs(&world, initial, &MANHATTAN).unwrap();
    assert_eq!(a.solution().unwrap().actions(), expected.as_slice());
    assert_eq!(a.max_depth, 0);
}

#[test]
fn stuck_puzzle_fails_everywhere() {
    let (world, initial) = load(STUCK);
    assert!(bfts(&world, initial.clone()).unwrap().is_failure());
    assert!(id_dfts(&world, initial.clone(), None).unwrap().is_failure());
    assert!(grbefgs(&world, initial.clone(), &MANHATTAN).unwrap().is_failure());
    let astar = a_star_gs(&world, initial, &MANHATTAN).unwrap();
    assert!(astar.is_failure());
    assert_eq!(astar.expanded_nodes, 0);
}

#[test]
fn unreachable_goal_with_cycles() {
    let (world, initial) = load(WALLED_GOAL);
    // Graph searches terminate on the two-state cycle.
    assert!(grbefgs(&world, initial.clone(), &MANHATTAN).unwrap().is_failure());
    let astar = a_star_gs(&world, initial.clone(), &MANHATTAN).unwrap();
    assert!(astar.is_failure());
    assert_eq!(astar.expanded_nodes, 2);
    // Tree search only terminates because of the bound.
    assert!(id_dfts(&world, initial, Some(4)).unwrap().is_cutoff());
}
