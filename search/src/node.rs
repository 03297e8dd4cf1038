//! Search tree nodes.
//!
//! A [`SearchNode`] is a state plus the bookkeeping needed to recover the path
//! that reached it. Nodes compare equal and hash identically whenever their
//! states do, regardless of parent, action, or cost: two paths to the same
//! state are the *same* node for every set and map in this crate. Graph-search
//! deduplication and frontier replacement both rely on this.
//!
//! Parent links are shared `Rc` handles pointing towards the root. Parents
//! never reference children, so there are no cycles.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug)]
pub struct SearchNode<S, A> {
    state: S,
    parent: Option<Rc<SearchNode<S, A>>>,
    action: Option<A>,
    path_cost: u64,
    depth: u32,
}

impl<S, A> SearchNode<S, A> {
    /// A root node: no parent, no action, zero cost.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }

    /// A child reached from `parent` by one unit-cost `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, state: S, action: A) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            path_cost: parent.path_cost + 1,
            depth: parent.depth + 1,
        }
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Cumulative cost from the root.
    #[must_use]
    pub fn path_cost(&self) -> u64 {
        self.path_cost
    }

    /// Number of actions between the root and this node.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<S, A: Clone> SearchNode<S, A> {
    /// Actions from the root to this node, in chronological order.
    #[must_use]
    pub fn path_to_actions(&self) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.depth as usize);
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent.as_deref();
        }
        actions.reverse();
        actions
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: Hash, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
