//! `legal_actions()` and `apply()`: move generation and move application.
//!
//! Both are pure: neither mutates the input state. `apply()` is fail-closed
//! and rejects any move `legal_actions()` would not have produced.

use crate::carrier::board::Board;
use crate::carrier::state::WriggleState;
use crate::carrier::wriggler::WrigglerEnd;
use crate::operators::action::WriggleAction;

/// Typed failure for move application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// The action names a wriggler the state does not have.
    UnknownWriggler { index: usize },
    /// The destination is not an empty cell.
    DestinationOccupied { detail: String },
    /// The destination is not adjacent to the moving end.
    NotAdjacent { detail: String },
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWriggler { index } => write!(f, "no wriggler with index {index}"),
            Self::DestinationOccupied { detail } => write!(f, "destination occupied: {detail}"),
            Self::NotAdjacent { detail } => write!(f, "destination not adjacent: {detail}"),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// Enumerate every legal move from `state`.
///
/// Order: wriggler index ascending; head before tail; destinations up, down,
/// left, right. Search tie-breaking depends on this order being stable.
#[must_use]
pub fn legal_actions(board: &Board, state: &WriggleState) -> Vec<WriggleAction> {
    let mut actions = Vec::new();
    for (index, wriggler) in state.wrigglers().iter().enumerate() {
        for end in [WrigglerEnd::Head, WrigglerEnd::Tail] {
            let from = wriggler.end(end);
            actions.extend(
                board
                    .neighbours(from)
                    .filter(|&to| state.is_empty_cell(to))
                    .map(|to| WriggleAction::new(index, end, to)),
            );
        }
    }
    actions
}

/// Apply `action` to `state`, producing the successor state.
///
/// # Errors
///
/// Returns [`ApplyFailure`] if the wriggler does not exist, the destination
/// is not empty, or the destination is not adjacent to the moving end.
pub fn apply(state: &WriggleState, action: &WriggleAction) -> Result<WriggleState, ApplyFailure> {
    let wriggler = state
        .wriggler(action.wriggler)
        .ok_or(ApplyFailure::UnknownWriggler {
            index: action.wriggler,
        })?;
    let from = wriggler.end(action.end);
    if !from.is_adjacent(action.to) {
        return Err(ApplyFailure::NotAdjacent {
            detail: format!("{from} -> {}", action.to),
        });
    }
    if !state.is_empty_cell(action.to) {
        return Err(ApplyFailure::DestinationOccupied {
            detail: format!("{}", action.to),
        });
    }

    let (moved, vacated) = wriggler.advanced(action.end, action.to);
    let (mut wrigglers, mut empty) = state.clone().into_parts();
    wrigglers[action.wriggler] = moved;
    empty.remove(&action.to);
    empty.insert(vacated);
    Ok(WriggleState::new(wrigglers, empty))
}
