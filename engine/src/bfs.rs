//! A game-agnostic shortest-path breadth-first search.
//!
//! Both solvers share this one routine: what differs between Pyramid and
//! TriPeaks is how their move generators and terminal tests are written,
//! and how the returned chain of states is turned into a game's move
//! labels. That labeling happens in each game's own module, not here.

use std::collections::VecDeque;
use std::hash::Hash;

use fxhash::FxHashMap;

/// Search breadth-first from `initial` for a state satisfying `is_terminal`,
/// following edges produced by `successors`. Returns the sequence of states
/// from `initial` to the terminal state (inclusive) if one is reachable,
/// or `None` if the reachable state space is exhausted without finding one.
///
/// Because every edge has unit cost, the returned path is of minimum length
/// among all paths from `initial` to any terminal state.
pub fn shortest_path<S, FS, FT>(initial: S, mut successors: FS, mut is_terminal: FT) -> Option<Vec<S>>
where
    S: Clone + Eq + Hash,
    FS: FnMut(&S) -> Vec<S>,
    FT: FnMut(&S) -> bool,
{
    if is_terminal(&initial) {
        return Some(vec![initial]);
    }

    let mut frontier = VecDeque::new();
    let mut predecessors: FxHashMap<S, S> = FxHashMap::default();
    frontier.push_back(initial.clone());

    while let Some(state) = frontier.pop_front() {
        for next in successors(&state) {
            if predecessors.contains_key(&next) {
                continue;
            }
            predecessors.insert(next.clone(), state.clone());
            if is_terminal(&next) {
                return Some(reconstruct(next, &predecessors, &initial));
            }
            frontier.push_back(next);
        }
    }
    None
}

fn reconstruct<S: Clone + Eq + Hash>(
    terminal: S,
    predecessors: &FxHashMap<S, S>,
    initial: &S,
) -> Vec<S> {
    let mut path = vec![terminal];
    while path.last().unwrap() != initial {
        let prev = predecessors
            .get(path.last().unwrap())
            .expect("every non-initial state on the path has a recorded predecessor")
            .clone();
        path.push(prev);
    }
    path.reverse();
    path
}
