//! Simple-path enumeration over index adjacency lists.
//!
//! [`SemanticGraph::find_paths`](super::SemanticGraph::find_paths) builds a directed and an
//! undirected adjacency (node index -> neighbor indices, insertion ordered) and runs
//! [`all_simple_paths`] on each.

/// Result of a connectivity query: simple paths following edge direction, and simple
/// paths over the undirected view. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    pub directed: Vec<Vec<String>>,
    pub undirected: Vec<Vec<String>>,
}

impl Connectivity {
    pub fn is_connected(&self) -> bool {
        !self.undirected.is_empty()
    }
}

/// Every simple path from `source` to `target`, depth-first, neighbors in list order.
///
/// Iterative so that long chains do not grow the call stack. `source == target` yields the
/// single trivial path.
pub(crate) fn all_simple_paths(
    adjacency: &[Vec<usize>],
    source: usize,
    target: usize,
) -> Vec<Vec<usize>> {
    if source == target {
        return vec![vec![source]];
    }

    let mut found = Vec::new();
    let mut on_path = vec![false; adjacency.len()];
    let mut path = vec![source];
    // cursors[d] = next neighbor index to try for path[d]
    let mut cursors = vec![0usize];
    on_path[source] = true;

    while let Some(&cursor) = cursors.last() {
        let depth = cursors.len() - 1;
        let node = path[depth];
        match adjacency[node].get(cursor) {
            Some(&next) => {
                cursors[depth] += 1;
                if next == target {
                    let mut complete = path.clone();
                    complete.push(target);
                    found.push(complete);
                } else if !on_path[next] {
                    on_path[next] = true;
                    path.push(next);
                    cursors.push(0);
                }
            }
            None => {
                cursors.pop();
                if let Some(done) = path.pop() {
                    on_path[done] = false;
                }
            }
        }
    }
    found
}
