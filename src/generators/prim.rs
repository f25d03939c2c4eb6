use rand::Rng;

use crate::maze::{Direction, Maze};

/// Weight of every passage in a carved maze.
pub const PASSAGE_WEIGHT: u16 = 1;

/// Best known connection weight of a cell that no explored cell reaches yet.
const UNREACHED: u32 = u32::MAX;

/// Working arrays of Prim's algorithm, discarded once the tree is extracted.
struct SpanningTreeState {
    /// Cheapest known edge weight connecting each cell to the tree
    weight: Vec<u32>,
    /// Tree parent of each cell, `None` for the root and unreached cells
    parent: Vec<Option<usize>>,
    /// Whether a cell has been finalized in the tree
    explored: Vec<bool>,
}

impl SpanningTreeState {
    fn new(cell_count: usize, root: usize) -> Self {
        let mut weight = vec![UNREACHED; cell_count];
        weight[root] = 0;
        SpanningTreeState {
            weight,
            parent: vec![None; cell_count],
            explored: vec![false; cell_count],
        }
    }

    /// Unexplored cell with the smallest finite weight. Linear scan, lowest id wins ties.
    fn min_unexplored(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (id, &weight) in self.weight.iter().enumerate() {
            if self.explored[id] || weight == UNREACHED {
                continue;
            }
            match best {
                Some(current) if self.weight[current] <= weight => {}
                _ => best = Some(id),
            }
        }
        best
    }
}

/// Extracts a minimum spanning tree of a weighted grid graph, rooted at a random cell,
/// and returns it as a new maze whose passages are exactly the tree edges.
pub fn extract_spanning_tree<R: Rng + ?Sized>(graph: &Maze, rng: &mut R) -> Maze {
    let root = rng.random_range(0..graph.cell_count());
    extract_spanning_tree_from(graph, root)
}

/// Prim's algorithm from `root` over the edge slots of `graph`.
///
/// The result has the same dimensions as `graph`. Every cell other than `root` is
/// joined to its tree parent with a passage of weight [`PASSAGE_WEIGHT`], so a
/// connected graph yields `cell_count - 1` passages with no cycles.
///
/// # Panics
/// * If `root` is not a cell of `graph`
pub fn extract_spanning_tree_from(graph: &Maze, root: usize) -> Maze {
    let cell_count = graph.cell_count();
    let mut state = SpanningTreeState::new(cell_count, root);

    for _ in 0..cell_count {
        let Some(current) = state.min_unexplored() else {
            // Nothing reachable is left; only happens on a disconnected graph
            continue;
        };
        state.explored[current] = true;

        for edge in graph.slots(current).iter().flatten() {
            let weight = u32::from(edge.weight);
            if !state.explored[edge.neighbor] && weight < state.weight[edge.neighbor] {
                state.weight[edge.neighbor] = weight;
                state.parent[edge.neighbor] = Some(current);
            }
        }
    }

    let mut maze = Maze::new(graph.width(), graph.height());
    for (id, parent) in state.parent.iter().enumerate() {
        let Some(parent) = *parent else {
            continue;
        };
        // Look up the slot pointing at the parent instead of comparing id offsets,
        // which are ambiguous on a single-column grid (id + 1 == id + width)
        let direction = Direction::ALL.into_iter().find(|&direction| {
            graph
                .edge(id, direction)
                .is_some_and(|edge| edge.neighbor == parent)
        });
        if let Some(direction) = direction {
            maze.connect(id, direction, PASSAGE_WEIGHT);
        }
    }

    tracing::debug!(
        "[prim] Extracted spanning tree of {} passages from root {}",
        maze.edge_count(),
        root
    );
    maze
}
