pub mod cell;
mod direction;
pub mod grid;

pub use cell::Tile;
pub use direction::Direction;
pub use grid::Grid;

/// A passage from one cell to a neighboring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Id of the cell on the other side of the passage
    pub neighbor: usize,
    /// Random weight while the maze is a weighted grid graph, 1 once it is carved
    pub weight: u16,
}

/// The four directional edge slots of a cell, indexed by [`Direction::index`].
/// An empty slot is a wall on that side.
pub type EdgeSlots = [Option<Edge>; 4];

/// A rectangular grid of cells with 4-directional adjacency.
/// Cells are addressed by `id = y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[EdgeSlots]>,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates a maze of `width * height` cells with no passages at all.
    ///
    /// Panics if either width or height is 0.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width > 0 && height > 0,
            "Maze dimensions must be at least 1x1, got {}x{}",
            width,
            height
        );
        let cells = vec![[None::<Edge>; 4]; width as usize * height as usize].into_boxed_slice();
        Maze {
            cells,
            width,
            height,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Id of the bottom-left cell, where exploration starts.
    pub fn start_id(&self) -> usize {
        self.width as usize * (self.height as usize - 1)
    }

    /// Id of the top-right cell, the goal of exploration.
    pub fn end_id(&self) -> usize {
        self.width as usize - 1
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Converts a coordinate to a cell id.
    pub fn id(&self, coord: (u8, u8)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Converts a cell id to its `(x, y)` coordinate.
    pub fn coord(&self, id: usize) -> (u8, u8) {
        let width = self.width as usize;
        ((id % width) as u8, (id / width) as u8)
    }

    /// Id of the cell geometrically adjacent to `id` in `direction`, whether or not a
    /// passage leads there. `None` at the maze boundary.
    pub fn neighbor_id(&self, id: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.coord(id);
        let (nx, ny) = match direction {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x.checked_add(1)?, y),
        };
        self.is_in_bounds((nx, ny)).then(|| self.id((nx, ny)))
    }

    /// Returns the four edge slots of a cell.
    pub fn slots(&self, id: usize) -> &EdgeSlots {
        &self.cells[id]
    }

    /// Returns the edge leaving `id` in `direction`, if there is a passage.
    pub fn edge(&self, id: usize, direction: Direction) -> Option<Edge> {
        self.cells[id][direction.index()]
    }

    /// Checks if the side of the cell facing `direction` is a wall.
    pub fn has_wall(&self, id: usize, direction: Direction) -> bool {
        self.edge(id, direction).is_none()
    }

    /// Opens a passage between `id` and its neighbor in `direction`.
    /// Both cells receive the edge, on opposite slots, with the same weight.
    ///
    /// # Panics
    /// * If `id` has no neighbor in `direction` (it lies on that boundary)
    pub fn connect(&mut self, id: usize, direction: Direction, weight: u16) {
        let neighbor = match self.neighbor_id(id, direction) {
            Some(neighbor) => neighbor,
            None => panic!(
                "Cannot connect cell {} {}: it lies on the maze boundary",
                id, direction
            ),
        };
        self.cells[id][direction.index()] = Some(Edge { neighbor, weight });
        self.cells[neighbor][direction.opposite().index()] = Some(Edge {
            neighbor: id,
            weight,
        });
    }

    /// Iterates over every passage once, as `(cell, direction, edge)` with direction
    /// either [`Direction::Right`] or [`Direction::Down`].
    pub fn edges(&self) -> impl Iterator<Item = (usize, Direction, Edge)> + '_ {
        self.cells.iter().enumerate().flat_map(|(id, slots)| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter_map(move |direction| {
                    slots[direction.index()].map(|edge| (id, direction, edge))
                })
        })
    }

    /// Number of passages, each counted once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Ids of the cells reachable from `id` in one step.
    pub fn passable_neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[id].iter().flatten().map(|edge| edge.neighbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_round_trip() {
        let maze = Maze::new(5, 3);
        assert_eq!(maze.id((2, 1)), 7);
        assert_eq!(maze.coord(7), (2, 1));
        assert_eq!(maze.coord(14), (4, 2));
    }

    #[test]
    fn test_start_and_end() {
        let maze = Maze::new(5, 3);
        assert_eq!(maze.start_id(), 10);
        assert_eq!(maze.coord(maze.start_id()), (0, 2));
        assert_eq!(maze.end_id(), 4);
        assert_eq!(maze.coord(maze.end_id()), (4, 0));
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_neighbor_id_at_boundaries() {
        let maze = Maze::new(3, 3);
        assert_eq!(maze.neighbor_id(0, Direction::Up), None);
        assert_eq!(maze.neighbor_id(0, Direction::Left), None);
        assert_eq!(maze.neighbor_id(0, Direction::Right), Some(1));
        assert_eq!(maze.neighbor_id(0, Direction::Down), Some(3));
        // No wraparound from the end of a row to the start of the next
        assert_eq!(maze.neighbor_id(2, Direction::Right), None);
        assert_eq!(maze.neighbor_id(8, Direction::Down), None);
        assert_eq!(maze.neighbor_id(4, Direction::Up), Some(1));
    }

    #[test]
    fn test_connect_is_reciprocal() {
        let mut maze = Maze::new(3, 3);
        maze.connect(4, Direction::Left, 17);
        assert_eq!(
            maze.edge(4, Direction::Left),
            Some(Edge {
                neighbor: 3,
                weight: 17
            })
        );
        assert_eq!(
            maze.edge(3, Direction::Right),
            Some(Edge {
                neighbor: 4,
                weight: 17
            })
        );
        assert!(maze.has_wall(4, Direction::Up));
        assert_eq!(maze.edge_count(), 1);
        assert_eq!(maze.passable_neighbors(3).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    #[should_panic]
    fn test_connect_across_boundary_panics() {
        let mut maze = Maze::new(2, 2);
        maze.connect(1, Direction::Right, 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        Maze::new(0, 4);
    }
}
