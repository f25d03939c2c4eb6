use super::{Direction, Maze, cell::Tile};

/// Raster view of a maze: `2w + 1` by `2h + 1` tiles, where every cell and every
/// wall between two cells gets its own tile.
pub struct Grid {
    pub data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Rasterizes the maze walls, then paints the goal, the exploration trail and its tip.
    /// The trail covers every cell of `path` and the passage between each consecutive pair.
    pub fn from_maze(maze: &Maze, path: &[usize]) -> Self {
        let mut grid = Grid::new(
            maze.width() as u16 * 2 + 1,
            maze.height() as u16 * 2 + 1,
            Tile::Wall,
        );

        for id in 0..maze.cell_count() {
            grid.set(Grid::cell_coord(maze, id), Tile::Open);
            for direction in [Direction::Right, Direction::Down] {
                if let Some(edge) = maze.edge(id, direction) {
                    grid.set(Grid::passage_coord(maze, id, edge.neighbor), Tile::Open);
                }
            }
        }

        grid.set(Grid::cell_coord(maze, maze.end_id()), Tile::Goal);

        if let Some((&tip, _)) = path.split_last() {
            for pair in path.windows(2) {
                grid.set(Grid::cell_coord(maze, pair[0]), Tile::Trail);
                grid.set(Grid::passage_coord(maze, pair[0], pair[1]), Tile::Trail);
            }
            grid.set(Grid::cell_coord(maze, tip), Tile::Tip);
        }
        grid
    }

    /// Raster coordinate of a cell.
    pub fn cell_coord(maze: &Maze, id: usize) -> (u16, u16) {
        let (x, y) = maze.coord(id);
        (x as u16 * 2 + 1, y as u16 * 2 + 1)
    }

    /// Raster coordinate of the wall or passage between two adjacent cells.
    pub fn passage_coord(maze: &Maze, from: usize, to: usize) -> (u16, u16) {
        let (ax, ay) = maze.coord(from);
        let (bx, by) = maze.coord(to);
        // Midpoint of (2a + 1) and (2b + 1)
        (ax as u16 + bx as u16 + 1, ay as u16 + by as u16 + 1)
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn set(&mut self, coord: (u16, u16), tile: Tile) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = tile;
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_follow_passages() {
        let mut maze = Maze::new(2, 2);
        maze.connect(0, Direction::Right, 1);
        maze.connect(0, Direction::Down, 1);
        maze.connect(1, Direction::Down, 1);
        let grid = Grid::from_maze(&maze, &[]);

        assert_eq!((grid.width(), grid.height()), (5, 5));
        // Passage between 0 and 1
        assert_eq!(grid[(2, 1)], Tile::Open);
        // Passage between 0 and 2
        assert_eq!(grid[(1, 2)], Tile::Open);
        // No passage between 2 and 3
        assert_eq!(grid[(2, 3)], Tile::Wall);
        // Corners and the border are always walls
        assert_eq!(grid[(2, 2)], Tile::Wall);
        assert!((0..5).all(|x| grid[(x, 0)] == Tile::Wall && grid[(x, 4)] == Tile::Wall));
        assert_eq!(grid[(3, 1)], Tile::Goal);
    }

    #[test]
    fn test_trail_and_tip() {
        let mut maze = Maze::new(2, 2);
        maze.connect(2, Direction::Up, 1);
        maze.connect(0, Direction::Right, 1);
        let grid = Grid::from_maze(&maze, &[2, 0, 1]);

        assert_eq!(grid[(1, 3)], Tile::Trail);
        assert_eq!(grid[(1, 2)], Tile::Trail);
        assert_eq!(grid[(1, 1)], Tile::Trail);
        assert_eq!(grid[(2, 1)], Tile::Trail);
        // The tip sits on the goal cell and hides it
        assert_eq!(grid[(3, 1)], Tile::Tip);
        // Cell 3 was never visited
        assert_eq!(grid[(3, 3)], Tile::Open);
    }
}
