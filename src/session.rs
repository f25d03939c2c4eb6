use rand::Rng;

use crate::generators::{generate_maze, generate_maze_with};
use crate::maze::{Direction, Maze};

/// Steps from the last cell of `path` in `direction`.
/// The neighbor is appended if a passage leads there; otherwise (a wall, or an empty
/// path) the path comes back unchanged.
pub fn advance(maze: &Maze, mut path: Vec<usize>, direction: Direction) -> Vec<usize> {
    if let Some(edge) = path.last().and_then(|&tip| maze.edge(tip, direction)) {
        path.push(edge.neighbor);
    }
    path
}

/// Checks whether the path ends on `end`.
pub fn is_complete(path: &[usize], end: usize) -> bool {
    path.last() == Some(&end)
}

/// A fresh path standing on `seed`.
pub fn reset(seed: usize) -> Vec<usize> {
    vec![seed]
}

/// A maze together with the trail explored through it.
#[derive(Debug, Clone)]
pub struct MazeSession {
    /// The maze being explored
    maze: Maze,
    /// Visited cells in order, never empty. The last one is where the explorer stands
    path: Vec<usize>,
    /// Goal cell
    end: usize,
}

impl MazeSession {
    /// Starts a session on `maze` with the explorer at the bottom-left cell.
    pub fn new(maze: Maze) -> Self {
        let path = reset(maze.start_id());
        let end = maze.end_id();
        MazeSession { maze, path, end }
    }

    /// Starts a session on a newly generated maze.
    pub fn generate(width: u8, height: u8, seed: Option<u64>) -> Self {
        MazeSession::new(generate_maze(width, height, seed))
    }

    /// Starts a session on a maze generated from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(width: u8, height: u8, rng: &mut R) -> Self {
        MazeSession::new(generate_maze_with(width, height, rng))
    }

    /// Replaces the whole session with a newly generated maze.
    /// The new maze is built completely before the old state is dropped.
    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, width: u8, height: u8, rng: &mut R) {
        let session = MazeSession::generate_with(width, height, rng);
        *self = session;
        tracing::info!("[session] Regenerated maze with size {}x{}", width, height);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Goal cell.
    pub fn end(&self) -> usize {
        self.end
    }

    /// First cell of the path.
    pub fn start(&self) -> usize {
        self.path[0]
    }

    /// Cell the explorer stands on.
    pub fn tip(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Attempts to move the explorer. Returns `true` if the path grew.
    pub fn move_tip(&mut self, direction: Direction) -> bool {
        let before = self.path.len();
        self.path = advance(&self.maze, std::mem::take(&mut self.path), direction);
        let moved = self.path.len() > before;
        if moved {
            tracing::debug!(
                "[session] Moved {} to cell {:?}",
                direction,
                self.maze.coord(self.tip())
            );
        }
        moved
    }

    /// Checks if the explorer stands on the goal.
    pub fn is_complete(&self) -> bool {
        is_complete(&self.path, self.end)
    }

    /// Drops the trail and puts the explorer back on the first cell.
    pub fn reset_path(&mut self) {
        self.path = reset(self.start());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// 2x2 maze: 0 - 1, with 0 | 2 and 1 | 3
    fn small_maze() -> Maze {
        let mut maze = Maze::new(2, 2);
        maze.connect(0, Direction::Right, 1);
        maze.connect(0, Direction::Down, 1);
        maze.connect(1, Direction::Down, 1);
        maze
    }

    #[test]
    fn test_advance_through_passage() {
        let maze = small_maze();
        assert_eq!(advance(&maze, vec![0], Direction::Right), vec![0, 1]);
    }

    #[test]
    fn test_advance_into_wall_is_noop() {
        let maze = small_maze();
        assert_eq!(advance(&maze, vec![0], Direction::Left), vec![0]);
        assert_eq!(advance(&maze, vec![0], Direction::Up), vec![0]);
        assert_eq!(advance(&maze, vec![2], Direction::Right), vec![2]);
    }

    #[test]
    fn test_advance_empty_path() {
        let maze = small_maze();
        assert!(advance(&maze, Vec::new(), Direction::Right).is_empty());
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&[0], 0));
        assert!(is_complete(&[2, 0, 1], 1));
        assert!(!is_complete(&[2, 0], 1));
        assert!(!is_complete(&[], 0));
    }

    #[test]
    fn test_reset() {
        assert_eq!(reset(6), vec![6]);
    }

    #[test]
    fn test_session_walk_to_goal() {
        let mut session = MazeSession::new(small_maze());
        assert_eq!(session.start(), 2);
        assert_eq!(session.end(), 1);
        assert!(!session.is_complete());

        assert!(!session.move_tip(Direction::Right));
        assert!(session.move_tip(Direction::Up));
        assert!(session.move_tip(Direction::Right));
        assert_eq!(session.path(), &[2, 0, 1]);
        assert_eq!(session.tip(), 1);
        assert!(session.is_complete());

        session.reset_path();
        assert_eq!(session.path(), &[2]);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_backtracking_keeps_trail() {
        let mut session = MazeSession::new(small_maze());
        session.move_tip(Direction::Up);
        session.move_tip(Direction::Down);
        assert_eq!(session.path(), &[2, 0, 2]);
    }

    #[test]
    fn test_single_cell_session_is_complete() {
        let session = MazeSession::generate(1, 1, Some(0));
        assert_eq!(session.path(), &[0]);
        assert!(session.is_complete());
    }

    #[test]
    fn test_regenerate_replaces_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = MazeSession::generate_with(5, 5, &mut rng);
        while session.path().len() < 3 {
            let moved = Direction::ALL
                .into_iter()
                .any(|direction| session.move_tip(direction));
            assert!(moved);
        }

        session.regenerate_with(7, 3, &mut rng);
        assert_eq!(session.maze().width(), 7);
        assert_eq!(session.maze().height(), 3);
        assert_eq!(session.path(), &[14]);
        assert_eq!(session.end(), 6);
        assert_eq!(session.maze().edge_count(), 20);
    }
}
