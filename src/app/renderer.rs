use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    app::command::Mode,
    maze::{Grid, Maze, Tile},
    session::MazeSession,
};

/// Number of terminal rows reserved below the maze for the help and status lines
pub const NUM_LOG_ROWS: u16 = 2;

/// A one-line message shown below the maze
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub color: Color,
}

impl Status {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Status {
            text: text.into(),
            color,
        }
    }
}

/// Terminal size, in columns and rows, needed to show the raster of `maze` and the log rows.
pub fn required_size(maze: &Maze) -> (u16, u16) {
    (
        (maze.width() as u16 * 2 + 1) * Tile::CELL_WIDTH,
        maze.height() as u16 * 2 + 1 + NUM_LOG_ROWS,
    )
}

/// Checks whether `maze` can be drawn in a terminal of the given size.
pub fn fits(maze: &Maze, term_size: (u16, u16)) -> bool {
    let (columns, rows) = required_size(maze);
    columns <= term_size.0 && rows <= term_size.1
}

/// Clears the screen and draws the whole session: maze raster, help line and `status`.
/// If the terminal is too small for the maze, only a notice is drawn.
pub fn draw_all<W: Write>(
    out: &mut W,
    session: &MazeSession,
    mode: Mode,
    status: Option<&Status>,
) -> std::io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let term_size = terminal::size()?;
    if !fits(session.maze(), term_size) {
        let (columns, rows) = required_size(session.maze());
        let notice = format!(
            "Terminal too small for this maze: need {}x{}, have {}x{}. Resize, or press Esc to quit.",
            columns, rows, term_size.0, term_size.1
        );
        let (notice, _) = notice.unicode_truncate(term_size.0 as usize);
        queue!(
            out,
            style::PrintStyledContent(notice.with(Color::Red).attribute(Attribute::Bold))
        )?;
        return out.flush();
    }

    let grid = Grid::from_maze(session.maze(), session.path());
    for y in 0..grid.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        for x in 0..grid.width() {
            queue!(out, style::Print(grid[(x, y)]))?;
        }
    }

    draw_log_rows(out, grid.height(), term_size.0, mode, status)
}

/// Redraws only the tiles changed by the last step of the path: the previous cell and the
/// passage behind the explorer join the trail, and the explorer shows on its new cell.
pub fn draw_step<W: Write>(out: &mut W, session: &MazeSession) -> std::io::Result<()> {
    let maze = session.maze();
    let path = session.path();
    let [.., from, to] = path else {
        return Ok(());
    };
    for (coord, tile) in [
        (Grid::cell_coord(maze, *from), Tile::Trail),
        (Grid::passage_coord(maze, *from, *to), Tile::Trail),
        (Grid::cell_coord(maze, *to), Tile::Tip),
    ] {
        queue!(
            out,
            cursor::MoveTo(coord.0 * Tile::CELL_WIDTH, coord.1),
            style::Print(tile)
        )?;
    }
    out.flush()
}

/// Rewrites the help and status lines below a maze raster of `grid_height` rows.
pub fn draw_log_rows<W: Write>(
    out: &mut W,
    grid_height: u16,
    term_width: u16,
    mode: Mode,
    status: Option<&Status>,
) -> std::io::Result<()> {
    let help = match mode {
        Mode::Idle => "e/Enter: explore  n: new maze  d: dimensions  Esc/q: quit",
        Mode::Exploring => "←/→/↑/↓: move  e/Enter: stop  Esc: quit",
    };
    let (help, _) = help.unicode_truncate(term_width as usize);
    queue!(
        out,
        cursor::MoveTo(0, grid_height),
        terminal::Clear(ClearType::FromCursorDown),
        style::PrintStyledContent(help.with(Color::Cyan))
    )?;

    if let Some(status) = status {
        let (text, _) = status.text.unicode_truncate(term_width as usize);
        queue!(
            out,
            cursor::MoveTo(0, grid_height + 1),
            style::PrintStyledContent(text.with(status.color).attribute(Attribute::Bold))
        )?;
    }
    out.flush()
}
