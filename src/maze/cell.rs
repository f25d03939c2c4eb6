use crossterm::style::{Color, Stylize};

use std::fmt;

/// One tile of the rendered maze raster.
/// Cells sit on odd raster coordinates, walls and passages between them.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    /// A wall segment, or a corner between walls.
    Wall,
    /// A cell or passage nobody has walked through.
    #[default]
    Open,
    /// A cell or passage on the exploration trail.
    Trail,
    /// The cell the explorer currently stands on.
    Tip,
    /// The goal cell.
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Trail => "░░".with(Color::Blue),
            Tile::Tip => "🟦".with(Color::DarkBlue),
            Tile::Goal => "🟧".with(Color::DarkYellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
