pub mod command;
pub mod config;
pub mod renderer;

use std::io::{Stdout, Write};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    app::{
        command::{Command, Mode},
        config::{AppConfig, parse_dimension},
        renderer::Status,
    },
    generators::get_rng,
    maze::Tile,
    session::MazeSession,
};

pub struct App {
    config: AppConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop.
    /// Generates the first maze, then handles one terminal event at a time until the user quits.
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        stdout.execute(style::PrintStyledContent(
            "Maze Explorer\r\n"
                .with(Color::Yellow)
                .attribute(Attribute::Reverse),
        ))?;

        let (mut width, mut height) = match self.config.dimensions {
            Some(dims) => dims,
            None => match App::ask_maze_dimensions(stdout)? {
                Some(dims) => dims,
                None => return Ok(()),
            },
        };

        let mut rng = get_rng(self.config.seed);
        let mut session = MazeSession::generate_with(width, height, &mut rng);
        tracing::info!(
            "[app] Generated first maze with size {}x{} (seed {:?})",
            width,
            height,
            self.config.seed
        );

        let mut mode = Mode::Idle;
        let mut status = Some(Status::new(
            "Press e or Enter to explore from the bottom-left corner to the orange goal.",
            Color::Yellow,
        ));
        renderer::draw_all(stdout, &session, mode, status.as_ref())?;

        tracing::info!("Started main app loop");
        loop {
            let event = event::read()?;
            let Some(command) = Command::from_event(&event, mode) else {
                continue;
            };
            tracing::debug!("[app loop] {:?} in {:?} mode", command, mode);

            match command {
                Command::Quit => break,
                Command::Redraw => {}
                Command::ToggleExplore => match mode {
                    Mode::Idle => {
                        session.reset_path();
                        mode = Mode::Exploring;
                        status = Some(Status::new("Exploring...", Color::Blue));
                        if session.is_complete() {
                            // A 1x1 maze starts on its goal
                            mode = Mode::Idle;
                            status = Some(App::goal_status(&session));
                        }
                    }
                    Mode::Exploring => {
                        mode = Mode::Idle;
                        status = Some(Status::new("Exploration stopped.", Color::Yellow));
                    }
                },
                Command::Regenerate => {
                    session.regenerate_with(width, height, &mut rng);
                    status = None;
                }
                Command::ChangeDimensions => {
                    queue!(
                        stdout,
                        terminal::Clear(ClearType::All),
                        cursor::MoveTo(0, 0)
                    )?;
                    if let Some(dims) = App::ask_maze_dimensions(stdout)? {
                        (width, height) = dims;
                        session.regenerate_with(width, height, &mut rng);
                        status = None;
                    }
                }
                Command::Move(direction) => {
                    if !session.move_tip(direction) {
                        continue;
                    }
                    let term_size = terminal::size()?;
                    if !renderer::fits(session.maze(), term_size) {
                        // The too-small notice stays on screen, nothing to update
                        if session.is_complete() {
                            mode = Mode::Idle;
                            status = Some(App::goal_status(&session));
                        }
                        continue;
                    }
                    renderer::draw_step(stdout, &session)?;
                    if session.is_complete() {
                        tracing::info!(
                            "[app loop] Goal reached after {} steps",
                            session.path().len() - 1
                        );
                        mode = Mode::Idle;
                        status = Some(App::goal_status(&session));
                        renderer::draw_log_rows(
                            stdout,
                            session.maze().height() as u16 * 2 + 1,
                            term_size.0,
                            mode,
                            status.as_ref(),
                        )?;
                    }
                    continue;
                }
            }

            renderer::draw_all(stdout, &session, mode, status.as_ref())?;
        }
        tracing::info!("Exiting main app loop");

        Ok(())
    }

    fn goal_status(session: &MazeSession) -> Status {
        Status::new(
            format!(
                "Congratulations! You reached the goal in {} steps. Press e to explore again or n for a new maze.",
                session.path().len() - 1
            ),
            Color::Green,
        )
    }

    /// Get user input with real-time validation and feedback
    /// Returns None if user cancels input with Esc
    /// Returns Some(T) if user inputs a valid input and presses Enter, where T is the validated type
    fn prompt_with_validation<F, T>(
        stdout: &mut Stdout,
        prompt: &str,
        validate: F,
    ) -> std::io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        // Save cursor position so we can restore / redraw
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;
        stdout.flush()?;

        let mut input = String::new();

        let value = loop {
            // Re-render prompt line
            queue!(
                stdout,
                cursor::RestorePosition,
                terminal::Clear(ClearType::FromCursorDown)
            )?;

            stdout.queue(style::PrintStyledContent(
                prompt.with(Color::Cyan).attribute(Attribute::Bold),
            ))?;

            // Decide color based on validity
            let validation_result = validate(input.trim());
            match validation_result {
                Ok(_) => {
                    stdout.queue(style::SetForegroundColor(Color::Green))?;
                }
                Err(_) => {
                    stdout.queue(style::SetForegroundColor(Color::Red))?;
                }
            }

            queue!(stdout, style::Print(&input), style::ResetColor)?;

            stdout.queue(style::Print(" \r\n"))?;

            // Error message line (if any)
            if let Err(msg) = validation_result {
                stdout.queue(style::PrintStyledContent(
                    msg.with(Color::DarkGrey).attribute(Attribute::Dim),
                ))?;
            }

            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != event::KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Enter => match validate(input.trim()) {
                        Ok(value) => break Some(value),
                        Err(_) => continue,
                    },
                    KeyCode::Char(c) => {
                        if !c.is_whitespace() && !c.is_control() {
                            input.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Esc => {
                        break None;
                    }
                    _ => {}
                }
            }
        };
        // Cleanup
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
        )?;
        stdout.flush()?;

        Ok(value)
    }

    /// Largest maze dimension whose raster of `2n + 1` tiles fits in `term_size`
    /// terminal cells, where each tile takes `tile_size` cells. At least 1.
    fn get_max_maze_size(term_size: u16, tile_size: u16) -> u8 {
        let tiles = term_size / tile_size;
        (tiles.saturating_sub(1) / 2).clamp(1, u8::MAX as u16) as u8
    }

    /// Validates one dimension against the largest size the terminal can show.
    /// Empty input picks that largest size.
    fn validate_dimension(s: &str, max_size: u8) -> Result<u8, String> {
        if s.is_empty() {
            return Ok(max_size);
        }
        match parse_dimension(s) {
            Some(n) if n <= max_size => Ok(n),
            _ => Err(format!(
                "Please enter a valid number between 1 and {}.",
                max_size
            )),
        }
    }

    /// Ask user for maze dimensions (width and height between 1 and 255)
    /// Returns None if user cancels input with Esc
    /// Returns Some((width, height)) if user inputs valid dimensions
    fn ask_maze_dimensions(stdout: &mut Stdout) -> std::io::Result<Option<(u8, u8)>> {
        stdout.execute(style::PrintStyledContent(
            "Enter maze dimensions, or press Esc to cancel. \
Maximum acceptable values are based on current terminal size, leave empty to use them.\r\n"
                .with(Color::Blue),
        ))?;

        let max_size = |is_width: bool| match terminal::size() {
            Ok((term_width, term_height)) => {
                if is_width {
                    App::get_max_maze_size(term_width, Tile::CELL_WIDTH)
                } else {
                    // Reserve rows for the help and status lines
                    App::get_max_maze_size(term_height.saturating_sub(renderer::NUM_LOG_ROWS), 1)
                }
            }
            // Fallback to max size if terminal size cannot be determined
            Err(_) => u8::MAX,
        };

        let validate_width = |s: &str| App::validate_dimension(s, max_size(true));
        let validate_height = |s: &str| App::validate_dimension(s, max_size(false));

        let width = match App::prompt_with_validation(stdout, "Width: ", validate_width)? {
            Some(w) => w,
            None => return Ok(None),
        };
        stdout.execute(style::PrintStyledContent(
            format!("Width set to {}\r\n", width)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;

        let height = match App::prompt_with_validation(stdout, "Height: ", validate_height)? {
            Some(h) => h,
            None => return Ok(None),
        };
        stdout.execute(style::PrintStyledContent(
            format!("Height set to {}\r\n", height)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;

        tracing::info!("[app] Maze dimensions set to {}x{}", width, height);
        Ok(Some((width, height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn test_max_maze_size_fits_terminal() {
        // 80 columns hold 40 tiles, and 2 * 19 + 1 = 39 <= 40
        assert_eq!(App::get_max_maze_size(80, Tile::CELL_WIDTH), 19);
        assert_eq!(App::get_max_maze_size(22, 1), 10);
        // Tiny terminals still allow a single cell
        assert_eq!(App::get_max_maze_size(0, 1), 1);
        // Huge terminals are capped
        assert_eq!(App::get_max_maze_size(u16::MAX, 1), u8::MAX);

        let maze = Maze::new(19, 10);
        assert!(renderer::fits(&maze, (80, 22 + renderer::NUM_LOG_ROWS)));
    }

    #[test]
    fn test_validate_dimension() {
        assert_eq!(App::validate_dimension("", 30), Ok(30));
        assert_eq!(App::validate_dimension("12", 30), Ok(12));
        assert!(App::validate_dimension("31", 30).is_err());
        assert!(App::validate_dimension("0", 30).is_err());
        assert!(App::validate_dimension("ten", 30).is_err());
    }
}
