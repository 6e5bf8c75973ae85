use crate::config::BoardConfig;
use crate::error::MoveError;
use crate::game::{Board, GameOutcome, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    board: Board,
    current_token: Token,
    outcome: GameOutcome,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &BoardConfig) -> Self {
        App {
            board: Board::new(config.num_columns, config.num_rows, config.win_length),
            current_token: Token::Black, // Black moves first
            outcome: GameOutcome::Ongoing,
            selected_column: config.num_columns / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.board.num_columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        if self.outcome != GameOutcome::Ongoing {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.board.drop_token(self.current_token, self.selected_column) {
            Ok(outcome) => {
                self.outcome = outcome;
                match outcome {
                    GameOutcome::Ongoing => {
                        self.current_token = self.current_token.other();
                    }
                    GameOutcome::Winner(token) => {
                        self.message = Some(format!("{} wins!", token.name()));
                    }
                    GameOutcome::Draw => {
                        self.message = Some("Draw.".to_string());
                    }
                }
            }
            Err(MoveError::ColumnFull(column)) => {
                // Same player tries again, as the original prompt loop did
                self.message =
                    Some(format!("Column {} is full - please choose another column.", column));
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Start a fresh game with the same dimensions
    fn restart(&mut self) {
        self.board = Board::new(
            self.board.num_columns(),
            self.board.num_rows(),
            self.board.win_length(),
        );
        self.current_token = Token::Black;
        self.outcome = GameOutcome::Ongoing;
        self.selected_column = self.board.num_columns() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            self.current_token,
            self.outcome,
            self.selected_column,
            &self.message,
        );
    }
}
