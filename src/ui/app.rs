use crate::ai::Agent;
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    agent: Box<dyn Agent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &AppConfig, agent: Box<dyn Agent>) -> Self {
        let mut rng = StdRng::from_os_rng();
        let first = Self::coin_flip(&mut rng);
        App {
            game_state: GameState::with_first_player(config.board.rows, config.board.cols, first),
            agent,
            selected_column: config.board.cols / 2,
            should_quit: false,
            message: None,
            rng,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The computer moves synchronously; input waits until it is done.
            if !self.game_state.is_terminal() && self.game_state.current_player() == Player::Ai {
                self.computer_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn coin_flip(rng: &mut StdRng) -> Player {
        if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Ai
        }
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
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let board = self.game_state.board();
        let (rows, cols) = (board.rows(), board.cols());
        let first = Self::coin_flip(&mut self.rng);
        self.game_state = GameState::with_first_player(rows, cols, first);
        self.selected_column = cols / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop a human piece in the selected column
    fn human_move(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::Human {
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.report_outcome(),
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Let the agent take the computer's turn
    fn computer_move(&mut self) {
        let column = self.agent.select_action(&self.game_state);
        match self.game_state.apply_move_mut(column) {
            Ok(()) => self.report_outcome(),
            Err(_) => {
                self.message = Some(format!(
                    "{} chose an unplayable column {}",
                    self.agent.name(),
                    column + 1
                ));
            }
        }
    }

    fn report_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(Player::Human) => "You win!".to_string(),
                GameOutcome::Winner(Player::Ai) => "Computer wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.agent.name(),
        );
    }
}
