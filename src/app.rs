use crate::board::Board;
use crate::command::Command;
use crate::config::Palette;
use crate::consts;
use crate::game::{Direction, GameState};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Instant;

/// The presentation loop: reads key presses, advances the game once per
/// [`TICK_PERIOD`][consts::TICK_PERIOD], and draws the result
#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: GameState<R>,
    palette: Palette,
    /// The most recent direction key pressed since the last tick
    requested: Option<Direction>,
    /// Whether the restart key has been pressed since the last tick while
    /// the game was over
    restart_requested: bool,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(rng: R, palette: Palette) -> App<R> {
        App {
            game: GameState::new_with_rng(rng),
            palette,
            requested: None,
            restart_requested: false,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.tick();
            self.next_tick = None;
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        if std::mem::take(&mut self.restart_requested) && self.game.is_over() {
            log::info!("Starting a new game");
            self.game.reset();
            self.requested = None;
        } else {
            self.game.step(self.requested.take());
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let board = Board {
            snapshot: self.game.snapshot(),
            palette: &self.palette,
        };
        frame.render_widget(board, frame.area());
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Turn(d) => self.requested = Some(d),
            Command::Restart => {
                if self.game.is_over() {
                    self.restart_requested = true;
                }
            }
        }
    }
}
