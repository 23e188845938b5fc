use std::fmt;

use crate::games::RandomSource;
use crate::log;
use super::difficulty::Difficulty;
use super::game_state::{RoundState, TickEvent, TickReport};
use super::settings::SnakeSessionSettings;
use super::snapshot::{RoundSnapshot, Snapshot};
use super::types::{Direction, WallCollisionMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Pause,
    Resume,
    TogglePause,
    Restart,
    ReturnToMenu,
    Turn(Direction),
    SelectDifficulty(Difficulty),
    SetWallMode(WallCollisionMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRejected {
    pub state: GameState,
    pub command: GameCommand,
}

impl fmt::Display for CommandRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command {:?} is not accepted while {:?}", self.command, self.state)
    }
}

impl std::error::Error for CommandRejected {}

/// Owns the lifecycle state and, while one exists, the current round.
pub struct SnakeGame<R: RandomSource> {
    state: GameState,
    settings: SnakeSessionSettings,
    round: Option<RoundState>,
    rng: R,
}

impl<R: RandomSource> SnakeGame<R> {
    pub fn new(settings: SnakeSessionSettings, rng: R) -> Self {
        Self {
            state: GameState::Menu,
            settings,
            round: None,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn round_mut(&mut self) -> Option<&mut RoundState> {
        self.round.as_mut()
    }

    pub fn handle_command(&mut self, command: GameCommand) -> Result<GameState, CommandRejected> {
        let previous = self.state;

        match (self.state, command) {
            (GameState::Menu, GameCommand::Start)
            | (GameState::GameOver, GameCommand::Restart) => self.start_round(),
            (GameState::Playing, GameCommand::Pause | GameCommand::TogglePause) => {
                self.state = GameState::Paused;
            }
            (GameState::Paused, GameCommand::Resume | GameCommand::TogglePause) => {
                self.state = GameState::Playing;
            }
            (GameState::GameOver, GameCommand::ReturnToMenu) => {
                self.round = None;
                self.state = GameState::Menu;
            }
            (GameState::Playing, GameCommand::Turn(direction)) => {
                if let Some(round) = self.round.as_mut() {
                    round.set_direction(direction);
                }
            }
            (GameState::Menu, GameCommand::SelectDifficulty(difficulty)) => {
                self.settings.difficulty = difficulty;
            }
            (GameState::Menu, GameCommand::SetWallMode(mode)) => {
                self.settings.wall_collision_mode = mode;
            }
            (state, command) => return Err(CommandRejected { state, command }),
        }

        if previous != self.state {
            log!("Game state {:?} -> {:?}", previous, self.state);
        }

        Ok(self.state)
    }

    /// Runs one tick. Returns `None` unless a round is being played.
    pub fn tick(&mut self, now: u64) -> Option<TickReport> {
        if self.state != GameState::Playing {
            return None;
        }

        let round = self.round.as_mut()?;
        let report = round.update(now, &mut self.rng);

        if let TickEvent::Died(_) = report.event {
            self.state = GameState::GameOver;
            log!("Game state {:?} -> {:?}", GameState::Playing, self.state);
        }

        Some(report)
    }

    pub fn snapshot(&self, now: u64) -> Snapshot {
        Snapshot {
            state: self.state,
            field_size: self.settings.field_size,
            difficulty: self.settings.difficulty,
            wall_collision_mode: self.settings.wall_collision_mode,
            round: self
                .round
                .as_ref()
                .map(|round| RoundSnapshot::capture(round, now)),
        }
    }

    fn start_round(&mut self) {
        self.round = Some(RoundState::new(&self.settings, &mut self.rng));
        self.state = GameState::Playing;
    }
}
