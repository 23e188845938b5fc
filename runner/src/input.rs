use common::games::snake::{Difficulty, Direction, GameCommand, WallCollisionMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(GameCommand),
    Quit,
}

pub fn parse_line(line: &str) -> Option<Input> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "w" | "up" => GameCommand::Turn(Direction::Up),
        "s" | "down" => GameCommand::Turn(Direction::Down),
        "a" | "left" => GameCommand::Turn(Direction::Left),
        "d" | "right" => GameCommand::Turn(Direction::Right),
        "" | "start" => GameCommand::Start,
        "p" | "pause" => GameCommand::TogglePause,
        "r" | "restart" => GameCommand::Restart,
        "m" | "menu" => GameCommand::ReturnToMenu,
        "easy" => GameCommand::SelectDifficulty(Difficulty::Easy),
        "medium" => GameCommand::SelectDifficulty(Difficulty::Medium),
        "hard" => GameCommand::SelectDifficulty(Difficulty::Hard),
        "extreme" => GameCommand::SelectDifficulty(Difficulty::Extreme),
        "wrap" => GameCommand::SetWallMode(WallCollisionMode::WrapAround),
        "walls" => GameCommand::SetWallMode(WallCollisionMode::Death),
        _ => return None,
    };
    Some(Input::Command(command))
}
