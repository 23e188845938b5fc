use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyPreset {
    pub tick_interval: Duration,
    pub obstacle_count: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn preset(&self) -> DifficultyPreset {
        let (tick_interval_ms, obstacle_count) = match self {
            Difficulty::Easy => (120, 0),
            Difficulty::Medium => (90, 3),
            Difficulty::Hard => (65, 6),
            Difficulty::Extreme => (45, 10),
        };
        DifficultyPreset {
            tick_interval: Duration::from_millis(tick_interval_ms),
            obstacle_count,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
