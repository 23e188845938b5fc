use std::time::Duration;

use crate::games::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpType {
    Food,
    Golden,
    SpeedBoost,
    Grow,
    DoublePoints,
    Invincibility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUpSpec {
    pub base_points: u32,
    pub grow_amount: u32,
    /// `None` for instant effects.
    pub duration: Option<Duration>,
}

const fn instant(base_points: u32, grow_amount: u32) -> PowerUpSpec {
    PowerUpSpec {
        base_points,
        grow_amount,
        duration: None,
    }
}

const fn timed(base_points: u32, grow_amount: u32, duration_ms: u64) -> PowerUpSpec {
    PowerUpSpec {
        base_points,
        grow_amount,
        duration: Some(Duration::from_millis(duration_ms)),
    }
}

impl PowerUpType {
    pub const ALL: [PowerUpType; 6] = [
        PowerUpType::Food,
        PowerUpType::Golden,
        PowerUpType::SpeedBoost,
        PowerUpType::Grow,
        PowerUpType::DoublePoints,
        PowerUpType::Invincibility,
    ];

    pub fn spec(&self) -> PowerUpSpec {
        match self {
            PowerUpType::Food => instant(100, 1),
            PowerUpType::Golden => instant(200, 1),
            PowerUpType::SpeedBoost => timed(50, 1, 5000),
            PowerUpType::Grow => instant(150, 3),
            PowerUpType::DoublePoints => timed(75, 1, 8000),
            PowerUpType::Invincibility => timed(100, 1, 6000),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.spec().duration.is_some()
    }
}

/// Score-gated thresholds, checked in order against a single roll.
/// The bands overlap on purpose; the first match wins.
const SELECTION_TABLE: [(u32, f64, PowerUpType); 5] = [
    (600, 0.40, PowerUpType::Invincibility),
    (400, 0.35, PowerUpType::DoublePoints),
    (300, 0.30, PowerUpType::Grow),
    (200, 0.25, PowerUpType::SpeedBoost),
    (500, 0.15, PowerUpType::Golden),
];

pub fn select_power_up(score: u32, rng: &mut impl RandomSource) -> PowerUpType {
    let roll = rng.next_unit();
    select_power_up_for_roll(score, roll)
}

pub fn select_power_up_for_roll(score: u32, roll: f64) -> PowerUpType {
    SELECTION_TABLE
        .iter()
        .find(|(min_score, max_roll, _)| score > *min_score && roll < *max_roll)
        .map(|(_, _, power_up)| *power_up)
        .unwrap_or(PowerUpType::Food)
}
