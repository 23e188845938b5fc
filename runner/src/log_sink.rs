use common::games::SnapshotSink;
use common::games::snake::{GameOverSummary, GameState, Snapshot};
use common::log;

#[derive(Clone)]
pub struct LogSink {
    verbose: bool,
}

impl LogSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl SnapshotSink for LogSink {
    async fn publish(&self, snapshot: Snapshot) {
        let Some(round) = snapshot.round.as_ref() else {
            log!(
                "Menu: {} / {:?}. Type 'start' to play",
                snapshot.difficulty,
                snapshot.wall_collision_mode
            );
            return;
        };

        if !self.verbose && snapshot.state == GameState::Playing {
            return;
        }

        let mut effects = Vec::new();
        if round.effects.speed_boost.is_some() {
            effects.push("SPEED");
        }
        if round.effects.double_points.is_some() {
            effects.push("2x");
        }
        if round.effects.invincibility.is_some() {
            effects.push("SHIELD");
        }

        let head = round.body[0];
        log!(
            "{:?} tick {} score {} head ({}, {}) length {} food {:?} at ({}, {}) {}",
            snapshot.state,
            round.tick,
            round.score,
            head.x,
            head.y,
            round.body.len(),
            round.food.power_up,
            round.food.position.x,
            round.food.position.y,
            effects.join(" ")
        );
    }

    async fn game_over(&self, summary: GameOverSummary) {
        log!(
            "GAME OVER ({:?}): {} scored {} on {}. High score: {}. Type 'restart' or 'menu'",
            summary.reason,
            summary.player_name,
            summary.score,
            summary.difficulty,
            summary.high_score
        );
    }
}
