use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::clock::Clock;
use crate::games::{RandomSource, SnapshotSink};
use crate::high_scores::HighScoreStore;
use crate::log;
use super::difficulty::Difficulty;
use super::game::{GameCommand, GameState, SnakeGame};
use super::game_state::TickEvent;
use super::types::DeathReason;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub player_name: String,
    pub score: u32,
    /// Best score on record before this round was added.
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub reason: DeathReason,
}

pub struct SnakeSessionState<R: RandomSource, H, C> {
    pub game: SnakeGame<R>,
    pub high_scores: H,
    pub clock: C,
    pub player_name: String,
}

impl<R, H, C> SnakeSessionState<R, H, C>
where
    R: RandomSource + Send,
    H: HighScoreStore,
    C: Clock,
{
    pub fn new(game: SnakeGame<R>, high_scores: H, clock: C, player_name: String) -> Self {
        Self {
            game,
            high_scores,
            clock,
            player_name,
        }
    }
}

enum LoopEvent {
    Tick,
    Command(Option<GameCommand>),
}

/// Tick timer that only exists while a round is being played.
#[derive(Default)]
struct TickTimer {
    current: Option<(Duration, Interval)>,
}

impl TickTimer {
    async fn next(&mut self) {
        match self.current.as_mut() {
            Some((_, interval)) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    fn stop(&mut self) {
        self.current = None;
    }

    /// Rebuilds the interval only when the period changes; the first firing is one period away.
    fn ensure(&mut self, period: Duration) {
        if let Some((current_period, _)) = &self.current
            && *current_period == period
        {
            return;
        }

        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.current = Some((period, interval));
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives ticks and commands on a single task until the command channel closes.
    pub async fn run<R, H, C>(
        mut state: SnakeSessionState<R, H, C>,
        mut commands: mpsc::UnboundedReceiver<GameCommand>,
        sink: impl SnapshotSink,
    ) -> SnakeSessionState<R, H, C>
    where
        R: RandomSource + Send,
        H: HighScoreStore,
        C: Clock,
    {
        let mut timer = TickTimer::default();
        let now = state.clock.now_ms();
        sink.publish(state.game.snapshot(now)).await;
        Self::sync_timer(&state.game, &mut timer, now, None);

        loop {
            let event = tokio::select! {
                _ = timer.next() => LoopEvent::Tick,
                command = commands.recv() => LoopEvent::Command(command),
            };

            let now = state.clock.now_ms();
            let mut next_period = None;

            match event {
                LoopEvent::Tick => {
                    let Some(report) = state.game.tick(now) else {
                        timer.stop();
                        continue;
                    };
                    next_period = Some(report.interval);
                    sink.publish(state.game.snapshot(now)).await;

                    if let TickEvent::Died(reason) = report.event {
                        Self::finish_round(&mut state, &sink, reason).await;
                    }
                }
                LoopEvent::Command(None) => break,
                LoopEvent::Command(Some(command)) => match state.game.handle_command(command) {
                    Ok(_) => sink.publish(state.game.snapshot(now)).await,
                    Err(e) => log!("{}", e),
                },
            }

            Self::sync_timer(&state.game, &mut timer, now, next_period);
        }

        log!("Command channel closed, session finished");
        state
    }

    fn sync_timer<R: RandomSource>(
        game: &SnakeGame<R>,
        timer: &mut TickTimer,
        now: u64,
        next_period: Option<Duration>,
    ) {
        if game.state() != GameState::Playing {
            timer.stop();
        } else if let Some(round) = game.round() {
            timer.ensure(next_period.unwrap_or_else(|| round.effective_interval(now)));
        }
    }

    async fn finish_round<R, H, C>(
        state: &mut SnakeSessionState<R, H, C>,
        sink: &impl SnapshotSink,
        reason: DeathReason,
    ) where
        R: RandomSource + Send,
        H: HighScoreStore,
        C: Clock,
    {
        let Some(round) = state.game.round() else {
            return;
        };
        let score = round.score;
        let difficulty = round.difficulty;
        let high_score = state.high_scores.high_score();

        state
            .high_scores
            .add_score(&state.player_name, score, difficulty);

        let summary = GameOverSummary {
            player_name: state.player_name.clone(),
            score,
            high_score,
            difficulty,
            reason,
        };
        log!(
            "Game over for {}: {} points ({:?}), best {}",
            summary.player_name,
            summary.score,
            summary.reason,
            summary.high_score
        );
        sink.game_over(summary).await;
    }
}
