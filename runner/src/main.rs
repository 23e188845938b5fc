mod input;
mod log_sink;

use clap::{Parser, ValueEnum};
use common::clock::SystemClock;
use common::config::{ConfigManager, SnakeConfig, Validate};
use common::games::SessionRng;
use common::games::snake::{
    Difficulty, SnakeGame, SnakeSession, SnakeSessionSettings, SnakeSessionState,
    WallCollisionMode,
};
use common::high_scores::{FileHighScores, HighScoreStore, ScoreEntry};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use input::{Input, parse_line};
use log_sink::LogSink;

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

#[derive(Parser)]
#[command(name = "snake_runner")]
#[command(version, about = "Headless snake simulation driven by line commands on stdin")]
struct Args {
    /// Path to the YAML config (defaults to a file next to the executable)
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Wrap around the field edges instead of dying on them
    #[arg(long)]
    wrap: bool,

    #[arg(long)]
    player_name: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every tick, not only state changes
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Extreme => Difficulty::Extreme,
        }
    }
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

fn load_config(args: &Args) -> Result<SnakeConfig, String> {
    let path = args.config.clone().unwrap_or_else(get_config_path);
    let manager: ConfigManager<SnakeConfig> = ConfigManager::from_yaml_file(path);
    let mut config = manager.get_config()?;

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty.into();
    }
    if args.wrap {
        config.wall_collision_mode = WallCollisionMode::WrapAround;
    }
    if let Some(name) = &args.player_name {
        config.player_name = name.trim().to_string();
    }

    config.validate()?;
    Ok(config)
}

fn log_top_scores(scores: &[ScoreEntry]) {
    if scores.is_empty() {
        log!("No high scores yet");
        return;
    }
    for (rank, entry) in scores.iter().enumerate() {
        log!(
            "#{} {} - {} ({})",
            rank + 1,
            entry.player_name,
            entry.score,
            entry.difficulty
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let high_scores = FileHighScores::open(&config.high_score_file);
    log_top_scores(&high_scores.top_scores());

    let game = SnakeGame::new(SnakeSessionSettings::from(&config), SessionRng::from_random());
    let state = SnakeSessionState::new(game, high_scores, SystemClock, config.player_name.clone());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let session = tokio::spawn(SnakeSession::run(state, command_rx, LogSink::new(args.verbose)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Some(Input::Quit) => break,
            Some(Input::Command(command)) => {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            None => log!("Unknown input: {:?}", line),
        }
    }

    drop(command_tx);
    let state = session.await?;
    log_top_scores(&state.high_scores.top_scores());

    Ok(())
}
