use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::games::snake::Difficulty;
use crate::log;

pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

/// Persistence contract for finished rounds. Implementations swallow their own I/O failures.
pub trait HighScoreStore: Send + 'static {
    fn add_score(&mut self, player_name: &str, score: u32, difficulty: Difficulty);
    fn top_scores(&self) -> Vec<ScoreEntry>;
    fn high_score(&self) -> u32;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<ScoreEntry>,
}

impl HighScoreTable {
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn insert(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> u32 {
        self.entries.first().map(|entry| entry.score).unwrap_or(0)
    }
}

fn new_entry(player_name: &str, score: u32, difficulty: Difficulty) -> ScoreEntry {
    ScoreEntry {
        player_name: player_name.to_string(),
        score,
        difficulty,
        timestamp: Utc::now().timestamp_millis(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryHighScores {
    table: HighScoreTable,
}

impl InMemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryHighScores {
    fn add_score(&mut self, player_name: &str, score: u32, difficulty: Difficulty) {
        self.table.insert(new_entry(player_name, score, difficulty));
    }

    fn top_scores(&self) -> Vec<ScoreEntry> {
        self.table.entries().to_vec()
    }

    fn high_score(&self) -> u32 {
        self.table.best()
    }
}

/// YAML-backed table. An unreadable file starts an empty table.
pub struct FileHighScores<TProvider = FileContentConfigProvider>
where
    TProvider: ConfigContentProvider,
{
    provider: TProvider,
    serializer: YamlConfigSerializer,
    table: HighScoreTable,
}

impl FileHighScores {
    pub fn open(file_path: &str) -> Self {
        Self::with_provider(FileContentConfigProvider::new(file_path))
    }
}

impl<TProvider: ConfigContentProvider> FileHighScores<TProvider> {
    pub fn with_provider(provider: TProvider) -> Self {
        let serializer = YamlConfigSerializer::new();
        let table = match load_entries(&provider, &serializer) {
            Ok(entries) => HighScoreTable::from_entries(entries),
            Err(e) => {
                log!("Failed to load high scores, starting empty: {}", e);
                HighScoreTable::default()
            }
        };

        Self {
            provider,
            serializer,
            table,
        }
    }

    fn save(&self) -> Result<(), String> {
        let content = self.serializer.serialize(&self.table.entries().to_vec())?;
        self.provider.set_config_content(&content)
    }
}

fn load_entries(
    provider: &impl ConfigContentProvider,
    serializer: &YamlConfigSerializer,
) -> Result<Vec<ScoreEntry>, String> {
    match provider.get_config_content()? {
        Some(content) => serializer.deserialize(&content),
        None => Ok(Vec::new()),
    }
}

impl<TProvider: ConfigContentProvider> HighScoreStore for FileHighScores<TProvider> {
    fn add_score(&mut self, player_name: &str, score: u32, difficulty: Difficulty) {
        self.table.insert(new_entry(player_name, score, difficulty));
        if let Err(e) = self.save() {
            log!("Failed to save high scores: {}", e);
        }
    }

    fn top_scores(&self) -> Vec<ScoreEntry> {
        self.table.entries().to_vec()
    }

    fn high_score(&self) -> u32 {
        self.table.best()
    }
}
