use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game::crossword_generator::MIN_GRID_SIZE;
use crate::game::dga_generator::DEFAULT_CLUE_COUNT;
use crate::model::{Difficulty, VocabError};

const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratorSettings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default = "default_dga_clue_count")]
    pub dga_clue_count: usize,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub time_budget_ms: Option<u64>,

    #[serde(default = "default_crossword_min_grid")]
    pub crossword_min_grid: usize,
}

fn default_version() -> u32 {
    1
}
fn default_dga_clue_count() -> usize {
    DEFAULT_CLUE_COUNT
}
fn default_crossword_min_grid() -> usize {
    MIN_GRID_SIZE
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            version: CURRENT_VERSION,
            difficulty: Difficulty::default(),
            dga_clue_count: DEFAULT_CLUE_COUNT,
            seed: None,
            time_budget_ms: None,
            crossword_min_grid: MIN_GRID_SIZE,
        }
    }
}

impl GeneratorSettings {
    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or does not parse.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => settings,
            Err(e) => {
                debug!(target: "settings", "Using default settings ({}): {}", path.display(), e);
                GeneratorSettings::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, VocabError> {
        let contents = fs::read_to_string(path)?;
        let mut settings = serde_json::from_str::<GeneratorSettings>(&contents)?;
        settings.migrate();
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), VocabError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn migrate(&mut self) {
        if self.version < 2 {
            // version 1 files allowed a zero-sized grid floor
            self.crossword_min_grid = self.crossword_min_grid.max(MIN_GRID_SIZE);
            self.version = 2;
        }
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// The configured seed, overridden by a valid `SEED` environment variable.
    pub fn effective_seed(&self) -> Option<u64> {
        Self::seed_from_env().or(self.seed)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("SEED").ok()?;
        match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(target: "settings", "Ignoring unparseable SEED={:?}", value);
                None
            }
        }
    }
}
