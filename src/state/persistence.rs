use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// When an achievement was first unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub unlocked_at: DateTime<Utc>,
}

/// Progress that outlives a single game session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default)]
    pub unlocked_recipe_ids: BTreeSet<String>,

    /// Keyed by achievement id. Unknown ids are kept as-is.
    #[serde(default, rename = "gameAchievements")]
    pub achievements: BTreeMap<String, AchievementRecord>,
}

impl Progress {
    /// Union recipe ids into the unlocked set; returns the ids that were new.
    pub fn unlock_recipes<'a, I>(&mut self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter(|id| self.unlocked_recipe_ids.insert(id.to_string()))
            .map(str::to_string)
            .collect()
    }
}

/// Key-value collaborator that persists progress between sessions.
pub trait ProgressStore {
    fn load(&self) -> Result<Progress>;

    fn save(&mut self, progress: &Progress) -> Result<()>;
}

/// Load progress from a JSON file. A missing file is empty progress.
pub fn load_progress<P: AsRef<Path>>(path: P) -> Result<Progress> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Progress::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save progress to a JSON file.
pub fn save_progress<P: AsRef<Path>>(path: P, progress: &Progress) -> Result<()> {
    let json = serde_json::to_string_pretty(progress)?;
    fs::write(path, json)?;
    Ok(())
}

/// Progress stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the progress file if present.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Progress> {
        load_progress(&self.path)
    }

    fn save(&mut self, progress: &Progress) -> Result<()> {
        save_progress(&self.path, progress)
    }
}

/// Progress held in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    progress: Progress,
    saves: usize,
}

impl MemoryStore {
    pub fn new(progress: Progress) -> Self {
        Self { progress, saves: 0 }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Progress> {
        Ok(self.progress.clone())
    }

    fn save(&mut self, progress: &Progress) -> Result<()> {
        self.progress = progress.clone();
        self.saves += 1;
        Ok(())
    }
}
