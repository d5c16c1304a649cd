use anyhow::*;
use itertools::Itertools;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bank::CategoryId;
use crate::provider::ScoreRecorder;


#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub player: String,
    pub category_id: CategoryId,
    pub score: u32,
    pub time_taken_seconds: u32,
    pub correct_answers: u32,
}

pub struct ScoreBoard {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn open(path: &Path) -> Result<ScoreBoard> {
        let mut entries = Vec::new();
        if path.exists() {
            let file = File::open(path)?;
            let mut csv_reader = csv::Reader::from_reader(file);
            for entry in csv_reader.deserialize() {
                let entry: ScoreEntry = entry?;
                entries.push(entry);
            }
        }
        Ok(ScoreBoard {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn record(&mut self, entry: ScoreEntry) -> Result<()> {
        self.entries.push(entry);
        self.save()
    }

    /// Best entries first: score descending, ties broken by the faster run.
    pub fn top(&self, limit: usize) -> Vec<ScoreEntry> {
        self.entries
            .iter()
            .sorted_by_key(|e| (Reverse(e.score), e.time_taken_seconds))
            .take(limit)
            .cloned()
            .collect()
    }

    fn save(&self) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Could not write {:?}", self.path))?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}

pub type ScoresHandle = Arc<RwLock<ScoreBoard>>;

impl ScoreRecorder for RwLock<ScoreBoard> {
    fn record_score(&self, entry: &ScoreEntry) -> Result<()> {
        self.write().record(entry.clone())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>> {
        Ok(self.read().top(limit))
    }
}
