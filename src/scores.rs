use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::warn;

pub const MAX_ENTRIES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    pub date: String,
}

impl ScoreEntry {
    /// Formats the entry as a `"<rank>) <score> - <date>"` line.
    pub fn to_line(&self, rank: usize) -> String {
        format!("{}) {} - {}", rank, self.score, self.date)
    }

    pub fn parse_line(line: &str) -> Option<Self> {
        let (head, date) = line.trim().split_once(" - ")?;
        let (_rank, score) = head.split_once(") ")?;
        let score = score.trim().parse().ok()?;
        let date = date.trim();

        if date.is_empty() {
            return None;
        }

        Some(ScoreEntry { score, date: date.to_string() })
    }
}

/// Top scores kept in a plain text file, best first.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored list. A missing file is an empty list; lines that
    /// don't parse are skipped.
    pub fn load(&self) -> Result<Vec<ScoreEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };

        let mut scores = vec![];
        for (n, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match ScoreEntry::parse_line(line) {
                Some(entry) => scores.push(entry),
                None => warn!("skipping malformed score line {}: {:?}", n + 1, line),
            }
        }

        sort_and_cap(&mut scores);
        Ok(scores)
    }

    /// Records `score` with today's date and returns the updated list.
    pub fn save(&self, score: u32) -> Result<Vec<ScoreEntry>> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        self.save_entry(ScoreEntry { score, date: today })
    }

    pub fn save_entry(&self, entry: ScoreEntry) -> Result<Vec<ScoreEntry>> {
        let mut scores = self.load()?;
        scores.push(entry);
        sort_and_cap(&mut scores);

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }

        let content: String = scores
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_line(i + 1) + "\n")
            .collect();

        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;

        Ok(scores)
    }
}

// Stable, so equal scores keep their earlier order.
fn sort_and_cap(scores: &mut Vec<ScoreEntry>) {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(MAX_ENTRIES);
}
