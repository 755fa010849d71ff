//! High score leaderboard system
//!
//! Persisted to LocalStorage, tracks the top 10 per game and difficulty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, GameKey};

/// Maximum number of high scores kept per table
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub player: String,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score tables, keyed by game/difficulty
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    tables: HashMap<String, Vec<HighScoreEntry>>,
}

fn table_key(game: GameKey, difficulty: Difficulty) -> String {
    format!("{}/{}", game.as_str(), difficulty.as_str())
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cyber_arcade_highscores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for one table, best first
    pub fn top(&self, game: GameKey, difficulty: Difficulty) -> &[HighScoreEntry] {
        self.tables
            .get(&table_key(game, difficulty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn top_score(&self, game: GameKey, difficulty: Difficulty) -> Option<u32> {
        self.top(game, difficulty).first().map(|e| e.score)
    }

    /// Check if a score would make its table
    pub fn qualifies(&self, game: GameKey, difficulty: Difficulty, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        let entries = self.top(game, difficulty);
        if entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score to its table (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(
        &mut self,
        game: GameKey,
        difficulty: Difficulty,
        score: u32,
        player: &str,
        timestamp: f64,
    ) -> Option<usize> {
        if !self.qualifies(game, difficulty, score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            player: player.to_string(),
            timestamp,
        };

        let entries = self.tables.entry(table_key(game, difficulty)).or_default();
        // Insertion point, sorted descending by score
        let pos = entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                entries.insert(i, entry);
                i + 1
            }
            None => {
                entries.push(entry);
                entries.len()
            }
        };

        entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high score tables", scores.tables.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_independent() {
        let mut scores = HighScores::new();
        scores.add_score(GameKey::Catch, Difficulty::Pro, 100, "ada", 0.0);
        scores.add_score(GameKey::Memory, Difficulty::Pro, 900, "bob", 0.0);

        assert_eq!(scores.top_score(GameKey::Catch, Difficulty::Pro), Some(100));
        assert_eq!(scores.top_score(GameKey::Memory, Difficulty::Pro), Some(900));
        assert!(scores.top(GameKey::Word, Difficulty::Pro).is_empty());
    }

    #[test]
    fn test_rank_and_ordering() {
        let mut scores = HighScores::new();
        assert_eq!(
            scores.add_score(GameKey::Catch, Difficulty::Standard, 50, "a", 0.0),
            Some(1)
        );
        assert_eq!(
            scores.add_score(GameKey::Catch, Difficulty::Standard, 80, "b", 0.0),
            Some(1)
        );
        assert_eq!(
            scores.add_score(GameKey::Catch, Difficulty::Standard, 60, "c", 0.0),
            Some(2)
        );
        let top = scores.top(GameKey::Catch, Difficulty::Standard);
        assert_eq!(
            top.iter().map(|e| e.score).collect::<Vec<_>>(),
            vec![80, 60, 50]
        );
    }

    #[test]
    fn test_zero_scores_never_qualify() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(GameKey::Catch, Difficulty::Junior, 0));
    }

    #[test]
    fn test_table_trims_to_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=15u32 {
            scores.add_score(GameKey::Word, Difficulty::Junior, i * 10, "p", 0.0);
        }
        let top = scores.top(GameKey::Word, Difficulty::Junior);
        assert_eq!(top.len(), MAX_HIGH_SCORES);
        assert_eq!(top.first().unwrap().score, 150);
        assert_eq!(top.last().unwrap().score, 60);
        // Worse than the floor: rejected
        assert_eq!(
            scores.add_score(GameKey::Word, Difficulty::Junior, 5, "p", 0.0),
            None
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut scores = HighScores::new();
        scores.add_score(GameKey::Catch, Difficulty::Pro, 321, "zoe", 1000.0);
        let json = serde_json::to_string(&scores).unwrap();
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.top_score(GameKey::Catch, Difficulty::Pro), Some(321));
        assert_eq!(back.top(GameKey::Catch, Difficulty::Pro)[0].player, "zoe");
    }
}
