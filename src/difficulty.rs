//! Difficulty tiers and game identity shared by all three mini-games.

use serde::{Deserialize, Serialize};

/// Difficulty tier, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Junior,
    #[default]
    Standard,
    Pro,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Junior, Difficulty::Standard, Difficulty::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Junior => "junior",
            Difficulty::Standard => "standard",
            Difficulty::Pro => "pro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" => Some(Difficulty::Junior),
            "standard" | "std" => Some(Difficulty::Standard),
            "pro" => Some(Difficulty::Pro),
            _ => None,
        }
    }
}

/// Which mini-game a session or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameKey {
    #[default]
    Catch,
    Memory,
    Word,
}

impl GameKey {
    pub const ALL: [GameKey; 3] = [GameKey::Catch, GameKey::Memory, GameKey::Word];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKey::Catch => "catch",
            GameKey::Memory => "memory",
            GameKey::Word => "word",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "catch" => Some(GameKey::Catch),
            "memory" => Some(GameKey::Memory),
            "word" => Some(GameKey::Word),
            _ => None,
        }
    }

    /// Display title used by the driver's menu and result panel
    pub fn title(&self) -> &'static str {
        match self {
            GameKey::Catch => "Catch & Clean",
            GameKey::Memory => "Memory Express",
            GameKey::Word => "Secret Word",
        }
    }
}

/// The value handed to the host screen when a session ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub game: GameKey,
    pub difficulty: Difficulty,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("nope"), None);
    }

    #[test]
    fn test_game_key_round_trip() {
        for g in GameKey::ALL {
            assert_eq!(GameKey::from_str(g.as_str()), Some(g));
        }
    }

    #[test]
    fn test_score_record_serializes_without_empty_player() {
        let record = ScoreRecord {
            game: GameKey::Catch,
            difficulty: Difficulty::Pro,
            score: 420,
            player: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("player"));
        assert!(json.contains("\"catch\""));
    }
}
