//! Player preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, GameKey};

/// Player preferences carried across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display name shown on the leaderboard
    pub player_name: String,
    /// Pre-selected game on the menu
    pub last_game: GameKey,
    /// Pre-selected difficulty on the menu
    pub last_difficulty: Difficulty,
    /// Sound effects on/off
    pub sound: bool,
    /// Minimize shakes and flashes
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            last_game: GameKey::Catch,
            last_difficulty: Difficulty::Standard,
            sound: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cyber_arcade_settings";

    /// Leaderboard name, with a fallback for players who skipped the prompt
    pub fn display_name(&self) -> &str {
        if self.player_name.trim().is_empty() {
            "player"
        } else {
            self.player_name.trim()
        }
    }

    /// Remember the menu selection for next time
    pub fn remember_selection(&mut self, game: GameKey, difficulty: Difficulty) {
        self.last_game = game;
        self.last_difficulty = difficulty;
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
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
    fn test_display_name_falls_back() {
        let mut settings = Settings::default();
        assert_eq!(settings.display_name(), "player");
        settings.player_name = "  Nina  ".to_string();
        assert_eq!(settings.display_name(), "Nina");
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut settings = Settings::default();
        settings.remember_selection(GameKey::Word, Difficulty::Pro);
        settings.sound = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_game, GameKey::Word);
        assert_eq!(back.last_difficulty, Difficulty::Pro);
        assert!(!back.sound);
    }
}
