//! Difficulty tuning for the word game.

use crate::difficulty::Difficulty;

#[derive(Debug, Clone, Copy)]
pub struct WordConfig {
    /// Session length (seconds)
    pub duration_secs: f32,
    /// Flat points per solved word
    pub base_score: u32,
    /// Extra points per letter of the answer
    pub letter_bonus: u32,
    /// Bonus for solving within 5s (halved under 10s, zero after)
    pub speed_bonus: u32,
    /// Points lost on a wrong submission
    pub wrong_penalty: u32,
    /// Points lost for taking the hint
    pub hint_penalty: u32,
    /// Bonus for a hint-free, mistake-free solve
    pub perfect_bonus: u32,
    /// Decoy letters mixed into the pool
    pub extra_letters: usize,
}

impl WordConfig {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Junior => WordConfig {
                duration_secs: 90.0,
                base_score: 50,
                letter_bonus: 5,
                speed_bonus: 20,
                wrong_penalty: 10,
                hint_penalty: 15,
                perfect_bonus: 30,
                extra_letters: 2,
            },
            Difficulty::Standard => WordConfig {
                duration_secs: 85.0,
                base_score: 75,
                letter_bonus: 8,
                speed_bonus: 30,
                wrong_penalty: 15,
                hint_penalty: 20,
                perfect_bonus: 50,
                extra_letters: 3,
            },
            Difficulty::Pro => WordConfig {
                duration_secs: 80.0,
                base_score: 100,
                letter_bonus: 10,
                speed_bonus: 40,
                wrong_penalty: 20,
                hint_penalty: 25,
                perfect_bonus: 75,
                extra_letters: 4,
            },
        }
    }
}
