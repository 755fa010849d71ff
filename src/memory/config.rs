//! Difficulty tuning for the memory game.

use crate::difficulty::Difficulty;

#[derive(Debug, Clone, Copy)]
pub struct MemoryConfig {
    pub rows: usize,
    pub cols: usize,
    /// Session length (seconds)
    pub duration_secs: f32,
    /// How long a matched pair stays face-up before it locks in
    pub reveal_secs: f32,
    /// How long a mismatched pair stays face-up before flipping back
    pub mismatch_secs: f32,
    /// Points per matched pair, before the streak bonus
    pub base: u32,
    /// Extra points per streak step on a match
    pub bonus: u32,
    /// Points lost on a mismatch
    pub penalty: u32,
}

impl MemoryConfig {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Junior => MemoryConfig {
                rows: 4,
                cols: 4,
                duration_secs: 65.0,
                reveal_secs: 0.85,
                mismatch_secs: 0.6,
                base: 10,
                bonus: 3,
                penalty: 2,
            },
            Difficulty::Standard => MemoryConfig {
                rows: 5,
                cols: 4,
                duration_secs: 75.0,
                reveal_secs: 0.75,
                mismatch_secs: 0.55,
                base: 12,
                bonus: 4,
                penalty: 3,
            },
            Difficulty::Pro => MemoryConfig {
                rows: 6,
                cols: 6,
                duration_secs: 85.0,
                reveal_secs: 0.7,
                mismatch_secs: 0.5,
                base: 14,
                bonus: 5,
                penalty: 4,
            },
        }
    }

    pub fn total_cards(&self) -> usize {
        self.rows * self.cols
    }

    pub fn total_pairs(&self) -> usize {
        self.total_cards() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grids_are_even_sized() {
        for d in Difficulty::ALL {
            let config = MemoryConfig::preset(d);
            assert_eq!(config.total_cards() % 2, 0);
            assert!(config.total_pairs() <= crate::memory::deck::ICONS.len());
        }
    }
}
