//! Word game state machine.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::bank::{Word, bank};
use super::config::WordConfig;
use crate::difficulty::Difficulty;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPhase {
    Playing,
    Ended,
}

/// One tappable letter in the pool
#[derive(Debug, Clone, Copy)]
pub struct LetterTile {
    pub id: u32,
    pub ch: char,
    pub used: bool,
    /// Locked because the hint spent it
    pub hint_consumed: bool,
}

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct { points: u32 },
    Wrong,
}

/// Complete state for one word session
#[derive(Debug, Clone)]
pub struct WordGame {
    pub config: WordConfig,
    pub phase: WordPhase,
    pub score: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub words_completed: u32,
    pub time_left: f32,
    /// Shuffled letters for the current word
    pub pool: Vec<LetterTile>,
    /// Pool indices picked so far, in pick order
    pub picked: Vec<usize>,
    /// Answer positions revealed by the hint
    pub revealed: Vec<usize>,
    pub hint_used: bool,
    /// Wrong submissions on the current word
    pub mistakes: u32,
    /// Seconds spent on the current word (drives the speed bonus)
    word_elapsed: f32,
    bank: &'static [Word],
    current: usize,
    used_words: Vec<usize>,
    rng: Pcg32,
}

impl WordGame {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let config = WordConfig::preset(difficulty);
        let mut game = Self {
            config,
            phase: WordPhase::Playing,
            score: 0,
            streak: 0,
            max_streak: 0,
            words_completed: 0,
            time_left: config.duration_secs,
            pool: Vec::new(),
            picked: Vec::new(),
            revealed: Vec::new(),
            hint_used: false,
            mistakes: 0,
            word_elapsed: 0.0,
            bank: bank(difficulty),
            current: 0,
            used_words: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        game.next_word();
        log::info!("word session started (seed {seed})");
        game
    }

    pub fn current_word(&self) -> &'static Word {
        &self.bank[self.current]
    }

    /// Answer length of the current word
    pub fn answer_len(&self) -> usize {
        self.current_word().answer.len()
    }

    /// Draw the next word (no repeats until the bank runs dry) and rebuild
    /// the letter pool around it.
    fn next_word(&mut self) {
        if self.used_words.len() >= self.bank.len() {
            self.used_words.clear();
        }
        let remaining: Vec<usize> = (0..self.bank.len())
            .filter(|i| !self.used_words.contains(i))
            .collect();
        self.current = remaining[self.rng.random_range(0..remaining.len())];
        self.used_words.push(self.current);

        let answer = self.current_word().answer;
        let mut chars: Vec<char> = answer.chars().collect();
        for _ in 0..self.config.extra_letters {
            chars.push(ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char);
        }
        chars.shuffle(&mut self.rng);
        self.pool = chars
            .into_iter()
            .enumerate()
            .map(|(i, ch)| LetterTile {
                id: i as u32 + 1,
                ch,
                used: false,
                hint_consumed: false,
            })
            .collect();

        self.picked.clear();
        self.revealed.clear();
        self.hint_used = false;
        self.mistakes = 0;
        self.word_elapsed = 0.0;
    }

    /// The answer slots as currently filled: hint-revealed positions carry
    /// their letter; picks fill the remaining positions left to right.
    pub fn slots(&self) -> Vec<Option<char>> {
        let answer: Vec<char> = self.current_word().answer.chars().collect();
        let mut slots: Vec<Option<char>> = vec![None; answer.len()];
        let mut free = Vec::new();
        for (i, slot) in slots.iter_mut().enumerate() {
            if self.revealed.contains(&i) {
                *slot = Some(answer[i]);
            } else {
                free.push(i);
            }
        }
        for (cursor, &pool_idx) in self.picked.iter().enumerate() {
            let Some(&pos) = free.get(cursor) else {
                break;
            };
            slots[pos] = Some(self.pool[pool_idx].ch);
        }
        slots
    }

    pub fn is_complete(&self) -> bool {
        self.picked.len() + self.revealed.len() == self.answer_len()
    }

    /// Take the letter at `idx` from the pool into the next free slot.
    /// Ignored when the word is already full or the tile is spent.
    pub fn pick_letter(&mut self, idx: usize) {
        if self.phase != WordPhase::Playing {
            return;
        }
        let Some(tile) = self.pool.get(idx) else {
            return;
        };
        if tile.used {
            return;
        }
        let capacity = self.answer_len() - self.revealed.len();
        if self.picked.len() >= capacity {
            return;
        }
        self.pool[idx].used = true;
        self.picked.push(idx);
    }

    /// Return every picked letter to the pool (hint-locked tiles stay spent)
    pub fn clear_picks(&mut self) {
        for &idx in &self.picked {
            self.pool[idx].used = false;
        }
        self.picked.clear();
    }

    /// Reveal one random unrevealed answer position, spending a matching
    /// pool letter and the hint budget (one per word) plus points.
    pub fn use_hint(&mut self) {
        if self.phase != WordPhase::Playing || self.hint_used {
            return;
        }
        let answer: Vec<char> = self.current_word().answer.chars().collect();
        let unrevealed: Vec<usize> = (0..answer.len())
            .filter(|i| !self.revealed.contains(i))
            .collect();
        if unrevealed.is_empty() {
            return;
        }
        let pos = unrevealed[self.rng.random_range(0..unrevealed.len())];
        self.revealed.push(pos);

        let ch = answer[pos];
        if let Some(tile) = self.pool.iter_mut().find(|t| !t.used && t.ch == ch) {
            tile.used = true;
            tile.hint_consumed = true;
        }

        self.hint_used = true;
        self.score = self.score.saturating_sub(self.config.hint_penalty);
    }

    /// Check the filled word against the answer. Correct solves score and
    /// advance to the next word; wrong ones cost points and hand the picked
    /// letters back. `None` while slots remain empty.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.phase != WordPhase::Playing || !self.is_complete() {
            return None;
        }
        let guess: String = self.slots().into_iter().flatten().collect();
        let answer = self.current_word().answer;

        if guess == answer {
            let speed_bonus = if self.word_elapsed < 5.0 {
                self.config.speed_bonus
            } else if self.word_elapsed < 10.0 {
                self.config.speed_bonus / 2
            } else {
                0
            };

            let mut points =
                self.config.base_score + answer.len() as u32 * self.config.letter_bonus
                    + speed_bonus;
            if self.streak > 0 {
                points = (points as f32 * (1.0 + self.streak as f32 * 0.1)).round() as u32;
            }
            if !self.hint_used && self.mistakes == 0 {
                points += self.config.perfect_bonus;
            }

            self.score += points;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            self.words_completed += 1;
            self.next_word();
            Some(SubmitOutcome::Correct { points })
        } else {
            self.mistakes += 1;
            self.score = self.score.saturating_sub(self.config.wrong_penalty);
            self.streak = 0;
            self.clear_picks();
            Some(SubmitOutcome::Wrong)
        }
    }

    /// Advance the clock. Returns the final score exactly once, on the tick
    /// that drains it.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        if self.phase != WordPhase::Playing {
            return None;
        }
        self.word_elapsed += dt;
        self.time_left = (self.time_left - dt).max(0.0);
        if self.time_left <= 0.0 {
            self.phase = WordPhase::Ended;
            log::info!(
                "word session over, final score {} ({} words)",
                self.score,
                self.words_completed
            );
            return Some(self.score);
        }
        None
    }
}
