//! Memory game state machine.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::MemoryConfig;
use super::deck::{Card, build_deck};
use super::quiz::{QUIZ_REWARD, QuizQuestion, draw_question};
use crate::difficulty::Difficulty;

/// Game lifecycle. The quiz pauses the clock; `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryPhase {
    Play,
    Quiz,
    Ended,
}

/// A second flip awaiting its timed resolution. While one is pending,
/// further flips are ignored.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Match { a: usize, b: usize, left: f32 },
    Mismatch { a: usize, b: usize, left: f32 },
}

/// Complete state for one memory session
#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub config: MemoryConfig,
    pub phase: MemoryPhase,
    pub cards: Vec<Card>,
    pub score: u32,
    /// Consecutive matches; resets on mismatch and between rounds
    pub streak: u32,
    /// Matched pairs in the current round
    pub matches: u32,
    pub round: u32,
    pub time_left: f32,
    /// Question on screen while in the quiz phase
    pub quiz: Option<&'static QuizQuestion>,
    first_pick: Option<usize>,
    pending: Option<Pending>,
    rng: Pcg32,
}

impl MemoryGame {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let config = MemoryConfig::preset(difficulty);
        let mut rng = Pcg32::seed_from_u64(seed);
        let cards = build_deck(config.total_pairs(), 0, &mut rng);
        log::info!(
            "memory session started ({}x{} grid, seed {seed})",
            config.rows,
            config.cols
        );
        Self {
            config,
            phase: MemoryPhase::Play,
            cards,
            score: 0,
            streak: 0,
            matches: 0,
            round: 1,
            time_left: config.duration_secs,
            quiz: None,
            first_pick: None,
            pending: None,
            rng,
        }
    }

    /// True while a flipped pair is waiting on its reveal/mismatch timer
    pub fn busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Flip the card at `idx`. Ignored outside the play phase, while a
    /// resolution is pending, or on an already face-up card.
    pub fn flip(&mut self, idx: usize) {
        if self.phase != MemoryPhase::Play || self.pending.is_some() {
            return;
        }
        let Some(card) = self.cards.get(idx) else {
            return;
        };
        if card.flipped || card.matched {
            return;
        }
        self.cards[idx].flipped = true;

        match self.first_pick.take() {
            None => self.first_pick = Some(idx),
            Some(first) => {
                self.pending = Some(if self.cards[first].pair_key == self.cards[idx].pair_key {
                    Pending::Match {
                        a: first,
                        b: idx,
                        left: self.config.reveal_secs,
                    }
                } else {
                    Pending::Mismatch {
                        a: first,
                        b: idx,
                        left: self.config.mismatch_secs,
                    }
                });
            }
        }
    }

    /// Answer the quiz. A correct choice banks points and seeds one free
    /// pair into the next round; either way a fresh round begins.
    /// Returns whether the answer was correct.
    pub fn answer_quiz(&mut self, choice: usize) -> bool {
        if self.phase != MemoryPhase::Quiz {
            return false;
        }
        let Some(question) = self.quiz else {
            return false;
        };
        let correct = choice == question.correct;
        if correct {
            self.score += QUIZ_REWARD;
        }

        let auto_pairs = usize::from(correct);
        self.round += 1;
        self.cards = build_deck(self.config.total_pairs(), auto_pairs, &mut self.rng);
        self.matches = auto_pairs as u32;
        self.streak = 0;
        self.first_pick = None;
        self.pending = None;
        self.quiz = None;
        self.phase = MemoryPhase::Play;
        correct
    }

    /// Advance timers. The clock only runs in the play phase; the pending
    /// pair resolves here after its delay. Returns the final score exactly
    /// once, on the tick that drains the clock.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        if self.phase != MemoryPhase::Play {
            return None;
        }

        if let Some(pending) = self.pending {
            match pending {
                Pending::Match { a, b, left } => {
                    let left = left - dt;
                    if left <= 0.0 {
                        self.cards[a].matched = true;
                        self.cards[b].matched = true;
                        self.matches += 1;
                        self.streak += 1;
                        self.score += self.config.base + self.streak * self.config.bonus;
                        self.pending = None;
                    } else {
                        self.pending = Some(Pending::Match { a, b, left });
                    }
                }
                Pending::Mismatch { a, b, left } => {
                    let left = left - dt;
                    if left <= 0.0 {
                        self.cards[a].flipped = false;
                        self.cards[b].flipped = false;
                        self.score = self.score.saturating_sub(self.config.penalty);
                        self.streak = 0;
                        self.pending = None;
                    } else {
                        self.pending = Some(Pending::Mismatch { a, b, left });
                    }
                }
            }
        }

        // Grid cleared with time to spare: pose a question, clock pauses
        if self.pending.is_none()
            && self.matches as usize == self.config.total_pairs()
            && self.time_left > 0.0
        {
            self.quiz = Some(draw_question(&mut self.rng));
            self.phase = MemoryPhase::Quiz;
            return None;
        }

        self.time_left = (self.time_left - dt).max(0.0);
        if self.time_left <= 0.0 {
            self.phase = MemoryPhase::Ended;
            log::info!("memory session over, final score {}", self.score);
            return Some(self.score);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> MemoryGame {
        MemoryGame::new(Difficulty::Junior, 7)
    }

    /// Indices of the two cards sharing the given pair key
    fn pair_indices(game: &MemoryGame, key: u32) -> (usize, usize) {
        let mut found = game
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.pair_key == key)
            .map(|(i, _)| i);
        (found.next().unwrap(), found.next().unwrap())
    }

    fn settle(game: &mut MemoryGame) {
        // Longer than any reveal/mismatch delay
        game.tick(1.0);
    }

    #[test]
    fn test_deck_matches_grid() {
        let game = game();
        assert_eq!(game.cards.len(), 16);
        assert_eq!(game.config.total_pairs(), 8);
    }

    #[test]
    fn test_match_scores_with_streak_bonus() {
        let mut game = game();
        let (a, b) = pair_indices(&game, 1);
        game.flip(a);
        game.flip(b);
        assert!(game.busy());
        settle(&mut game);

        // Junior tier: base 10, bonus 3, first streak step
        assert_eq!(game.score, 13);
        assert_eq!(game.streak, 1);
        assert_eq!(game.matches, 1);
        assert!(game.cards[a].matched && game.cards[b].matched);

        let (c, d) = pair_indices(&game, 2);
        game.flip(c);
        game.flip(d);
        settle(&mut game);
        assert_eq!(game.score, 13 + 10 + 2 * 3);
        assert_eq!(game.streak, 2);
    }

    #[test]
    fn test_mismatch_flips_back_and_penalizes() {
        let mut game = game();
        let (a, _) = pair_indices(&game, 1);
        let (b, _) = pair_indices(&game, 2);
        game.flip(a);
        game.flip(b);
        settle(&mut game);

        assert!(!game.cards[a].flipped && !game.cards[b].flipped);
        assert_eq!(game.score, 0); // clamped, penalty from zero
        assert_eq!(game.streak, 0);
    }

    #[test]
    fn test_flips_ignored_while_pending() {
        let mut game = game();
        let (a, _) = pair_indices(&game, 1);
        let (b, _) = pair_indices(&game, 2);
        let (c, _) = pair_indices(&game, 3);
        game.flip(a);
        game.flip(b);
        game.flip(c);
        assert!(!game.cards[c].flipped);
    }

    #[test]
    fn test_refuses_double_flip_of_same_card() {
        let mut game = game();
        let (a, _) = pair_indices(&game, 1);
        game.flip(a);
        game.flip(a);
        assert!(!game.busy());
    }

    fn clear_grid(game: &mut MemoryGame) {
        for key in 1..=game.config.total_pairs() as u32 {
            let (a, b) = pair_indices(game, key);
            if game.cards[a].matched {
                continue;
            }
            game.flip(a);
            game.flip(b);
            settle(game);
        }
    }

    #[test]
    fn test_cleared_grid_poses_quiz_and_pauses_clock() {
        let mut game = game();
        clear_grid(&mut game);
        assert_eq!(game.phase, MemoryPhase::Quiz);
        assert!(game.quiz.is_some());

        let frozen = game.time_left;
        assert_eq!(game.tick(5.0), None);
        assert_eq!(game.time_left, frozen);
    }

    #[test]
    fn test_correct_quiz_answer_banks_points_and_seeds_pair() {
        let mut game = game();
        clear_grid(&mut game);
        let score_before = game.score;
        let correct_choice = game.quiz.unwrap().correct;

        assert!(game.answer_quiz(correct_choice));
        assert_eq!(game.score, score_before + QUIZ_REWARD);
        assert_eq!(game.round, 2);
        assert_eq!(game.matches, 1);
        assert_eq!(game.cards.iter().filter(|c| c.matched).count(), 2);
        assert_eq!(game.phase, MemoryPhase::Play);
        assert_eq!(game.streak, 0);
    }

    #[test]
    fn test_wrong_quiz_answer_starts_round_without_seed() {
        let mut game = game();
        clear_grid(&mut game);
        let score_before = game.score;
        let wrong_choice = (game.quiz.unwrap().correct + 1) % 3;

        assert!(!game.answer_quiz(wrong_choice));
        assert_eq!(game.score, score_before);
        assert_eq!(game.matches, 0);
        assert!(game.cards.iter().all(|c| !c.matched));
    }

    #[test]
    fn test_clock_ends_session_exactly_once() {
        let mut game = game();
        game.time_left = 0.05;
        assert_eq!(game.tick(0.1), Some(0));
        assert_eq!(game.phase, MemoryPhase::Ended);
        assert_eq!(game.tick(0.1), None);
    }
}
