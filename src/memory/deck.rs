//! Deck construction for the memory grid.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

/// Icon roster the pairs draw from. The driver maps names to sprites.
pub const ICONS: [&str; 18] = [
    "robot",
    "shield",
    "hacker",
    "padlock",
    "virus",
    "spy",
    "camera",
    "phone",
    "vpn",
    "computer",
    "microphone",
    "cpu",
    "keyboard",
    "mouse",
    "envelope",
    "globe",
    "copyright",
    "wifi",
];

/// One grid cell
#[derive(Debug, Clone)]
pub struct Card {
    pub id: u32,
    pub icon: &'static str,
    pub pair_key: u32,
    pub flipped: bool,
    pub matched: bool,
}

/// Build a shuffled deck of `total_pairs` pairs. `auto_pairs` of them come
/// pre-matched (face-up), used to reward a correct quiz answer at the start
/// of a fresh round.
pub fn build_deck(total_pairs: usize, auto_pairs: usize, rng: &mut Pcg32) -> Vec<Card> {
    let mut deck = Vec::with_capacity(total_pairs * 2);
    let mut id = 1;
    for (idx, &icon) in ICONS.iter().take(total_pairs).enumerate() {
        let pair_key = idx as u32 + 1;
        for _ in 0..2 {
            deck.push(Card {
                id,
                icon,
                pair_key,
                flipped: false,
                matched: false,
            });
            id += 1;
        }
    }
    deck.shuffle(rng);

    if auto_pairs > 0 {
        let mut keys: Vec<u32> = (1..=total_pairs as u32).collect();
        keys.shuffle(rng);
        let seeded: Vec<u32> = keys.into_iter().take(auto_pairs).collect();
        for card in &mut deck {
            if seeded.contains(&card.pair_key) {
                card.flipped = true;
                card.matched = true;
            }
        }
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_deck_has_two_of_each_pair() {
        let mut rng = Pcg32::seed_from_u64(5);
        let deck = build_deck(8, 0, &mut rng);
        assert_eq!(deck.len(), 16);
        for key in 1..=8u32 {
            assert_eq!(deck.iter().filter(|c| c.pair_key == key).count(), 2);
        }
        assert!(deck.iter().all(|c| !c.flipped && !c.matched));
    }

    #[test]
    fn test_auto_pairs_come_pre_matched() {
        let mut rng = Pcg32::seed_from_u64(5);
        let deck = build_deck(10, 2, &mut rng);
        let matched: Vec<_> = deck.iter().filter(|c| c.matched).collect();
        assert_eq!(matched.len(), 4);
        assert!(matched.iter().all(|c| c.flipped));
    }

    #[test]
    fn test_card_ids_unique() {
        let mut rng = Pcg32::seed_from_u64(9);
        let deck = build_deck(18, 0, &mut rng);
        let mut ids: Vec<u32> = deck.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 36);
    }
}
