//! Between-round quiz questions.
//!
//! Clearing the grid poses one of these; a correct answer banks points and
//! seeds a free pair into the next round's deck.

use rand::Rng;
use rand_pcg::Pcg32;

/// Points awarded for a correct quiz answer
pub const QUIZ_REWARD: u32 = 25;

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub choices: [&'static str; 3],
    /// Index into `choices`
    pub correct: usize,
}

pub const QUIZ_BANK: [QuizQuestion; 12] = [
    QuizQuestion {
        prompt: "You get a suspicious link in a DM. What do you do?",
        choices: ["Open it right away", "Forward it to everyone", "Don't click, report it"],
        correct: 2,
    },
    QuizQuestion {
        prompt: "A strong password is...",
        choices: ["123456", "A long phrase plus symbols", "Your own name"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "What does the padlock in the browser bar mean?",
        choices: ["Secure connection (HTTPS)", "Slow website", "Nothing"],
        correct: 0,
    },
    QuizQuestion {
        prompt: "Phishing is...",
        choices: ["A fishing video game", "A scam to steal your data", "An antivirus"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Two-factor authentication is for...",
        choices: ["Decoration", "Extra account security", "Gaming"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "When should you update your system and apps?",
        choices: ["As soon as updates arrive", "Never", "Only when something breaks"],
        correct: 0,
    },
    QuizQuestion {
        prompt: "On public Wi-Fi you should NOT...",
        choices: ["Log into your bank unprotected", "Read the news", "Check the weather"],
        correct: 0,
    },
    QuizQuestion {
        prompt: "\"Support\" messages you asking for your password. You...",
        choices: ["Send it", "Send half of it", "Never share it, and report"],
        correct: 2,
    },
    QuizQuestion {
        prompt: "The best way to handle passwords is...",
        choices: ["Same one everywhere", "Unique ones in a password manager", "Sticky notes"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "You find a USB stick on the street. What now?",
        choices: ["Plug it in out of curiosity", "Bin it or scan it in a sandbox", "Gift it to a friend"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "A \"you won!\" message with a link. How do you react?",
        choices: ["Click and fill the form", "Ignore and report: likely a scam", "Reply with my details"],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Safe backups are...",
        choices: ["One copy on the PC", "Several copies (offline/cloud)", "No backups"],
        correct: 1,
    },
];

/// Pick a random question from the bank
pub fn draw_question(rng: &mut Pcg32) -> &'static QuizQuestion {
    &QUIZ_BANK[rng.random_range(0..QUIZ_BANK.len())]
}
