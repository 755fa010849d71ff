//! Word banks, one per difficulty tier.

use crate::difficulty::Difficulty;

#[derive(Debug, Clone, Copy)]
pub struct Word {
    /// Uppercase A-Z only
    pub answer: &'static str,
    pub hint: &'static str,
    pub category: &'static str,
}

const JUNIOR: &[Word] = &[
    Word {
        answer: "PASSWORD",
        hint: "You log into your account with this",
        category: "Accounts",
    },
    Word {
        answer: "HTTPS",
        hint: "The green padlock in the browser",
        category: "Web",
    },
    Word {
        answer: "EMAIL",
        hint: "Electronic mail",
        category: "Messaging",
    },
    Word {
        answer: "VIRUS",
        hint: "Infects the computer",
        category: "Malware",
    },
    Word {
        answer: "CLOUD",
        hint: "Keeps your data online",
        category: "Storage",
    },
    Word {
        answer: "WIFI",
        hint: "Internet without wires",
        category: "Networks",
    },
    Word {
        answer: "SPAM",
        hint: "Junk mail you never asked for",
        category: "Messaging",
    },
    Word {
        answer: "CODE",
        hint: "Passwords or programming",
        category: "Tech",
    },
];

const STANDARD: &[Word] = &[
    Word {
        answer: "PRIVACY",
        hint: "Protecting your personal data",
        category: "Data",
    },
    Word {
        answer: "MALWARE",
        hint: "Harmful software",
        category: "Threats",
    },
    Word {
        answer: "FIREWALL",
        hint: "A network's security barrier",
        category: "Defense",
    },
    Word {
        answer: "BACKUP",
        hint: "A safety copy of your data",
        category: "Data",
    },
    Word {
        answer: "PHISHING",
        hint: "A scam that arrives by email",
        category: "Scams",
    },
    Word {
        answer: "COOKIE",
        hint: "Tracks your browsing",
        category: "Web",
    },
    Word {
        answer: "ROUTER",
        hint: "Hands out internet at home",
        category: "Networks",
    },
    Word {
        answer: "ANTIVIRUS",
        hint: "Hunts malware on your machine",
        category: "Defense",
    },
];

const PRO: &[Word] = &[
    Word {
        answer: "RANSOMWARE",
        hint: "Locks your files for money",
        category: "Threats",
    },
    Word {
        answer: "KEYLOGGER",
        hint: "Records everything you type",
        category: "Spying",
    },
    Word {
        answer: "HONEYPOT",
        hint: "A trap set for attackers",
        category: "Defense",
    },
    Word {
        answer: "SANDBOX",
        hint: "An isolated place to test things",
        category: "Defense",
    },
    Word {
        answer: "SPYWARE",
        hint: "Watches you without asking",
        category: "Spying",
    },
    Word {
        answer: "DARKWEB",
        hint: "The hidden internet",
        category: "Web",
    },
    Word {
        answer: "BLOCKCHAIN",
        hint: "The technology behind crypto",
        category: "Tech",
    },
    Word {
        answer: "ENCRYPTION",
        hint: "Makes data unreadable to outsiders",
        category: "Data",
    },
];

pub fn bank(difficulty: Difficulty) -> &'static [Word] {
    match difficulty {
        Difficulty::Junior => JUNIOR,
        Difficulty::Standard => STANDARD,
        Difficulty::Pro => PRO,
    }
}
