//! The card deck: the bundled prompts or a deck loaded from a JSON file

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::Card;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck has no cards")]
    Empty,
}

/// Question/answer pairs shipped with the drill
const BUNDLED_CARDS: &[(&str, &str)] = &[
    (
        "One small improvement you could make today?",
        "Pick something that takes under 10 minutes and leaves your space, code, or future self slightly better.",
    ),
    (
        "What is your single biggest priority this week?",
        "The thing that, if done, makes other tasks easier or less important.",
    ),
    (
        "Name one thing you learned recently.",
        "If you can explain it in one or two sentences, you actually understand it.",
    ),
    (
        "What is the next tiny step on a current project?",
        "Shrink the step until you could do it in 5–10 focused minutes.",
    ),
    (
        "What usually distracts you the most?",
        "Whatever it is, design one tiny speed bump between you and that distraction.",
    ),
    (
        "When do you have your best energy in the day?",
        "Protect 1–2 of those blocks as \"no-meeting, no-scroll\" time if you can.",
    ),
    (
        "A habit you want to add?",
        "Connect it to a habit you already do daily (habit stacking).",
    ),
    (
        "Something you keep postponing?",
        "Decide whether to schedule it, delegate it, or consciously drop it.",
    ),
    (
        "What does 'done' look like for your current task?",
        "Describe the finish line so your brain knows when to stop.",
    ),
    (
        "Who could you ask for help from this week?",
        "Even a short question to the right person can save hours.",
    ),
    (
        "What is one thing you can say no to?",
        "Every \"no\" protects time for the things that matter more.",
    ),
    (
        "What is a recent win you can celebrate?",
        "Write it down; your brain needs evidence that effort pays off.",
    ),
    (
        "What is one topic you would enjoy learning about?",
        "Look up a 5–10 minute introduction video or article today.",
    ),
    (
        "When was the last time you took a real break?",
        "Try a micro break: 3 deep breaths, stand, look away from screens.",
    ),
    (
        "What are three words that describe your ideal workday?",
        "Use them as a filter for what to add or remove from your schedule.",
    ),
    (
        "What is cluttering your mental RAM right now?",
        "Do a 1-minute brain dump, then choose one item to handle or park.",
    ),
    (
        "What skill would Future You thank you for practicing?",
        "Schedule a tiny rep of that skill in the next 48 hours.",
    ),
    (
        "What is one thing you are overthinking?",
        "Define the smallest version you would be okay shipping.",
    ),
    (
        "Who is someone you appreciate?",
        "Send them a short message today; doesn’t have to be long or perfect.",
    ),
    (
        "What environment helps you focus?",
        "Try to recreate one small element of that environment right now.",
    ),
    (
        "What is a tiny reward you can give yourself after a focus block?",
        "Make it simple and immediate, like tea, music, or a stretch.",
    ),
    (
        "What belief about your productivity might be limiting you?",
        "Test the opposite for just one day and see what happens.",
    ),
    (
        "When you feel stuck, what usually helps?",
        "Make that your default first response instead of scrolling.",
    ),
    (
        "What is one thing you can prepare tonight for tomorrow morning?",
        "Even a 2-minute prep can lower friction for tomorrow's start.",
    ),
    (
        "What is one habit you already do well?",
        "Use it as proof that you can stick with habits and build from there.",
    ),
    (
        "What is something you can automate or template?",
        "Anything you do 3+ times is a candidate for a template.",
    ),
    (
        "What do you want to remember a year from now about this season of life?",
        "Write one sentence that captures it.",
    ),
    (
        "What is one small risk you could take this week?",
        "Think of a low-stakes experiment rather than a huge leap.",
    ),
    (
        "What is something you could simplify?",
        "Often you can remove a step instead of optimizing it.",
    ),
    (
        "What does \"enough\" look like for you today?",
        "Define \"enough\" clearly so you can also stop and rest.",
    ),
];

/// An ordered, non-empty, immutable list of cards
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

// Never empty by construction
#[allow(clippy::len_without_is_empty)]
impl Deck {
    /// Build a deck from cards, rejecting an empty list
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    /// The default deck
    pub fn bundled() -> Self {
        let cards = BUNDLED_CARDS
            .iter()
            .map(|(q, a)| Card::new(*q, *a))
            .collect();
        Self { cards }
    }

    /// Load a deck from a JSON array of `{"q": ..., "a": ...}` objects
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        log::info!("Loaded {} cards from {:?}", cards.len(), path);
        Self::new(cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_deck() {
        let deck = Deck::bundled();
        assert_eq!(deck.len(), 30);
        assert_eq!(
            deck.get(0).unwrap().question,
            "One small improvement you could make today?"
        );
        assert!(deck.cards().iter().all(|c| !c.question.is_empty() && !c.answer.is_empty()));
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn test_load_deck_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        fs::write(
            &path,
            r#"[{"q": "2 + 2?", "a": "4"}, {"q": "Capital of France?", "a": "Paris"}]"#,
        )
        .unwrap();

        let deck = Deck::load(&path).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(1).unwrap().answer, "Paris");
    }

    #[test]
    fn test_load_empty_deck_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        fs::write(&path, "[]").unwrap();

        assert!(matches!(Deck::load(&path), Err(DeckError::Empty)));
    }

    #[test]
    fn test_load_malformed_deck_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deck.json");
        fs::write(&path, r#"[{"question": "wrong keys"}]"#).unwrap();

        assert!(matches!(Deck::load(&path), Err(DeckError::Json(_))));
    }
}
